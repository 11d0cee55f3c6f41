//! Cookie extraction.
//!
//! # Responsibilities
//! - Find the `lang` cookie across all `Cookie` header lines
//!
//! # Design Decisions
//! - First occurrence wins when the cookie is sent more than once
//! - Cookie names compare case-insensitively
//! - Pairs are separated by `;` or `,`; spaces before a name are skipped
//! - The name must be followed directly by `=`; the value runs verbatim to
//!   the next separator, so `lang=fr ;` yields `"fr "`
//! - A present but empty cookie is returned as an empty slice

use axum::http::{header::COOKIE, HeaderMap};

/// Cookie carrying the user's explicit language choice.
pub const LANG_COOKIE: &str = "lang";

/// Value of the named cookie, if any `Cookie` header carries it.
pub fn find_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a [u8]> {
    headers
        .get_all(COOKIE)
        .iter()
        .find_map(|value| find_in_line(value.as_bytes(), name.as_bytes()))
}

fn find_in_line<'a>(line: &'a [u8], name: &[u8]) -> Option<&'a [u8]> {
    line.split(|b| *b == b';' || *b == b',').find_map(|pair| {
        let start = pair.iter().position(|b| *b != b' ')?;
        let pair = &pair[start..];
        let eq = pair.iter().position(|b| *b == b'=')?;
        let (key, value) = (&pair[..eq], &pair[eq + 1..]);
        if key.eq_ignore_ascii_case(name) {
            Some(value)
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(lines: &[&'static str]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for line in lines {
            map.append(COOKIE, HeaderValue::from_static(line));
        }
        map
    }

    #[test]
    fn test_find_cookie_in_single_line() {
        let map = headers(&["session=abc; lang=fr; theme=dark"]);
        assert_eq!(find_cookie(&map, LANG_COOKIE), Some(&b"fr"[..]));
    }

    #[test]
    fn test_find_cookie_first_line_wins() {
        let map = headers(&["theme=dark", "LANG=ja", "lang=ko"]);
        assert_eq!(find_cookie(&map, LANG_COOKIE), Some(&b"ja"[..]));
    }

    #[test]
    fn test_absent_and_empty_cookie_differ() {
        assert_eq!(find_cookie(&headers(&["theme=dark"]), LANG_COOKIE), None);
        assert_eq!(find_cookie(&HeaderMap::new(), LANG_COOKIE), None);
        assert_eq!(find_cookie(&headers(&["lang="]), LANG_COOKIE), Some(&b""[..]));
    }

    #[test]
    fn test_value_is_not_trimmed() {
        let map = headers(&["lang=fr ;x=1"]);
        assert_eq!(find_cookie(&map, LANG_COOKIE), Some(&b"fr "[..]));

        let map = headers(&["lang= fr"]);
        assert_eq!(find_cookie(&map, LANG_COOKIE), Some(&b" fr"[..]));

        let map = headers(&["lang =fr"]);
        assert_eq!(find_cookie(&map, LANG_COOKIE), None);
    }

    #[test]
    fn test_name_must_match_exactly() {
        let map = headers(&["language=de; xlang=it"]);
        assert_eq!(find_cookie(&map, LANG_COOKIE), None);
    }
}
