//! `Accept-Language` tokenizer.
//!
//! # States
//! ```text
//! SkipLeadingSpace → ScanToken → (yield) → SkipQualityIfPresent
//!     → SkipSeparator → SkipLeadingSpace | Done
//! ```
//!
//! # Design Decisions
//! - Only plain ASCII space is skipped before a token
//! - A token ends at `,`, `;` or end of input
//! - Everything from `;` up to the next `,` is discarded unparsed
//! - Empty tokens are yielded as-is; they never match a non-empty alias

const SPACE: u8 = b' ';
const SEPARATOR: u8 = b',';
const PARAMS: u8 = b';';

/// Lazy, borrowing iterator over the language tokens of a header value.
///
/// Tokens come out in header order. Cloning the scanner before use, or
/// creating a new one, restarts from the beginning.
#[derive(Debug, Clone)]
pub struct HeaderScanner<'a> {
    input: &'a [u8],
    cursor: usize,
}

impl<'a> HeaderScanner<'a> {
    /// Create a scanner over a raw header value.
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, cursor: 0 }
    }

    fn peek(&self, at: usize) -> Option<u8> {
        self.input.get(at).copied()
    }
}

impl<'a> Iterator for HeaderScanner<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let end = self.input.len();
        if self.cursor >= end {
            return None;
        }

        let mut start = self.cursor;
        while self.peek(start) == Some(SPACE) {
            start += 1;
        }

        let mut pos = start;
        while let Some(byte) = self.peek(pos) {
            if byte == SEPARATOR || byte == PARAMS {
                break;
            }
            pos += 1;
        }
        let token = &self.input[start..pos];

        if self.peek(pos) == Some(PARAMS) {
            while let Some(byte) = self.peek(pos) {
                if byte == SEPARATOR {
                    break;
                }
                pos += 1;
            }
        }
        if self.peek(pos) == Some(SEPARATOR) {
            pos += 1;
        }

        self.cursor = pos;
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(header: &str) -> Vec<&str> {
        HeaderScanner::new(header.as_bytes())
            .map(|t| std::str::from_utf8(t).unwrap())
            .collect()
    }

    #[test]
    fn test_scan_skips_quality() {
        assert_eq!(tokens("en-GB;q=0.8, fr;q=0.9"), ["en-GB", "fr"]);
        assert_eq!(tokens("da, en-gb;q=0.8, en;q=0.7"), ["da", "en-gb", "en"]);
    }

    #[test]
    fn test_scan_only_plain_spaces_are_skipped() {
        assert_eq!(tokens("   de"), ["de"]);
        assert_eq!(tokens("\tde"), ["\tde"]);
        // trailing spaces are part of the token
        assert_eq!(tokens("de , fr"), ["de ", "fr"]);
    }

    #[test]
    fn test_scan_degenerate_headers() {
        assert!(tokens("").is_empty());
        assert_eq!(tokens("   "), [""]);
        assert_eq!(tokens(","), [""]);
        assert_eq!(tokens(",,"), ["", ""]);
        assert_eq!(tokens("en, "), ["en", ""]);
        assert_eq!(tokens(";q=1"), [""]);
    }

    #[test]
    fn test_scan_unterminated_quality() {
        assert_eq!(tokens("fr;q=0.5"), ["fr"]);
        assert_eq!(tokens("fr;q=0.5;level=1,en"), ["fr", "en"]);
    }

    #[test]
    fn test_scan_is_restartable() {
        let scanner = HeaderScanner::new(b"ja, ko");
        let first: Vec<_> = scanner.clone().collect();
        let second: Vec<_> = scanner.collect();
        assert_eq!(first, second);
    }
}
