//! Resolution behaviour of the negotiation core.

use proptest::prelude::*;
use select_lang::{GroupConfig, GroupError, HeaderScanner, Source};

#[test]
fn test_default_fallback() {
    let config = GroupConfig::build(["en:en-US", "fr:fr-FR"]).unwrap();
    assert_eq!(config.resolve(None, None), "en");
}

#[test]
fn test_cookie_priority_over_header() {
    let config = GroupConfig::build(["en", "fr"]).unwrap();
    assert_eq!(config.resolve(Some("FR"), Some("en")), "fr");
}

#[test]
fn test_header_quality_skip() {
    let config = GroupConfig::build(["fr", "en"]).unwrap();
    let selection = config.select(None, Some("en-GB;q=0.8, fr;q=0.9".as_bytes()));

    assert_eq!(selection.alias, "fr");
    assert_eq!(selection.source, Source::Header);
}

#[test]
fn test_first_match_not_highest_quality() {
    let config = GroupConfig::build(["en", "fr"]).unwrap();
    assert_eq!(config.resolve(None, Some("fr;q=0.9, en;q=0.1")), "fr");
}

#[test]
fn test_degenerate_headers_fall_through() {
    let config = GroupConfig::build(["en", "fr"]).unwrap();

    for header in ["", "   ", ",", " , ,", ";q=0.5"] {
        let selection = config.select(None, Some(header.as_bytes()));
        assert_eq!(selection.alias, "en", "header {header:?}");
        assert_eq!(selection.source, Source::Default, "header {header:?}");
    }
}

#[test]
fn test_config_rejection() {
    assert!(matches!(
        GroupConfig::build(["en", ":::"]),
        Err(GroupError::EmptyGroup { index: 1, .. })
    ));
}

#[test]
fn test_non_utf8_header_is_scanned() {
    let config = GroupConfig::build(["en", "fr"]).unwrap();
    let header: &[u8] = b"\xff\xfe, fr";
    assert_eq!(config.select(None, Some(header)).alias, "fr");
}

#[test]
fn test_idempotence() {
    let config = GroupConfig::build(["en", "de:de-DE:de-AT"]).unwrap();
    let first = config.resolve(Some("xx"), Some("it, DE-at;q=0.3"));
    for _ in 0..10 {
        assert_eq!(config.resolve(Some("xx"), Some("it, DE-at;q=0.3")), first);
    }
    assert_eq!(first, "de");
}

proptest! {
    #[test]
    fn resolution_is_total(cookie in proptest::option::of(".{0,20}"), header in proptest::option::of(".{0,60}")) {
        let config = GroupConfig::build(["en:en-US", "fr", "ja:ja-JP"]).unwrap();
        let alias = config.resolve(cookie.as_deref(), header.as_deref());
        prop_assert!(["en", "fr", "ja"].contains(&alias));
    }

    #[test]
    fn tokens_never_contain_delimiters(header in "[a-zA-Z ,;=.0-9-]{0,80}") {
        for token in HeaderScanner::new(header.as_bytes()) {
            prop_assert!(!token.contains(&b','));
            prop_assert!(!token.contains(&b';'));
            prop_assert!(!token.starts_with(b" "));
        }
    }

    #[test]
    fn listed_alias_is_found(prefix in "[a-z]{2}(-[A-Z]{2})?", alias in prop::sample::select(vec!["en", "fr", "ja-JP"])) {
        let config = GroupConfig::build(["en:en-US", "fr", "ja:ja-JP"]).unwrap();
        let header = format!("{prefix};q=0.9, {alias}");
        let expected = config
            .find_group(prefix.as_bytes())
            .or_else(|| config.find_group(alias.as_bytes()))
            .map(|group| group.canonical());
        prop_assert_eq!(Some(config.resolve(None, Some(header.as_str()))), expected);
    }
}
