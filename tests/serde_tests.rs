#![cfg(feature = "serde")]
#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Flags as configuration values
use serde::Deserialize;
use urlcanon::{Flags, normalize_str};

#[derive(Debug, Deserialize)]
struct CrawlerConfig {
    normalization: Flags,
}

#[test]
fn test_flags_serialize_as_names() {
    let flags = Flags::LOWERCASE_SCHEME | Flags::SORT_QUERY;
    assert_eq!(
        serde_json::to_string(&flags).unwrap(),
        "\"LOWERCASE_SCHEME | SORT_QUERY\""
    );
}

#[test]
fn test_flags_deserialize_presets() {
    let config: CrawlerConfig =
        serde_json::from_str(r#"{ "normalization": "USUALLY_SAFE | SORT_QUERY" }"#).unwrap();
    assert_eq!(config.normalization, Flags::USUALLY_SAFE | Flags::SORT_QUERY);
    assert_eq!(
        normalize_str("HTTP://Example.com/a/?b=1&a=2", config.normalization).unwrap(),
        "http://example.com/a?a=2&b=1"
    );
}

#[test]
fn test_unknown_flag_is_rejected() {
    let result = serde_json::from_str::<Flags>("\"SORT_QUERIES\"");
    assert!(result.is_err());
}
