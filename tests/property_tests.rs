#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Properties that hold across flags and inputs
///
/// - Normalizing twice with a preset gives the same result as once
/// - A wider preset continues where a narrower one stopped
/// - Sorting a query is a fixpoint
use urlcanon::{Flags, QueryParams, normalize_str};

const URLS: &[&str] = &[
    "HTTPS://www.RooT.com/toto/t%45%1f///a/./b/../c/?z=3&w=2&a=4&w=1#invalid",
    "HTTP://www.SRC.ca:80/to%1ato%8b%ee/./c/d/../OKnow%41%42%43%7e/?a=b#test",
    "http://example.com/a/%2E%2E/b?q=a+b&p=%7e",
    "http://Example.COM:8080/x/y/",
    "Http://SomeURL.com:8080/a/b/.././c///g?c=3&a=1&b=9&c=0#target",
    "mailto:Someone@Example.com?subject=Hi%20there",
    "//cdn.example.com/lib/./main.js",
    "http://[2001:DB8::1]:80/docs/?",
];

const PRESETS: [Flags; 3] = [Flags::SAFE, Flags::USUALLY_SAFE, Flags::UNSAFE];

#[test]
fn test_presets_are_idempotent() {
    for url in URLS {
        for flags in PRESETS {
            let once = normalize_str(url, flags).unwrap();
            let twice = normalize_str(&once, flags).unwrap();
            assert_eq!(once, twice, "{url} with {flags}");
        }
    }
}

#[test]
fn test_second_pass_can_still_shorten() {
    // Steps run once in a fixed order, so a slash left behind by a later
    // step is only removed by the next pass
    for (url, flags, once, twice) in [
        ("http://h/a/..", Flags::USUALLY_SAFE, "http://h/", "http://h"),
        ("http://h/a/index.html", Flags::UNSAFE, "http://h/a/", "http://h/a"),
    ] {
        let first = normalize_str(url, flags).unwrap();
        assert_eq!(first, once, "{url} with {flags}");
        let second = normalize_str(&first, flags).unwrap();
        assert_eq!(second, twice, "{url} with {flags}");
        assert_eq!(normalize_str(&second, flags).unwrap(), second, "{url} with {flags}");
    }
}

#[test]
fn test_wider_preset_continues_narrower() {
    for url in URLS {
        let usually_safe = normalize_str(url, Flags::USUALLY_SAFE).unwrap();
        let from_safe = normalize_str(
            &normalize_str(url, Flags::SAFE).unwrap(),
            Flags::USUALLY_SAFE.difference(Flags::SAFE),
        )
        .unwrap();
        assert_eq!(from_safe, usually_safe, "{url}");

        let unsafe_ = normalize_str(url, Flags::UNSAFE).unwrap();
        let from_usually_safe = normalize_str(
            &usually_safe,
            Flags::UNSAFE.difference(Flags::USUALLY_SAFE),
        )
        .unwrap();
        assert_eq!(from_usually_safe, unsafe_, "{url}");
    }
}

#[test]
fn test_narrower_preset_keeps_wider_result() {
    for url in URLS {
        let unsafe_ = normalize_str(url, Flags::UNSAFE).unwrap();
        for flags in [Flags::SAFE, Flags::USUALLY_SAFE] {
            assert_eq!(normalize_str(&unsafe_, flags).unwrap(), unsafe_, "{url} with {flags}");
        }
    }
}

#[test]
fn test_sort_query_is_fixpoint() {
    for url in [
        "http://h/?z=3&w=2&a=4&w=1",
        "http://h/?q=a+b%20c&q=%7e&empty&=v",
        "http://h/?%zz=1&a=1;b=2",
        "http://h/?k=%e9&K=%C3%A9",
    ] {
        let once = normalize_str(url, Flags::SORT_QUERY).unwrap();
        let twice = normalize_str(&once, Flags::SORT_QUERY).unwrap();
        assert_eq!(once, twice, "{url}");

        let query = once.split_once('?').map_or("", |(_, query)| query);
        assert_eq!(QueryParams::parse(query).to_sorted_string(), query, "{url}");
    }
}

#[test]
fn test_no_flags_changes_nothing() {
    for url in URLS {
        assert_eq!(normalize_str(url, Flags::empty()).unwrap(), *url);
    }
}
