use crate::compat::{String, format};
use crate::url_fields::UrlFields;

/// Port that is dropped by [`remove_default_port`]
const DEFAULT_PORT_SUFFIX: &str = ":80";

/// Lowercase the host, port included (which is digits anyway)
pub fn lowercase_host(url: &mut dyn UrlFields) {
    let host = url.host();
    if host.chars().any(char::is_uppercase) {
        let host: String = host.to_lowercase();
        url.set_host(&host);
    }
}

/// Strip a trailing `:80` from the host.
///
/// A `/` right after the port is dropped with it; it only shows up when a
/// trailing slash was added to a host without a path. Any other port stays.
pub fn remove_default_port(url: &mut dyn UrlFields) {
    let host = url.host();
    let without_slash = host.strip_suffix('/').unwrap_or(host);
    if let Some(name) = without_slash.strip_suffix(DEFAULT_PORT_SUFFIX) {
        let name = String::from(name);
        url.set_host(&name);
    }
}

fn has_www_prefix(host: &str) -> bool {
    host.get(..4)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("www."))
}

/// `www.example.com` -> `example.com`, in any case
pub fn remove_www(url: &mut dyn UrlFields) {
    if has_www_prefix(url.host()) {
        let host = String::from(&url.host()[4..]);
        url.set_host(&host);
    }
}

/// `example.com` -> `www.example.com`, unless some `www.` is already there
pub fn add_www(url: &mut dyn UrlFields) {
    let host = url.host();
    if !host.is_empty() && !has_www_prefix(host) {
        let host = format!("www.{host}");
        url.set_host(&host);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transforms::test_support::url;

    #[test]
    fn test_lowercase_host() {
        let mut u = url("HTTP://www.SRC.ca/");
        lowercase_host(&mut u);
        assert_eq!(u.href(), "HTTP://www.src.ca/");

        // Path case is significant and stays
        let mut u = url("http://EXAMPLE.com:8080/Path");
        lowercase_host(&mut u);
        assert_eq!(u.href(), "http://example.com:8080/Path");
    }

    #[test]
    fn test_lowercase_non_ascii_host() {
        let mut u = url("http://BÜCHER.example/");
        lowercase_host(&mut u);
        assert_eq!(u.host(), "bücher.example");
    }

    #[test]
    fn test_remove_default_port() {
        for (input, expected) in [
            ("HTTP://www.SRC.ca:80/", "HTTP://www.SRC.ca/"),
            ("HTTP://www.SRC.ca:80", "HTTP://www.SRC.ca"),
            ("http://www.src.ca:80", "http://www.src.ca"),
            ("HTTP://www.SRC.ca:8080", "HTTP://www.SRC.ca:8080"),
            ("http://www.src.ca:180/", "http://www.src.ca:180/"),
            ("http://[::1]:80/x", "http://[::1]/x"),
            ("http://[::80]/x", "http://[::80]/x"),
            ("http://src.ca/", "http://src.ca/"),
        ] {
            let mut u = url(input);
            remove_default_port(&mut u);
            assert_eq!(u.href(), expected, "{input}");
        }
    }

    #[test]
    fn test_remove_default_port_with_trailing_slash_in_host() {
        let mut u = url("http://www.src.ca:80");
        u.set_host("www.src.ca:80/");
        remove_default_port(&mut u);
        assert_eq!(u.host(), "www.src.ca");

        u.set_host("www.src.ca:8080/");
        remove_default_port(&mut u);
        assert_eq!(u.host(), "www.src.ca:8080/");
    }

    #[test]
    fn test_remove_www() {
        let mut u = url("https://www.root/a/b/c/");
        remove_www(&mut u);
        assert_eq!(u.href(), "https://root/a/b/c/");

        let mut u = url("https://WwW.Root/a/b/c/");
        remove_www(&mut u);
        assert_eq!(u.href(), "https://Root/a/b/c/");

        // Only the leading label counts
        let mut u = url("https://wwwroot.com/");
        remove_www(&mut u);
        assert_eq!(u.href(), "https://wwwroot.com/");
    }

    #[test]
    fn test_add_www() {
        let mut u = url("https://Root/a/b/c/");
        add_www(&mut u);
        assert_eq!(u.href(), "https://www.Root/a/b/c/");

        let mut u = url("https://WWW.root/");
        add_www(&mut u);
        assert_eq!(u.href(), "https://WWW.root/");
    }

    #[test]
    fn test_add_www_needs_a_host() {
        let mut u = url("/relative/path");
        add_www(&mut u);
        assert_eq!(u.href(), "/relative/path");
    }
}
