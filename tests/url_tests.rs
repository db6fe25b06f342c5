#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Structured URL tests
///
/// This test suite covers:
/// - Parsing into raw fields and serializing back
/// - Normalizing a caller-provided `UrlFields` implementation
use urlcanon::{Flags, ParseError, Url, UrlFields, normalize};

#[test]
fn test_parse_fields() {
    let url = Url::parse("HTTPS://user@www.RooT.com:8080/toto/t%45?z=3&w=2#frag").unwrap();
    assert_eq!(url.scheme(), "HTTPS");
    assert_eq!(url.userinfo(), Some("user"));
    assert_eq!(url.host(), "www.RooT.com:8080");
    assert_eq!(url.hostname(), "www.RooT.com");
    assert_eq!(url.port(), "8080");
    assert_eq!(url.path(), "/toto/t%45");
    assert_eq!(url.query(), Some("z=3&w=2"));
    assert_eq!(url.fragment(), Some("frag"));
}

#[test]
fn test_serialize_is_verbatim() {
    for input in [
        "HTTP://www.SRC.ca:80/to%1ato%8b%ee/./c/d/../OKnow%41%42%43%7e/?a=b#test",
        "http://root/toto/?",
        "http://root/toto/#",
        "http://root/toto/?#",
        "file:///etc/hosts",
        "urn:isbn:0451450523",
        "?only=query",
        "#only-fragment",
    ] {
        let url = Url::parse(input).unwrap();
        assert_eq!(url.href(), input);
        assert_eq!(String::from(url), input);
    }
}

#[test]
fn test_empty_authority() {
    let url = Url::parse("file:///etc/hosts").unwrap();
    assert!(url.has_authority());
    assert_eq!(url.host(), "");
    assert_eq!(url.path(), "/etc/hosts");
}

#[test]
fn test_can_parse() {
    assert!(Url::can_parse("http://example.com/"));
    assert!(Url::can_parse("relative/path"));
    assert!(!Url::can_parse("http://exa mple.com/"));
    assert!(!Url::can_parse("http://example.com/\t"));
}

#[test]
fn test_parse_error_display() {
    let err = Url::parse(":nothing").unwrap_err();
    assert_eq!(err, ParseError::MissingScheme);
    assert_eq!(err.to_string(), "Missing scheme");

    let opaque = "a:b".parse::<Url>().unwrap();
    assert_eq!(opaque.scheme(), "a");
    assert_eq!(opaque.opaque(), Some("b"));
    assert_eq!(
        "1a:b".parse::<Url>().unwrap_err(),
        ParseError::ColonInFirstSegment
    );
}

/// A URL type owned by some other part of an application
#[derive(Debug, Default)]
struct RequestTarget {
    scheme: String,
    host: String,
    path: String,
    query: Option<String>,
    fragment: Option<String>,
}

impl RequestTarget {
    fn to_url_string(&self) -> String {
        let mut out = format!("{}://{}{}", self.scheme, self.host, self.path);
        if let Some(query) = &self.query {
            out.push('?');
            out.push_str(query);
        }
        if let Some(fragment) = &self.fragment {
            out.push('#');
            out.push_str(fragment);
        }
        out
    }
}

impl UrlFields for RequestTarget {
    fn scheme(&self) -> &str {
        &self.scheme
    }

    fn host(&self) -> &str {
        &self.host
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    fn set_scheme(&mut self, scheme: &str) {
        self.scheme = scheme.to_string();
    }

    fn set_host(&mut self, host: &str) {
        self.host = host.to_string();
    }

    fn set_path(&mut self, path: &str) {
        self.path = path.to_string();
    }

    fn set_query(&mut self, query: Option<&str>) {
        self.query = query.map(str::to_string);
    }

    fn set_fragment(&mut self, fragment: Option<&str>) {
        self.fragment = fragment.map(str::to_string);
    }
}

#[test]
fn test_normalize_custom_fields() {
    let mut target = RequestTarget {
        scheme: "HTTPS".to_string(),
        host: "WWW.Example.com:80".to_string(),
        path: "/a/./b/../index.html".to_string(),
        query: Some("b=2&a=1".to_string()),
        fragment: Some("top".to_string()),
    };
    normalize(&mut target, Flags::UNSAFE);
    assert_eq!(target.to_url_string(), "http://example.com/a/?a=1&b=2");
}

#[test]
fn test_normalize_custom_fields_empty() {
    let mut target = RequestTarget::default();
    normalize(&mut target, Flags::UNSAFE | Flags::ADD_WWW | Flags::ADD_TRAILING_SLASH);
    assert_eq!(target.host, "");
    assert_eq!(target.path, "");
    assert_eq!(target.query, None);
}

#[test]
fn test_url_normalized() {
    let url = Url::parse("HTTP://Example.com/a/b/../c/").unwrap();
    let url = url.normalized(Flags::USUALLY_SAFE);
    assert_eq!(url.href(), "http://example.com/a/c");
    assert_eq!(url.path(), "/a/c");
}
