use crate::checkers::split_host_port;
use crate::compat::{String, ToString};
use crate::error::{ParseError, Result};
use crate::url_fields::UrlFields;

/// A URL split into independently editable text fields.
///
/// Parsing only locates component boundaries: nothing is lowercased,
/// decoded, resolved or re-encoded, so every field holds exactly the text
/// found in the input. That is what lets each normalization flag be
/// observed on its own.
///
/// Example: "HTTP://user@www.Example.com:80/a/./b?q=1#top"
/// - scheme: "HTTP"
/// - userinfo: Some("user")
/// - host: "www.Example.com:80"
/// - path: "/a/./b"
/// - query: Some("q=1")
/// - fragment: Some("top")
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Url {
    pub(crate) scheme: String,
    pub(crate) opaque: Option<String>,
    pub(crate) userinfo: Option<String>,
    pub(crate) has_authority: bool,
    pub(crate) host: String,
    pub(crate) path: String,
    pub(crate) query: Option<String>,
    pub(crate) fragment: Option<String>,
}

impl Url {
    /// Parse a URL or relative reference.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the input is not syntactically valid:
    /// control characters, a leading `:`, malformed `%` escapes, or an
    /// invalid host or port.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlcanon::Url;
    ///
    /// let url = Url::parse("HTTP://www.Example.com:80/a/./b?q=1").unwrap();
    /// assert_eq!(url.scheme(), "HTTP");
    /// assert_eq!(url.host(), "www.Example.com:80");
    /// assert_eq!(url.path(), "/a/./b");
    /// assert_eq!(url.query(), Some("q=1"));
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        crate::parser::parse_url(input)
    }

    /// Check if a URL string can be parsed
    pub fn can_parse(input: &str) -> bool {
        Self::parse(input).is_ok()
    }

    /// Serialize back into a URL string
    pub fn href(&self) -> String {
        let mut buffer = String::with_capacity(self.estimated_len());
        self.write_to(&mut buffer);
        buffer
    }

    /// Get the scheme without the trailing `:`
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Get the opaque part of a URL such as `mailto:user@example.com`
    pub fn opaque(&self) -> Option<&str> {
        self.opaque.as_deref()
    }

    /// Get the userinfo without the trailing `@`
    pub fn userinfo(&self) -> Option<&str> {
        self.userinfo.as_deref()
    }

    /// Get the host including the port if present
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Get the host name without the port
    pub fn hostname(&self) -> &str {
        split_host_port(&self.host).0
    }

    /// Get the port as written, or "" if there is none
    pub fn port(&self) -> &str {
        split_host_port(&self.host).1.unwrap_or("")
    }

    /// Get the path
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Get the raw query without the leading `?`
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Get the raw fragment without the leading `#`
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Check if the URL has an authority section (`//host`)
    pub fn has_authority(&self) -> bool {
        self.has_authority || !self.host.is_empty() || self.userinfo.is_some()
    }

    /// Check if the URL has an opaque part instead of a hierarchical path
    pub fn has_opaque_path(&self) -> bool {
        self.opaque.is_some()
    }

    /// Set the userinfo
    pub fn set_userinfo(&mut self, userinfo: Option<&str>) {
        self.userinfo = userinfo.map(ToString::to_string);
    }

    fn estimated_len(&self) -> usize {
        self.scheme.len()
            + self.opaque.as_ref().map_or(0, String::len)
            + self.userinfo.as_ref().map_or(0, String::len)
            + self.host.len()
            + self.path.len()
            + self.query.as_ref().map_or(0, String::len)
            + self.fragment.as_ref().map_or(0, String::len)
            + 8
    }

    /// Write the serialized URL into a buffer
    fn write_to(&self, buffer: &mut String) {
        if !self.scheme.is_empty() {
            buffer.push_str(&self.scheme);
            buffer.push(':');
        }

        if let Some(opaque) = &self.opaque {
            buffer.push_str(opaque);
        } else if self.has_authority() {
            buffer.push_str("//");
            if let Some(userinfo) = &self.userinfo {
                buffer.push_str(userinfo);
                buffer.push('@');
            }
            buffer.push_str(&self.host);
            // Keep path and host from running together
            if !self.path.is_empty() && !self.path.starts_with('/') && !self.host.ends_with('/')
            {
                buffer.push('/');
            }
            buffer.push_str(&self.path);
        } else {
            // Without an authority, a path starting with "//" would be read back as one
            if self.path.starts_with("//") {
                buffer.push_str("/.");
            } else if self.scheme.is_empty() && first_segment_has_colon(&self.path) {
                buffer.push_str("./");
            }
            buffer.push_str(&self.path);
        }

        if let Some(query) = &self.query {
            buffer.push('?');
            buffer.push_str(query);
        }
        if let Some(fragment) = &self.fragment {
            buffer.push('#');
            buffer.push_str(fragment);
        }
    }
}

/// A relative path like "a:b/c" would be read back as scheme "a"
fn first_segment_has_colon(path: &str) -> bool {
    let segment = path.split('/').next().unwrap_or(path);
    segment.contains(':')
}

impl UrlFields for Url {
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
        self.query = query.map(ToString::to_string);
    }

    fn set_fragment(&mut self, fragment: Option<&str>) {
        self.fragment = fragment.map(ToString::to_string);
    }
}

impl core::fmt::Display for Url {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.href())
    }
}

impl core::str::FromStr for Url {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Url {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Url> for String {
    fn from(url: Url) -> Self {
        url.href()
    }
}
