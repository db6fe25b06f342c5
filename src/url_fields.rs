/// Field-level access to a parsed URL.
///
/// This is the contract the normalization pipeline works against: five
/// independently readable and writable text fields, each holding its raw
/// (still percent-encoded) form. [`Url`](crate::Url) implements it; callers
/// that already hold a parsed URL of their own type can implement it too and
/// normalize in place without a string round trip.
///
/// Setters take the new field text verbatim. Implementations must not
/// re-validate or re-normalize it, otherwise transforms stop being
/// independent of each other.
pub trait UrlFields {
    // Getters

    /// Get the scheme without the trailing `:` (e.g. "https")
    fn scheme(&self) -> &str;

    /// Get the host with the port embedded (e.g. "example.com:8080")
    fn host(&self) -> &str;

    /// Get the path (e.g. "/a/b/")
    fn path(&self) -> &str;

    /// Get the raw query without the leading `?`.
    /// `None` when the URL has no `?` at all, `Some("")` for a bare `?`.
    fn query(&self) -> Option<&str>;

    /// Get the raw fragment without the leading `#`.
    /// `None` when the URL has no `#` at all, `Some("")` for a bare `#`.
    fn fragment(&self) -> Option<&str>;

    // Setters

    /// Set the scheme
    fn set_scheme(&mut self, scheme: &str);

    /// Set the host (port included)
    fn set_host(&mut self, host: &str);

    /// Set the path
    fn set_path(&mut self, path: &str);

    /// Set or clear the query
    fn set_query(&mut self, query: Option<&str>);

    /// Set or clear the fragment
    fn set_fragment(&mut self, fragment: Option<&str>);
}
