use super::rewritten;
use crate::escape;
use crate::url_fields::UrlFields;

/// `%3f` -> `%3F` in the host, path, query and fragment
pub fn uppercase_escapes(url: &mut dyn UrlFields) {
    if let Some(host) = rewritten(escape::uppercase_escapes(url.host())) {
        url.set_host(&host);
    }
    if let Some(path) = rewritten(escape::uppercase_escapes(url.path())) {
        url.set_path(&path);
    }
    if let Some(query) = url.query().and_then(|q| rewritten(escape::uppercase_escapes(q))) {
        url.set_query(Some(&query));
    }
    if let Some(fragment) = url
        .fragment()
        .and_then(|f| rewritten(escape::uppercase_escapes(f)))
    {
        url.set_fragment(Some(&fragment));
    }
}

/// `%41%7E` -> `A~` in the path, query and fragment.
///
/// Only unreserved characters are decoded; anything that could change how
/// the URL is split (`%2F`, `%3F`, `%26`, ...) stays escaped.
pub fn decode_unnecessary_escapes(url: &mut dyn UrlFields) {
    if let Some(path) = rewritten(escape::decode_unnecessary_escapes(url.path())) {
        url.set_path(&path);
    }
    if let Some(query) = url
        .query()
        .and_then(|q| rewritten(escape::decode_unnecessary_escapes(q)))
    {
        url.set_query(Some(&query));
    }
    if let Some(fragment) = url
        .fragment()
        .and_then(|f| rewritten(escape::decode_unnecessary_escapes(f)))
    {
        url.set_fragment(Some(&fragment));
    }
}
