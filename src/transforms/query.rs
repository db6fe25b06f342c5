use crate::query::QueryParams;
use crate::url_fields::UrlFields;

/// `?` followed by nothing is dropped entirely
pub fn remove_empty_query_separator(url: &mut dyn UrlFields) {
    if url.query() == Some("") {
        url.set_query(None);
    }
}

/// Rebuild the query with names in byte order and, per name, values in byte order.
///
/// A query without any parameters (absent, bare `?`, only `&`) is left exactly
/// as it is. Otherwise every name and value is re-escaped, so the original
/// escaping does not survive.
pub fn sort_query(url: &mut dyn UrlFields) {
    let Some(query) = url.query() else {
        return;
    };
    let params = QueryParams::parse(query);
    if params.is_empty() {
        return;
    }
    let sorted = params.to_sorted_string();
    url.set_query(Some(&sorted));
}
