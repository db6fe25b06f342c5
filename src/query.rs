use crate::compat::{BTreeMap, String, Vec};
use crate::escape::{decode_query_component, encode_query_component_into};

/// Query parameters grouped by name, in canonical order.
///
/// Names and values are kept as decoded bytes, so ordering is plain
/// byte-wise comparison and values that are not valid UTF-8 survive.
/// Serializing always re-escapes; the original escaping and the original
/// order of pairs are not preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: BTreeMap<Vec<u8>, Vec<Vec<u8>>>,
}

impl QueryParams {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self {
            params: BTreeMap::new(),
        }
    }

    /// Parse from a raw query string (with or without leading `?`).
    /// Empty pairs (`a=1&&b=2`) are skipped, a pair without `=` has an empty value.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut params = Self::new();
        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            params.append(decode_query_component(name), decode_query_component(value));
        }
        params
    }

    /// Add a value for a name, keeping any values already there.
    pub fn append(&mut self, name: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) {
        self.params
            .entry(name.into())
            .or_default()
            .push(value.into());
    }

    /// Get all values for a name, in insertion order.
    pub fn get_all(&self, name: &[u8]) -> &[Vec<u8>] {
        self.params.get(name).map_or(&[], Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Get the number of name/value pairs.
    pub fn size(&self) -> usize {
        self.params.values().map(Vec::len).sum()
    }

    /// Convert to the canonical query string without leading `?`.
    ///
    /// Names ascend byte-wise, values of the same name ascend byte-wise,
    /// pairs are written as `name=value` joined by `&`.
    pub fn to_sorted_string(&self) -> String {
        let mut result = String::new();
        for (name, values) in &self.params {
            let mut values: Vec<&[u8]> = values.iter().map(Vec::as_slice).collect();
            values.sort_unstable();
            for value in values {
                if !result.is_empty() {
                    result.push('&');
                }
                encode_query_component_into(&mut result, name);
                result.push('=');
                encode_query_component_into(&mut result, value);
            }
        }
        result
    }
}

impl core::fmt::Display for QueryParams {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_sorted_string())
    }
}

impl From<&str> for QueryParams {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}
