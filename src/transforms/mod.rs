//! Individual normalization transforms, grouped by the field they rewrite.
//!
//! Every transform has the same shape: read fields through [`UrlFields`],
//! write back only what changed, and do nothing when a field is empty or
//! absent. None of them can fail.
//!
//! [`UrlFields`]: crate::UrlFields

mod escapes;
mod fragment;
mod host;
mod path;
mod query;
mod scheme;

pub use escapes::{decode_unnecessary_escapes, uppercase_escapes};
pub use fragment::remove_fragment;
pub use host::{add_www, lowercase_host, remove_default_port, remove_www};
pub use path::{
    add_trailing_slash, remove_directory_index, remove_dot_segments, remove_duplicate_slashes,
    remove_trailing_slash,
};
pub use query::{remove_empty_query_separator, sort_query};
pub use scheme::{force_http, lowercase_scheme};

use crate::compat::{Cow, String};

/// Keep only rewritten text; `None` means the field was already canonical
fn rewritten(value: Cow<'_, str>) -> Option<String> {
    match value {
        Cow::Owned(value) => Some(value),
        Cow::Borrowed(_) => None,
    }
}
