//! Flag-driven URL normalization.
//!
//! A URL string is split into raw fields, rewritten by the transforms
//! selected in a [`Flags`] set, and serialized back. Transforms always run in
//! one fixed order regardless of how the flags were combined.
//!
//! ```
//! use urlcanon::{Flags, normalize_str};
//!
//! let normalized = normalize_str("HTTP://www.Example.com:80/a/./b/../c/?z=1&a=2", Flags::UNSAFE).unwrap();
//! assert_eq!(normalized, "http://example.com/a/c?a=2&z=1");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod checkers;
mod escape;
mod helpers;
mod parser;

mod error;
mod flags;
mod pipeline;
mod query;
pub mod transforms;
mod url;
mod url_fields;

// Public API
pub use error::{FlagsParseError, ParseError, Result};
pub use flags::Flags;
pub use pipeline::{normalize, normalize_str, normalize_str_or_panic};
pub use query::QueryParams;
pub use url::Url;
pub use url_fields::UrlFields;
