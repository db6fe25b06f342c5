use crate::compat::{String, ToString};

/// Errors that can occur while splitting a URL string into its fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Input starts with `:`, so there is nothing before the scheme delimiter
    MissingScheme,
    /// ASCII control character (including DEL) anywhere in the input
    InvalidControlCharacter,
    /// `%` not followed by two hex digits
    InvalidPercentEncoding,
    /// Character not allowed in the host, or an unterminated IP literal
    InvalidHost,
    /// Port containing something other than ASCII digits
    InvalidPort,
    /// Relative reference whose first path segment contains `:`
    ColonInFirstSegment,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::MissingScheme => "Missing scheme",
            Self::InvalidControlCharacter => "Invalid control character in URL",
            Self::InvalidPercentEncoding => "Invalid percent encoding",
            Self::InvalidHost => "Invalid host",
            Self::InvalidPort => "Invalid port",
            Self::ColonInFirstSegment => "First path segment in relative URL contains colon",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for URL parsing operations
pub type Result<T> = core::result::Result<T, ParseError>;

/// Error returned when a flag list names an unknown normalization flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagsParseError {
    name: String,
}

impl FlagsParseError {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// The name that did not match any flag or preset
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl core::fmt::Display for FlagsParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Unknown normalization flag `{}`", self.name)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FlagsParseError {}
