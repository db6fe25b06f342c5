use crate::character_sets::{is_ascii_control, is_scheme_tail};
use crate::error::{ParseError, Result};

/// Fast check if string contains any ASCII control character
pub fn has_control_characters(input: &str) -> bool {
    input.bytes().any(is_ascii_control)
}

/// Prune fragment (#hash) from URL string
/// Returns (`url_without_fragment`, `fragment_without_hash`)
/// Optimization: Uses SIMD-accelerated memchr for fast '#' search
pub fn prune_fragment(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'#', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Prune query (?search) from the fragment-free part of a URL string
/// Returns (`url_without_query`, `query_without_question_mark`)
pub fn prune_query(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'?', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Split a leading `scheme:` off the input.
///
/// Returns `(scheme, rest)`; the scheme is empty when the input has none.
/// Like a relative reference, anything that is not `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ":"`
/// is treated as having no scheme at all.
pub fn split_scheme(input: &str) -> Result<(&str, &str)> {
    for (i, b) in input.bytes().enumerate() {
        match b {
            b':' if i == 0 => return Err(ParseError::MissingScheme),
            b':' => return Ok((&input[..i], &input[i + 1..])),
            b if b.is_ascii_alphabetic() => {}
            b if i > 0 && is_scheme_tail(b) => {}
            _ => return Ok(("", input)),
        }
    }
    Ok(("", input))
}

/// Split an authority into optional userinfo and host (port included).
/// The last `@` wins, so userinfo may itself contain escaped or raw `@`.
pub fn split_userinfo(authority: &str) -> (Option<&str>, &str) {
    match authority.rfind('@') {
        Some(at) => (Some(&authority[..at]), &authority[at + 1..]),
        None => (None, authority),
    }
}
