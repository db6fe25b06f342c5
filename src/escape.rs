use crate::character_sets::is_unreserved;
use crate::checkers::escaped_byte;
use crate::compat::{Cow, String, Vec};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode, percent_encode};

/// Query component percent-encode set
/// Everything except ALPHA / DIGIT / "-" / "." / "_" / "~".
/// Space is handled separately and written as `+`.
pub const QUERY_COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Iterate over well-formed `%XX` escapes as (offset of `%`, decoded byte).
/// Malformed escapes are skipped, they are left for the caller to keep verbatim.
fn escapes(input: &str) -> impl Iterator<Item = (usize, u8)> + '_ {
    let bytes = input.as_bytes();
    memchr::memchr_iter(b'%', bytes).filter_map(|pos| escaped_byte(bytes, pos).map(|b| (pos, b)))
}

/// Rewrite every `%xx` escape with uppercase hex digits, e.g. `%3f` -> `%3F`.
/// Borrows the input when nothing needs changing.
pub fn uppercase_escapes(input: &str) -> Cow<'_, str> {
    let has_lowercase_hex =
        |pos: usize| input.as_bytes()[pos + 1..pos + 3].iter().any(u8::is_ascii_lowercase);

    if !escapes(input).any(|(pos, _)| has_lowercase_hex(pos)) {
        return Cow::Borrowed(input);
    }

    let mut result = String::with_capacity(input.len());
    let mut last = 0;
    for (pos, _) in escapes(input) {
        result.push_str(&input[last..pos]);
        result.push('%');
        for &digit in &input.as_bytes()[pos + 1..pos + 3] {
            result.push(char::from(digit.to_ascii_uppercase()));
        }
        last = pos + 3;
    }
    result.push_str(&input[last..]);
    Cow::Owned(result)
}

/// Replace escapes of unreserved characters with the character itself,
/// e.g. `%41%7e` -> `A~`. Every other escape is kept as written.
/// Borrows the input when nothing needs changing.
pub fn decode_unnecessary_escapes(input: &str) -> Cow<'_, str> {
    if !escapes(input).any(|(_, byte)| is_unreserved(byte)) {
        return Cow::Borrowed(input);
    }

    let mut result = String::with_capacity(input.len());
    let mut last = 0;
    for (pos, byte) in escapes(input).filter(|&(_, byte)| is_unreserved(byte)) {
        result.push_str(&input[last..pos]);
        result.push(char::from(byte));
        last = pos + 3;
    }
    result.push_str(&input[last..]);
    Cow::Owned(result)
}

/// Percent-encode a query name or value directly into buffer.
/// Spaces become `+`, unreserved bytes pass through, all else is `%XX`.
pub fn encode_query_component_into(buffer: &mut String, input: &[u8]) {
    buffer.reserve(input.len());
    for (i, part) in input.split(|&b| b == b' ').enumerate() {
        if i > 0 {
            buffer.push('+');
        }
        buffer.extend(percent_encode(part, QUERY_COMPONENT_SET));
    }
}

/// Decode a query name or value into raw bytes.
/// `+` means space; malformed escapes are kept literally.
pub fn decode_query_component(input: &str) -> Vec<u8> {
    let bytes = input.as_bytes();
    if memchr::memchr(b'+', bytes).is_none() {
        return percent_decode(bytes).collect();
    }
    let spaced: Vec<u8> = bytes
        .iter()
        .map(|&b| if b == b'+' { b' ' } else { b })
        .collect();
    percent_decode(&spaced).collect()
}
