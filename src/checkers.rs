use crate::character_sets::is_host_byte;

/// Value of an ASCII hex digit, case-insensitive
pub fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Decode the two hex digits following a `%` at `pos`, if both are present.
pub fn escaped_byte(bytes: &[u8], pos: usize) -> Option<u8> {
    let hi = hex_value(*bytes.get(pos + 1)?)?;
    let lo = hex_value(*bytes.get(pos + 2)?)?;
    Some((hi << 4) | lo)
}

/// Check that every `%` in the input starts a complete `%XX` escape.
/// Uses SIMD-accelerated memchr to skip straight to candidates.
pub fn has_valid_escapes(input: &str) -> bool {
    let bytes = input.as_bytes();
    memchr::memchr_iter(b'%', bytes).all(|pos| escaped_byte(bytes, pos).is_some())
}

/// Check a port string taken from after the host's `:`.
/// An empty port is allowed (`http://host:/`), anything else must be ASCII digits.
pub fn is_valid_port(port: &str) -> bool {
    port.bytes().all(|b| b.is_ascii_digit())
}

/// Split a host field into the host name and the optional port after its colon.
pub fn split_host_port(host: &str) -> (&str, Option<&str>) {
    if host.starts_with('[') {
        // IPv6 literal: only a colon after the closing bracket introduces a port
        if let Some(bracket_end) = host.find(']') {
            let port = host[bracket_end + 1..].strip_prefix(':');
            return (&host[..=bracket_end], port);
        }
        return (host, None);
    }

    match host.rfind(':') {
        Some(colon_pos) => (&host[..colon_pos], Some(&host[colon_pos + 1..])),
        None => (host, None),
    }
}

/// Check a raw host field (name plus optional port) for structural validity.
pub fn is_valid_host(host: &str) -> bool {
    let (name, _) = split_host_port(host);
    if name.starts_with('[') {
        // Only ":port" may follow the closing bracket
        let after_literal = &host[name.len()..];
        if !name.ends_with(']') || !(after_literal.is_empty() || after_literal.starts_with(':')) {
            return false;
        }
        let literal = &name[1..name.len() - 1];
        let is_ip_literal = !literal.is_empty()
            && literal
                .bytes()
                .all(|b| b.is_ascii_hexdigit() || matches!(b, b':' | b'.' | b'%'));
        // IPvFuture ("v1.x") is passed through without further checks
        return is_ip_literal || literal.starts_with(['v', 'V']);
    }
    !name.contains(['[', ']', ':']) && name.bytes().all(is_host_byte) && has_valid_escapes(name)
}
