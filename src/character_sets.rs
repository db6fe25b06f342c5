/// Byte is an RFC 3986 unreserved character: ALPHA / DIGIT / "-" / "." / "_" / "~"
const UNRESERVED: u8 = 0b0001;
/// Byte is an RFC 3986 sub-delimiter: "!" / "$" / "&" / "'" / "(" / ")" / "*" / "+" / "," / ";" / "="
const SUB_DELIM: u8 = 0b0010;
/// Byte may appear after the first character of a scheme: ALPHA / DIGIT / "+" / "-" / "."
const SCHEME_TAIL: u8 = 0b0100;

/// Byte classification bitmask, indexed by byte value.
/// Non-ASCII bytes are left at 0; callers decide how to treat them.
const BYTE_CLASS_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];

    let mut i = b'a';
    while i <= b'z' {
        table[i as usize] = UNRESERVED | SCHEME_TAIL;
        i += 1;
    }
    let mut i = b'A';
    while i <= b'Z' {
        table[i as usize] = UNRESERVED | SCHEME_TAIL;
        i += 1;
    }
    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] = UNRESERVED | SCHEME_TAIL;
        i += 1;
    }
    table[b'-' as usize] = UNRESERVED | SCHEME_TAIL;
    table[b'.' as usize] = UNRESERVED | SCHEME_TAIL;
    table[b'_' as usize] = UNRESERVED;
    table[b'~' as usize] = UNRESERVED;

    table[b'!' as usize] = SUB_DELIM;
    table[b'$' as usize] = SUB_DELIM;
    table[b'&' as usize] = SUB_DELIM;
    table[b'\'' as usize] = SUB_DELIM;
    table[b'(' as usize] = SUB_DELIM;
    table[b')' as usize] = SUB_DELIM;
    table[b'*' as usize] = SUB_DELIM;
    table[b'+' as usize] = SUB_DELIM | SCHEME_TAIL;
    table[b',' as usize] = SUB_DELIM;
    table[b';' as usize] = SUB_DELIM;
    table[b'=' as usize] = SUB_DELIM;

    table
};

/// Check if a byte is unreserved, i.e. never needs percent-encoding
pub fn is_unreserved(b: u8) -> bool {
    BYTE_CLASS_TABLE[b as usize] & UNRESERVED != 0
}

/// Check if a byte is an ASCII control character (C0 or DEL)
pub fn is_ascii_control(b: u8) -> bool {
    b < 0x20 || b == 0x7F
}

/// Check if a byte may continue a scheme after its leading letter
pub fn is_scheme_tail(b: u8) -> bool {
    BYTE_CLASS_TABLE[b as usize] & SCHEME_TAIL != 0
}

/// Check if a byte may appear in a registered name or IP literal.
/// `%` is accepted here; the escape itself is validated separately.
/// Non-ASCII bytes pass through so internationalized hosts survive untouched.
pub fn is_host_byte(b: u8) -> bool {
    b >= 0x80
        || BYTE_CLASS_TABLE[b as usize] & (UNRESERVED | SUB_DELIM) != 0
        || matches!(b, b':' | b'[' | b']' | b'%')
}
