use crate::error::FlagsParseError;
use bitflags::bitflags;

bitflags! {
    /// Normalization flags.
    ///
    /// Each bit selects one independent transform. Flags combine with `|`;
    /// nothing stops opposing flags (e.g. `REMOVE_WWW | ADD_WWW`) from being
    /// set together, in which case the transform later in pipeline order wins.
    ///
    /// The three presets widen strictly: `SAFE` never changes which resource
    /// a URL names, `USUALLY_SAFE` can only break servers that treat paths
    /// unusually, `UNSAFE` may change the resource or drop information.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Flags: u32 {
        // Safe
        /// `HTTP://x` -> `http://x`
        const LOWERCASE_SCHEME = 1 << 0;
        /// `http://WWW.X.COM` -> `http://www.x.com`
        const LOWERCASE_HOST = 1 << 1;
        /// `/a%3fb` -> `/a%3Fb`
        const UPPERCASE_ESCAPES = 1 << 2;
        /// `/%41%7E` -> `/A~`
        const DECODE_UNNECESSARY_ESCAPES = 1 << 3;
        /// `http://x:80/` -> `http://x/`
        const REMOVE_DEFAULT_PORT = 1 << 4;
        /// `http://x/a?` -> `http://x/a`
        const REMOVE_EMPTY_QUERY_SEPARATOR = 1 << 5;

        // Usually safe
        /// `http://x/a/` -> `http://x/a`
        const REMOVE_TRAILING_SLASH = 1 << 6;
        /// `http://x/a` -> `http://x/a/`
        const ADD_TRAILING_SLASH = 1 << 7;
        /// `http://x/a/./b/../c` -> `http://x/a/c`
        const REMOVE_DOT_SEGMENTS = 1 << 8;

        // Unsafe
        /// `http://x/a/index.html` -> `http://x/a/`
        const REMOVE_DIRECTORY_INDEX = 1 << 9;
        /// `http://x/a#top` -> `http://x/a`
        const REMOVE_FRAGMENT = 1 << 10;
        /// `https://x` -> `http://x`
        const FORCE_HTTP = 1 << 11;
        /// `http://x//a///b` -> `http://x/a/b`
        const REMOVE_DUPLICATE_SLASHES = 1 << 12;
        /// `http://www.x.com` -> `http://x.com`
        const REMOVE_WWW = 1 << 13;
        /// `http://x.com` -> `http://www.x.com`
        const ADD_WWW = 1 << 14;
        /// `http://x/?b=2&a=1` -> `http://x/?a=1&b=2`
        const SORT_QUERY = 1 << 15;

        /// Normalizations that never change the referenced resource
        const SAFE = Self::LOWERCASE_SCHEME.bits()
            | Self::LOWERCASE_HOST.bits()
            | Self::UPPERCASE_ESCAPES.bits()
            | Self::DECODE_UNNECESSARY_ESCAPES.bits()
            | Self::REMOVE_DEFAULT_PORT.bits()
            | Self::REMOVE_EMPTY_QUERY_SEPARATOR.bits();

        /// `SAFE` plus path rewrites almost every server tolerates
        const USUALLY_SAFE = Self::SAFE.bits()
            | Self::REMOVE_TRAILING_SLASH.bits()
            | Self::REMOVE_DOT_SEGMENTS.bits();

        /// `USUALLY_SAFE` plus rewrites that may change the resource or lose information
        const UNSAFE = Self::USUALLY_SAFE.bits()
            | Self::REMOVE_DIRECTORY_INDEX.bits()
            | Self::REMOVE_FRAGMENT.bits()
            | Self::FORCE_HTTP.bits()
            | Self::REMOVE_DUPLICATE_SLASHES.bits()
            | Self::REMOVE_WWW.bits()
            | Self::SORT_QUERY.bits();
    }
}

/// Presets, widest first so `Display` prefers the shortest spelling
const PRESET_NAMES: [(&str, Flags); 3] = [
    ("unsafe", Flags::UNSAFE),
    ("usually-safe", Flags::USUALLY_SAFE),
    ("safe", Flags::SAFE),
];

/// Single flags in bit order
const FLAG_NAMES: [(&str, Flags); 16] = [
    ("lowercase-scheme", Flags::LOWERCASE_SCHEME),
    ("lowercase-host", Flags::LOWERCASE_HOST),
    ("uppercase-escapes", Flags::UPPERCASE_ESCAPES),
    ("decode-unnecessary-escapes", Flags::DECODE_UNNECESSARY_ESCAPES),
    ("remove-default-port", Flags::REMOVE_DEFAULT_PORT),
    ("remove-empty-query-separator", Flags::REMOVE_EMPTY_QUERY_SEPARATOR),
    ("remove-trailing-slash", Flags::REMOVE_TRAILING_SLASH),
    ("add-trailing-slash", Flags::ADD_TRAILING_SLASH),
    ("remove-dot-segments", Flags::REMOVE_DOT_SEGMENTS),
    ("remove-directory-index", Flags::REMOVE_DIRECTORY_INDEX),
    ("remove-fragment", Flags::REMOVE_FRAGMENT),
    ("force-http", Flags::FORCE_HTTP),
    ("remove-duplicate-slashes", Flags::REMOVE_DUPLICATE_SLASHES),
    ("remove-www", Flags::REMOVE_WWW),
    ("add-www", Flags::ADD_WWW),
    ("sort-query", Flags::SORT_QUERY),
];

impl Flags {
    /// Look up a single flag or preset by its kebab-case name.
    /// Matching ignores ASCII case and treats `_` like `-`.
    pub fn from_kebab_name(name: &str) -> Option<Self> {
        PRESET_NAMES
            .iter()
            .chain(FLAG_NAMES.iter())
            .find(|(candidate, _)| {
                candidate.len() == name.len()
                    && candidate
                        .bytes()
                        .zip(name.bytes())
                        .all(|(c, n)| c == n.to_ascii_lowercase() || (c == b'-' && n == b'_'))
            })
            .map(|&(_, flags)| flags)
    }
}

impl core::str::FromStr for Flags {
    type Err = FlagsParseError;

    /// Parse a list such as `"usually-safe | sort-query"`.
    /// Names may be separated by `|`, `,` or whitespace; an empty list is no flags.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(|c: char| c == '|' || c == ',' || c.is_ascii_whitespace())
            .filter(|name| !name.is_empty())
            .try_fold(Self::empty(), |flags, name| {
                Self::from_kebab_name(name)
                    .map(|flag| flags | flag)
                    .ok_or_else(|| FlagsParseError::new(name))
            })
    }
}

impl core::fmt::Display for Flags {
    /// Write the flags as names joined by `" | "`, using presets where they fit.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut remaining = *self;
        let mut first = true;

        let named = PRESET_NAMES.iter().chain(FLAG_NAMES.iter());
        for &(name, flags) in named {
            if remaining.contains(flags) && !flags.is_empty() {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                remaining.remove(flags);
                first = false;
            }
        }
        Ok(())
    }
}
