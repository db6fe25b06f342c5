use crate::compat::String;
use crate::error::Result;
use crate::flags::Flags;
use crate::transforms;
use crate::url::Url;
use crate::url_fields::UrlFields;

/// One pipeline step: the flag that enables it and the transform it runs
struct Step {
    flag: Flags,
    name: &'static str,
    apply: fn(&mut dyn UrlFields),
}

/// Execution order of the transforms.
///
/// This is not bit order. Directory index removal has to run before a
/// trailing slash is added, so that the slash it leaves behind is the one
/// kept. Dot segments are resolved before duplicate slashes are collapsed.
const PIPELINE: [Step; 16] = [
    Step {
        flag: Flags::LOWERCASE_SCHEME,
        name: "lowercase_scheme",
        apply: transforms::lowercase_scheme,
    },
    Step {
        flag: Flags::LOWERCASE_HOST,
        name: "lowercase_host",
        apply: transforms::lowercase_host,
    },
    Step {
        flag: Flags::UPPERCASE_ESCAPES,
        name: "uppercase_escapes",
        apply: transforms::uppercase_escapes,
    },
    Step {
        flag: Flags::DECODE_UNNECESSARY_ESCAPES,
        name: "decode_unnecessary_escapes",
        apply: transforms::decode_unnecessary_escapes,
    },
    Step {
        flag: Flags::REMOVE_DEFAULT_PORT,
        name: "remove_default_port",
        apply: transforms::remove_default_port,
    },
    Step {
        flag: Flags::REMOVE_EMPTY_QUERY_SEPARATOR,
        name: "remove_empty_query_separator",
        apply: transforms::remove_empty_query_separator,
    },
    Step {
        flag: Flags::REMOVE_TRAILING_SLASH,
        name: "remove_trailing_slash",
        apply: transforms::remove_trailing_slash,
    },
    Step {
        flag: Flags::REMOVE_DIRECTORY_INDEX,
        name: "remove_directory_index",
        apply: transforms::remove_directory_index,
    },
    Step {
        flag: Flags::ADD_TRAILING_SLASH,
        name: "add_trailing_slash",
        apply: transforms::add_trailing_slash,
    },
    Step {
        flag: Flags::REMOVE_DOT_SEGMENTS,
        name: "remove_dot_segments",
        apply: transforms::remove_dot_segments,
    },
    Step {
        flag: Flags::REMOVE_FRAGMENT,
        name: "remove_fragment",
        apply: transforms::remove_fragment,
    },
    Step {
        flag: Flags::FORCE_HTTP,
        name: "force_http",
        apply: transforms::force_http,
    },
    Step {
        flag: Flags::REMOVE_DUPLICATE_SLASHES,
        name: "remove_duplicate_slashes",
        apply: transforms::remove_duplicate_slashes,
    },
    Step {
        flag: Flags::REMOVE_WWW,
        name: "remove_www",
        apply: transforms::remove_www,
    },
    Step {
        flag: Flags::ADD_WWW,
        name: "add_www",
        apply: transforms::add_www,
    },
    Step {
        flag: Flags::SORT_QUERY,
        name: "sort_query",
        apply: transforms::sort_query,
    },
];

/// Normalize a parsed URL in place.
///
/// Every step whose flag is contained in `flags` runs, in pipeline order,
/// each one seeing the result of the steps before it. This never fails.
///
/// # Examples
///
/// ```
/// use urlcanon::{Flags, Url, normalize};
///
/// let mut url = Url::parse("Http://SomeURL.com:8080/a/b/.././c///g?c=3&a=1&b=9&c=0#target").unwrap();
/// normalize(
///     &mut url,
///     Flags::USUALLY_SAFE | Flags::REMOVE_DUPLICATE_SLASHES | Flags::REMOVE_FRAGMENT,
/// );
/// assert_eq!(url.href(), "http://someurl.com:8080/a/c/g?c=3&a=1&b=9&c=0");
/// ```
pub fn normalize(url: &mut dyn UrlFields, flags: Flags) {
    for step in PIPELINE.iter().filter(|step| flags.contains(step.flag)) {
        tracing::trace!(transform = step.name, "applying url transform");
        (step.apply)(url);
    }
}

/// Parse, normalize and serialize a URL string.
///
/// # Errors
///
/// Returns the [`ParseError`](crate::ParseError) from parsing unchanged;
/// nothing after parsing can fail.
///
/// # Examples
///
/// ```
/// use urlcanon::{Flags, normalize_str};
///
/// let normalized = normalize_str(
///     "hTTp://someWEBsite.com:80/Amazing%3f/url/",
///     Flags::LOWERCASE_SCHEME | Flags::LOWERCASE_HOST | Flags::UPPERCASE_ESCAPES,
/// )
/// .unwrap();
/// assert_eq!(normalized, "http://somewebsite.com:80/Amazing%3F/url/");
/// ```
pub fn normalize_str(input: &str, flags: Flags) -> Result<String> {
    let mut url = Url::parse(input).inspect_err(|err| {
        tracing::debug!(error = %err, "url could not be parsed for normalization");
    })?;
    normalize(&mut url, flags);
    Ok(url.href())
}

/// Like [`normalize_str`], for input that is known to be a valid URL.
///
/// # Panics
///
/// Panics if `input` cannot be parsed as a URL.
///
/// # Examples
///
/// ```
/// use urlcanon::{Flags, normalize_str_or_panic};
///
/// let normalized = normalize_str_or_panic("hTTpS://someWEBsite.com:80/Amazing%fa/url/", Flags::UNSAFE);
/// assert_eq!(normalized, "http://somewebsite.com/Amazing%FA/url");
/// ```
#[allow(clippy::panic)]
pub fn normalize_str_or_panic(input: &str, flags: Flags) -> String {
    match normalize_str(input, flags) {
        Ok(normalized) => normalized,
        Err(err) => panic!("cannot normalize {input:?}: {err}"),
    }
}

impl Url {
    /// Normalize this URL in place, see [`normalize`]
    pub fn normalize(&mut self, flags: Flags) {
        normalize(self, flags);
    }

    /// Consume this URL and return its normalized form
    #[must_use]
    pub fn normalized(mut self, flags: Flags) -> Self {
        normalize(&mut self, flags);
        self
    }
}
