use crate::checkers::{has_valid_escapes, is_valid_host, is_valid_port, split_host_port};
use crate::compat::ToString;
use crate::error::{ParseError, Result};
use crate::helpers::{
    has_control_characters, prune_fragment, prune_query, split_scheme, split_userinfo,
};
use crate::url::Url;

/// Split a URL string into [`Url`] fields.
///
/// Follows the generic syntax of RFC 3986 (appendix B) without applying any
/// scheme-specific rules: the scheme, host, path, query and fragment are
/// located and validated, then stored exactly as written.
pub fn parse_url(input: &str) -> Result<Url> {
    if has_control_characters(input) {
        return Err(ParseError::InvalidControlCharacter);
    }

    let (rest, fragment) = prune_fragment(input);
    if fragment.is_some_and(|fragment| !has_valid_escapes(fragment)) {
        return Err(ParseError::InvalidPercentEncoding);
    }

    let (scheme, rest) = split_scheme(rest)?;
    let (rest, query) = prune_query(rest);

    let mut url = Url {
        scheme: scheme.to_string(),
        query: query.map(ToString::to_string),
        fragment: fragment.map(ToString::to_string),
        ..Url::default()
    };

    // "mailto:x", "urn:isbn:..." carry no hierarchy to normalize
    if !scheme.is_empty() && !rest.starts_with('/') {
        url.opaque = Some(rest.to_string());
        return Ok(url);
    }

    let path = if let Some(after_slashes) = rest.strip_prefix("//") {
        let authority_end =
            memchr::memchr(b'/', after_slashes.as_bytes()).unwrap_or(after_slashes.len());
        let (authority, path) = after_slashes.split_at(authority_end);
        parse_authority(&mut url, authority)?;
        path
    } else {
        if scheme.is_empty() {
            let first_segment = rest.split('/').next().unwrap_or(rest);
            if first_segment.contains(':') {
                return Err(ParseError::ColonInFirstSegment);
            }
        }
        rest
    };

    if !has_valid_escapes(path) {
        return Err(ParseError::InvalidPercentEncoding);
    }
    url.path = path.to_string();

    Ok(url)
}

/// Parse `[userinfo "@"] host [":" port]` into the URL
fn parse_authority(url: &mut Url, authority: &str) -> Result<()> {
    let (userinfo, host) = split_userinfo(authority);

    if userinfo.is_some_and(|userinfo| !has_valid_escapes(userinfo)) {
        return Err(ParseError::InvalidPercentEncoding);
    }
    if !is_valid_host(host) {
        return Err(ParseError::InvalidHost);
    }
    if split_host_port(host).1.is_some_and(|port| !is_valid_port(port)) {
        return Err(ParseError::InvalidPort);
    }

    url.has_authority = true;
    url.userinfo = userinfo.map(ToString::to_string);
    url.host = host.to_string();
    Ok(())
}
