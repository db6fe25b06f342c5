use crate::compat::{String, Vec, format};
use crate::url_fields::UrlFields;

/// Drop one trailing `/`.
///
/// With an empty path the host is checked instead, which is where a slash
/// ends up when it was added to a URL without a path.
pub fn remove_trailing_slash(url: &mut dyn UrlFields) {
    if !url.path().is_empty() {
        if let Some(path) = url.path().strip_suffix('/') {
            let path = String::from(path);
            url.set_path(&path);
        }
    } else if let Some(host) = url.host().strip_suffix('/') {
        let host = String::from(host);
        url.set_host(&host);
    }
}

/// Append a `/` to the path, or to the host when there is no path.
pub fn add_trailing_slash(url: &mut dyn UrlFields) {
    let path = url.path();
    if !path.is_empty() {
        if !path.ends_with('/') {
            let path = format!("{path}/");
            url.set_path(&path);
        }
        return;
    }

    let host = url.host();
    if !host.is_empty() && !host.ends_with('/') {
        let host = format!("{host}/");
        url.set_host(&host);
    }
}

/// `default.<ext>` or `index.<ext>` with a 1 to 4 character word extension
fn is_directory_index(segment: &str) -> bool {
    let Some((stem, extension)) = segment.split_once('.') else {
        return false;
    };
    matches!(stem, "default" | "index")
        && (1..=4).contains(&extension.len())
        && extension
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// Drop a final `index.html`-style segment, keeping the `/` before it.
pub fn remove_directory_index(url: &mut dyn UrlFields) {
    let path = url.path();
    let segment_start = memchr::memrchr(b'/', path.as_bytes()).map_or(0, |pos| pos + 1);
    if is_directory_index(&path[segment_start..]) {
        let path = String::from(&path[..segment_start]);
        url.set_path(&path);
    }
}

/// Resolve `.` and `..` segments.
///
/// `..` pops the previous segment (nothing to pop is fine), `.` is dropped,
/// every other segment is kept, empty ones included. If the result would
/// touch the host without a separator, a leading `/` is added.
pub fn remove_dot_segments(url: &mut dyn UrlFields) {
    if url.path().is_empty() {
        return;
    }

    let mut segments: Vec<&str> = Vec::new();
    for segment in url.path().split('/') {
        match segment {
            ".." => {
                segments.pop();
            }
            "." => {}
            _ => segments.push(segment),
        }
    }

    let mut path = segments.join("/");
    if !url.host().ends_with('/') && !path.starts_with('/') {
        path.insert(0, '/');
    }
    url.set_path(&path);
}

/// Collapse every run of `/` in the path into one.
pub fn remove_duplicate_slashes(url: &mut dyn UrlFields) {
    let path = url.path();
    if memchr::memmem::find(path.as_bytes(), b"//").is_none() {
        return;
    }

    let mut collapsed = String::with_capacity(path.len());
    let mut previous_was_slash = false;
    for c in path.chars() {
        let is_slash = c == '/';
        if !(is_slash && previous_was_slash) {
            collapsed.push(c);
        }
        previous_was_slash = is_slash;
    }
    url.set_path(&collapsed);
}
