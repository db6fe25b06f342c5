use crate::url_fields::UrlFields;

/// `HTTP` -> `http`
pub fn lowercase_scheme(url: &mut dyn UrlFields) {
    if url.scheme().bytes().any(|b| b.is_ascii_uppercase()) {
        let scheme = url.scheme().to_ascii_lowercase();
        url.set_scheme(&scheme);
    }
}

/// `https` in any case becomes `http`; other schemes are left alone
pub fn force_http(url: &mut dyn UrlFields) {
    if url.scheme().eq_ignore_ascii_case("https") {
        url.set_scheme("http");
    }
}
