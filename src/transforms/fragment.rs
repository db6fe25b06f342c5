use crate::url_fields::UrlFields;

/// Drop the fragment, including a bare trailing `#`
pub fn remove_fragment(url: &mut dyn UrlFields) {
    url.set_fragment(None);
}
