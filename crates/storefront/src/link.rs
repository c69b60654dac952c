//! `Link` response header parsing for cursor pagination.

/// Extract the URL marked `rel="next"` from a `Link` header value.
///
/// The header carries comma-separated entries of the form
/// `<https://…/products.json?page_info=…>; rel="next"`. Entries that do
/// not fit that shape are ignored.
pub fn next_page_url(link_header: &str) -> Option<String> {
    for entry in link_header.split(',') {
        let mut parts = entry.split(';');
        let Some(target) = parts.next() else {
            continue;
        };
        let target = target.trim();
        if !(target.starts_with('<') && target.ends_with('>')) {
            continue;
        }
        let url = &target[1..target.len() - 1];

        let is_next = parts.any(|param| {
            let param = param.trim();
            param == r#"rel="next""# || param == "rel=next"
        });
        if is_next {
            return Some(url.to_string());
        }
    }
    None
}
