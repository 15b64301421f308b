//! Canvas paginates with RFC 8288 `Link` headers, eg:
//!
//! `<https://x/api/v1/courses?page=2&per_page=50>; rel="next", <https://x/api/v1/courses?page=1&per_page=50>; rel="first"`

use reqwest::header::{HeaderMap, LINK};

/// Find the `rel="next"` target across every `Link` header in a response.
pub(crate) fn next_link_in(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(LINK)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(next_link)
}

/// Find the target of the `rel="next"` link, if there is one.
pub(crate) fn next_link(header: &str) -> Option<String> {
    header.split(',').find_map(|link| {
        let mut parts = link.split(';');
        let target = parts.next()?.trim();
        let is_next = parts.any(|param| {
            param
                .trim()
                .strip_prefix("rel=")
                .map(|rel| rel.trim_matches('"').split_whitespace().any(|r| r == "next"))
                .unwrap_or(false)
        });

        if !is_next {
            return None;
        }

        target
            .strip_prefix('<')?
            .strip_suffix('>')
            .map(|s| s.to_string())
    })
}
