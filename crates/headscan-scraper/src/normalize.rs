//! Address normalization: raw user input to an absolute URL.

const DEFAULT_SCHEME_PREFIX: &str = "https://";

/// Turns a raw address into a fetchable URL.
///
/// Surrounding whitespace is trimmed. Input that already starts with `http`
/// (any case) is returned as-is; anything else gets `https://` prepended.
/// Never fails: a malformed result surfaces later as a fetch failure.
///
/// ```
/// use headscan_scraper::normalize_url;
///
/// assert_eq!(normalize_url("  example.com  "), "https://example.com");
/// assert_eq!(normalize_url("http://x.com"), "http://x.com");
/// ```
#[must_use]
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if has_http_prefix(trimmed) {
        trimmed.to_owned()
    } else {
        format!("{DEFAULT_SCHEME_PREFIX}{trimmed}")
    }
}

fn has_http_prefix(s: &str) -> bool {
    s.get(..4)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("http"))
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
