//! Captured-URL normalization into a fetchable patch resource URL.

/// Suffix GitHub serves the plain-text patch artifact under.
pub const PATCH_SUFFIX: &str = ".patch";

/// Drops the query string, if any.
pub fn strip_query(url: &str) -> &str {
    match url.split_once('?') {
        Some((base, _)) => base,
        None => url,
    }
}

/// Appends the `.patch` suffix unless the URL already ends with it. Idempotent.
pub fn ensure_patch_suffix(url: &str) -> String {
    if url.ends_with(PATCH_SUFFIX) {
        url.to_string()
    } else {
        format!("{url}{PATCH_SUFFIX}")
    }
}

/// Full normalization: query stripped first, then the suffix ensured.
pub fn normalize_patch_url(url: &str) -> String {
    ensure_patch_suffix(strip_query(url))
}

/// Extracts the numeric identifier following the first `/pull/` path segment.
pub fn pr_number_from_url(url: &str) -> Option<String> {
    let (_, rest) = url.split_once("/pull/")?;
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        None
    } else {
        Some(digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_query_before_suffix() {
        assert_eq!(
            normalize_patch_url("https://github.com/o/r/pull/42?x=1"),
            "https://github.com/o/r/pull/42.patch"
        );
    }

    #[test]
    fn suffixing_is_idempotent() {
        let once = ensure_patch_suffix("https://github.com/o/r/pull/42");
        let twice = ensure_patch_suffix(&once);
        assert_eq!(once, twice);
        assert_eq!(once, "https://github.com/o/r/pull/42.patch");
    }

    #[test]
    fn already_suffixed_unchanged() {
        assert_eq!(
            normalize_patch_url("https://github.com/o/r/pull/42.patch"),
            "https://github.com/o/r/pull/42.patch"
        );
    }

    #[test]
    fn pr_number_extraction() {
        assert_eq!(
            pr_number_from_url("https://github.com/o/r/pull/42").as_deref(),
            Some("42")
        );
        assert_eq!(
            pr_number_from_url("https://github.com/o/r/pull/42.patch").as_deref(),
            Some("42")
        );
        assert_eq!(pr_number_from_url("https://github.com/o/r"), None);
        assert_eq!(pr_number_from_url("https://github.com/o/r/pull/abc"), None);
    }
}
