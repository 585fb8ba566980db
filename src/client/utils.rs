//! Utility functions for the PageData client.
//!
//! Query-string construction and transient-status classification. Both are
//! deliberately dumb: the query builder performs no percent-escaping (the
//! API's query values are plain slugs and tags, and callers own anything
//! fancier), and the transient allow-list is fixed rather than configurable.

/// Check whether a status code is a transient server error eligible for
/// automatic retry on GET requests.
///
/// The allow-list is fixed: 502 Bad Gateway, 503 Service Unavailable,
/// 504 Gateway Timeout. Notably 404 is permanent and 429 is not included —
/// the API never rate-limits with a retryable semantic.
///
/// # Examples
///
/// ```
/// use pagedata::client::is_transient_status;
///
/// assert!(is_transient_status(503));
/// assert!(!is_transient_status(404));
/// assert!(!is_transient_status(500));
/// ```
pub fn is_transient_status(status: u16) -> bool {
    matches!(status, 502 | 503 | 504)
}

/// Build a query string from ordered key/value pairs.
///
/// Pair order is preserved, values are emitted verbatim (no escaping), and
/// an empty value still produces `key=`. Returns an empty string for no
/// pairs, otherwise a string starting with `?`.
///
/// # Examples
///
/// ```
/// use pagedata::client::build_query;
///
/// assert_eq!(build_query(&[("status", "draft"), ("tag", "")]), "?status=draft&tag=");
/// assert_eq!(build_query(&[]), "");
/// ```
pub fn build_query(pairs: &[(&str, &str)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    let joined = pairs
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");
    format!("?{joined}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_transient_status() {
        assert!(is_transient_status(502));
        assert!(is_transient_status(503));
        assert!(is_transient_status(504));
        assert!(!is_transient_status(200));
        assert!(!is_transient_status(404));
        assert!(!is_transient_status(429));
        assert!(!is_transient_status(500));
    }

    #[test]
    fn test_build_query_empty() {
        assert_eq!(build_query(&[]), "");
    }

    #[test]
    fn test_build_query_preserves_order() {
        let q = build_query(&[("tag", "news"), ("status", "published")]);
        assert_eq!(q, "?tag=news&status=published");
    }

    #[test]
    fn test_build_query_keeps_empty_values() {
        assert_eq!(build_query(&[("tag", "")]), "?tag=");
    }

    #[test]
    fn test_build_query_does_not_escape() {
        // Callers own escaping; values pass through verbatim.
        assert_eq!(build_query(&[("tag", "a b")]), "?tag=a b");
    }
}
