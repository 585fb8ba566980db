//! Error types and result handling.
//!
//! Every failure a [`PageDataClient`](crate::PageDataClient) call can produce
//! is one of the five [`PageDataError`] kinds. The split matters to callers:
//!
//! | Kind | Meaning |
//! |------|---------|
//! | [`Config`](PageDataError::Config) | Invalid configuration, raised at construction, before any network activity |
//! | [`Transport`](PageDataError::Transport) | No HTTP response was obtained (DNS, connection refused, timeout) |
//! | [`NotFound`](PageDataError::NotFound) | The server answered 404 — the resource does not exist |
//! | [`Response`](PageDataError::Response) | The server answered any other 4xx/5xx |
//! | [`Parse`](PageDataError::Parse) | The body on a successful status was not valid JSON |
//!
//! `NotFound` gets its own variant because callers routinely branch on "page
//! missing" vs "server misbehaved". A transport failure never surfaces as a
//! bare `reqwest` error: it is always wrapped with the request URL attached.

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, PageDataError>;

/// Errors produced by [`PageDataClient`](crate::PageDataClient) operations.
#[derive(Debug, Error)]
pub enum PageDataError {
    /// The client configuration failed validation. Raised by
    /// [`PageDataClient::new`](crate::PageDataClient::new) before any request
    /// is made.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// No HTTP response was obtained: DNS failure, connection refused, or a
    /// timeout firing mid-attempt. Carries no status code.
    #[error("request to {url} failed: {message}")]
    Transport {
        /// Full URL of the failed request.
        url: String,
        /// Transport-level failure description.
        message: String,
    },

    /// The server returned 404. Permanent; never retried.
    #[error("{url} returned 404 not found")]
    NotFound {
        /// Full URL of the request.
        url: String,
    },

    /// The server returned a non-404 error status (after any retries).
    #[error("{url} returned status {status}")]
    Response {
        /// Full URL of the request.
        url: String,
        /// HTTP status code received.
        status: u16,
        /// Raw response body, captured for diagnosis.
        body: String,
    },

    /// The response body on a successful status could not be parsed as JSON.
    #[error("failed to parse response from {url} (status {status}): {message}")]
    Parse {
        /// Full URL of the request.
        url: String,
        /// HTTP status code received.
        status: u16,
        /// Underlying JSON parse error.
        message: String,
        /// Raw unparsed body, captured for diagnosis.
        body: String,
    },
}

impl PageDataError {
    /// The HTTP status code attached to this error, if the server responded
    /// at all. `Config` and `Transport` carry none.
    pub fn status(&self) -> Option<u16> {
        match self {
            PageDataError::NotFound { .. } => Some(404),
            PageDataError::Response { status, .. } | PageDataError::Parse { status, .. } => {
                Some(*status)
            }
            PageDataError::Config(_) | PageDataError::Transport { .. } => None,
        }
    }

    /// Whether this error is eligible for automatic retry on GET requests.
    ///
    /// Only server-side transient statuses (502/503/504) qualify. 404 is
    /// permanent by definition, and transport failures are surfaced
    /// immediately rather than retried.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            PageDataError::Response { status, .. }
                if crate::client::is_transient_status(*status)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_accessor() {
        let err = PageDataError::NotFound {
            url: "http://example.com/api/pages/missing".to_string(),
        };
        assert_eq!(err.status(), Some(404));

        let err = PageDataError::Transport {
            url: "http://example.com".to_string(),
            message: "connection refused".to_string(),
        };
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_transient_classification() {
        let bad_gateway = PageDataError::Response {
            url: "http://example.com/api/pages".to_string(),
            status: 502,
            body: String::new(),
        };
        assert!(bad_gateway.is_transient());

        let forbidden = PageDataError::Response {
            url: "http://example.com/api/pages".to_string(),
            status: 403,
            body: String::new(),
        };
        assert!(!forbidden.is_transient());

        let not_found = PageDataError::NotFound {
            url: "http://example.com/api/pages/x".to_string(),
        };
        assert!(!not_found.is_transient());
    }

    #[test]
    fn test_display_includes_url_and_status() {
        let err = PageDataError::Response {
            url: "http://example.com/api/pages".to_string(),
            status: 500,
            body: "boom".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("http://example.com/api/pages"));
        assert!(msg.contains("500"));
    }
}
