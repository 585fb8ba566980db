//! Client configuration.
//!
//! [`ClientConfig`] is built once, validated eagerly by
//! [`PageDataClient::new`](crate::PageDataClient::new), and immutable
//! afterwards. Validation failures are fatal: there is no silent fallback
//! past a missing host or API key.

use serde::{Deserialize, Serialize};

use crate::error::{PageDataError, Result};

/// Default user-agent sent with every request unless overridden or blanked.
pub const DEFAULT_USER_AGENT: &str = concat!("pagedata/", env!("CARGO_PKG_VERSION"));

/// Default `status` query value injected into page reads.
pub const DEFAULT_STATUS: &str = "draft";

/// Which header carries the API key.
///
/// The canonical name is `x-api-key`. One historical deployment of the API
/// authenticated via `x-api-token` instead; that spelling is available as an
/// explicit variant rather than a silent behavior switch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApiKeyHeader {
    /// `x-api-key` (canonical).
    #[default]
    XApiKey,
    /// `x-api-token` (historical variant).
    XApiToken,
}

impl ApiKeyHeader {
    /// The header name as sent on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            ApiKeyHeader::XApiKey => "x-api-key",
            ApiKeyHeader::XApiToken => "x-api-token",
        }
    }
}

/// Configuration for a [`PageDataClient`](crate::PageDataClient).
///
/// # Examples
///
/// ```
/// use pagedata::ClientConfig;
///
/// let config = ClientConfig {
///     retry_count: 2,
///     timeout_ms: 5_000,
///     ..ClientConfig::new("https://pages.example.com", "my-api-key")
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the PageData server, e.g. `https://pages.example.com`.
    /// Required; must be an absolute `http`/`https` URL.
    pub host: String,

    /// API key sent on every request. Required.
    pub api_key: String,

    /// Value of the `user-agent` header. An empty string suppresses the
    /// header entirely.
    pub user_agent: String,

    /// Per-attempt request timeout in milliseconds. `0` applies no explicit
    /// timeout and leaves the transport default in place.
    pub timeout_ms: u64,

    /// `status` query value injected into `get_pages`/`get_page` when the
    /// caller does not supply one.
    pub default_status: String,

    /// Number of automatic retries for GET requests that fail with a
    /// transient server status (502/503/504). `0` disables retry.
    pub retry_count: u32,

    /// Which header name carries the API key.
    pub api_key_header: ApiKeyHeader,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            host: String::new(),
            api_key: String::new(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_ms: 0,
            default_status: DEFAULT_STATUS.to_string(),
            retry_count: 0,
            api_key_header: ApiKeyHeader::default(),
        }
    }
}

impl ClientConfig {
    /// Configuration with the two required fields set and everything else at
    /// its default.
    pub fn new(host: impl Into<String>, api_key: impl Into<String>) -> Self {
        ClientConfig {
            host: host.into(),
            api_key: api_key.into(),
            ..ClientConfig::default()
        }
    }

    /// Validate the configuration.
    ///
    /// Checks that `host` is a non-empty absolute `http`/`https` URL and
    /// that `api_key` is non-empty. Called by
    /// [`PageDataClient::new`](crate::PageDataClient::new) before any
    /// network activity.
    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(PageDataError::Config("host is required".to_string()));
        }
        let parsed = url::Url::parse(&self.host)
            .map_err(|e| PageDataError::Config(format!("host is not a valid URL: {e}")))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(PageDataError::Config(format!(
                "host must be an http or https URL, got scheme {:?}",
                parsed.scheme()
            )));
        }
        if self.api_key.is_empty() {
            return Err(PageDataError::Config("api_key is required".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new("http://localhost:8000", "the-key");
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert!(config.user_agent.starts_with("pagedata/"));
        assert_eq!(config.default_status, "draft");
        assert_eq!(config.timeout_ms, 0);
        assert_eq!(config.retry_count, 0);
        assert_eq!(config.api_key_header, ApiKeyHeader::XApiKey);
    }

    #[test]
    fn test_validate_ok() {
        assert!(ClientConfig::new("http://localhost:8000", "k").validate().is_ok());
        assert!(ClientConfig::new("https://pages.example.com", "k").validate().is_ok());
    }

    #[test]
    fn test_validate_missing_host() {
        let err = ClientConfig::new("", "k").validate().unwrap_err();
        assert!(err.to_string().contains("host"));
    }

    #[test]
    fn test_validate_relative_host() {
        let err = ClientConfig::new("pages.example.com", "k").validate().unwrap_err();
        assert!(matches!(err, PageDataError::Config(_)));
    }

    #[test]
    fn test_validate_bad_scheme() {
        let err = ClientConfig::new("ftp://pages.example.com", "k").validate().unwrap_err();
        assert!(err.to_string().contains("scheme"));
    }

    #[test]
    fn test_validate_missing_api_key() {
        let err = ClientConfig::new("http://localhost:8000", "").validate().unwrap_err();
        assert!(err.to_string().contains("api_key"));
    }

    #[test]
    fn test_header_names() {
        assert_eq!(ApiKeyHeader::XApiKey.name(), "x-api-key");
        assert_eq!(ApiKeyHeader::XApiToken.name(), "x-api-token");
    }

    #[test]
    fn test_config_from_json() {
        let config: ClientConfig = serde_json::from_str(
            r#"{"host": "http://localhost:8000", "api_key": "k", "retry_count": 3}"#,
        )
        .unwrap();
        assert_eq!(config.retry_count, 3);
        assert_eq!(config.default_status, "draft");
    }
}
