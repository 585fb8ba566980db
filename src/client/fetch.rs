//! The request pipeline: dispatch, classification, and retry.
//!
//! [`PageDataClient`] turns a [`RequestSpec`] into a parsed JSON value or a
//! [`PageDataError`], applying auth headers, timeout, retry, and error
//! normalization uniformly regardless of call-site. The endpoint convenience
//! methods in [`pages`](super::pages) all funnel through [`send`].
//!
//! # Examples
//!
//! ```ignore
//! use pagedata::{ClientConfig, PageDataClient};
//!
//! #[tokio::main]
//! async fn main() -> pagedata::Result<()> {
//!     let config = ClientConfig::new("https://pages.example.com", "my-api-key");
//!     let client = PageDataClient::new(config)?;
//!     let page = client.get_page("about-us", &[]).await?;
//!     println!("{}", page["content"]);
//!     Ok(())
//! }
//! ```
//!
//! [`send`]: PageDataClient::send

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::client::config::ClientConfig;
use crate::error::{PageDataError, Result};
use crate::types::RequestSpec;

/// Async client for the PageData API.
///
/// Holds a pooled `reqwest::Client` and an immutable [`ClientConfig`]; no
/// mutable state is carried between calls, so one client can serve any
/// number of concurrent requests.
#[derive(Debug, Clone)]
pub struct PageDataClient {
    client: reqwest::Client,
    config: Arc<ClientConfig>,
}

impl PageDataClient {
    /// Create a client, validating the configuration eagerly.
    ///
    /// Fails with [`PageDataError::Config`] before any network activity if
    /// the host is missing or malformed or the API key is empty. A trailing
    /// slash on the host is stripped so endpoints always join cleanly.
    pub fn new(mut config: ClientConfig) -> Result<Self> {
        config.validate()?;
        config.host = config.host.trim_end_matches('/').to_string();

        let client = reqwest::Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|e| PageDataError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(PageDataClient {
            client,
            config: Arc::new(config),
        })
    }

    /// The validated configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Execute a request, retrying GETs on transient server errors.
    ///
    /// The retry loop carries an explicit attempt counter: a request is
    /// re-dispatched immediately (no backoff) while the failure is a
    /// 502/503/504 response, the method is GET, and attempts so far are
    /// below `config.retry_count`. When the budget is exhausted the
    /// *original* error is returned unchanged — callers observe the real
    /// status, never a synthesized retries-exhausted error.
    pub async fn send(&self, spec: RequestSpec) -> Result<Value> {
        let url = format!("{}{}", self.config.host, spec.endpoint);
        let mut attempt: u32 = 0;
        loop {
            match self.dispatch(&spec, &url).await {
                Ok(value) => return Ok(value),
                Err(e)
                    if spec.method.is_idempotent_read()
                        && e.is_transient()
                        && attempt < self.config.retry_count =>
                {
                    attempt += 1;
                    tracing::warn!(
                        url = %url,
                        status = ?e.status(),
                        attempt,
                        max = self.config.retry_count,
                        "transient server error, retrying"
                    );
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// One HTTP attempt: build, dispatch, classify.
    async fn dispatch(&self, spec: &RequestSpec, url: &str) -> Result<Value> {
        let mut builder = self.client.request(spec.method.into(), url);

        builder = builder.header(self.config.api_key_header.name(), &self.config.api_key);
        if !self.config.user_agent.is_empty() {
            builder = builder.header(reqwest::header::USER_AGENT, &self.config.user_agent);
        }
        if let Some(body) = &spec.body {
            builder = builder.json(body);
        }
        if self.config.timeout_ms > 0 {
            builder = builder.timeout(Duration::from_millis(self.config.timeout_ms));
        }

        tracing::debug!(method = spec.method.as_str(), url = %url, "dispatching request");

        // Anything short of an HTTP response is a transport failure: no
        // status code, and never eligible for retry.
        let response = builder.send().await.map_err(|e| PageDataError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| PageDataError::Transport {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        // Classification precedence: 404 first (permanent), then any other
        // error status, then success with JSON (or empty) body.
        if status == 404 {
            return Err(PageDataError::NotFound {
                url: url.to_string(),
            });
        }
        if status >= 400 {
            return Err(PageDataError::Response {
                url: url.to_string(),
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }
        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes).map_err(|e| PageDataError::Parse {
            url: url.to_string(),
            status,
            message: e.to_string(),
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}
