//! Core request types.
//!
//! A [`RequestSpec`] describes one outbound call as plain data: method,
//! endpoint (path plus query string), and optional JSON body. The endpoint
//! builders in [`client`](crate::client) produce these and hand them to
//! [`PageDataClient::send`](crate::PageDataClient::send); nothing in a spec
//! touches the network.

use serde_json::Value;

/// HTTP method for a PageData request.
///
/// Only the methods the API actually uses are represented. Retry policy
/// keys off this: only [`Get`](HttpMethod::Get) requests are ever retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// Idempotent read; eligible for transient-error retry.
    Get,
    /// Create; never retried.
    Post,
    /// Update; never retried.
    Put,
}

impl HttpMethod {
    /// Canonical uppercase name, as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }

    /// Whether requests with this method may be retried on transient
    /// server errors. Only idempotent reads qualify.
    pub fn is_idempotent_read(&self) -> bool {
        matches!(self, HttpMethod::Get)
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
        }
    }
}

/// One outbound request, described as plain data.
///
/// The endpoint is appended verbatim to the configured host: no path
/// escaping is applied, so callers own the validity of any query string
/// they embed.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    /// HTTP method to use.
    pub method: HttpMethod,
    /// Path plus query string, e.g. `/api/pages/my-slug?status=draft`.
    pub endpoint: String,
    /// JSON body for POST/PUT; `None` omits the body entirely.
    pub body: Option<Value>,
}

impl RequestSpec {
    /// A bodiless GET for the given endpoint.
    pub fn get(endpoint: impl Into<String>) -> Self {
        RequestSpec {
            method: HttpMethod::Get,
            endpoint: endpoint.into(),
            body: None,
        }
    }

    /// A POST carrying the given JSON body.
    pub fn post(endpoint: impl Into<String>, body: Value) -> Self {
        RequestSpec {
            method: HttpMethod::Post,
            endpoint: endpoint.into(),
            body: Some(body),
        }
    }

    /// A PUT carrying the given JSON body.
    pub fn put(endpoint: impl Into<String>, body: Value) -> Self {
        RequestSpec {
            method: HttpMethod::Put,
            endpoint: endpoint.into(),
            body: Some(body),
        }
    }
}
