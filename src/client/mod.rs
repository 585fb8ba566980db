//! PageData HTTP client.
//!
//! This module implements the full request pipeline and the API surface
//! layered on top of it:
//!
//! ```text
//! client/
//! ├── config  - ClientConfig and eager validation
//! ├── fetch   - PageDataClient: dispatch, classification, retry
//! ├── pages   - endpoint-builder methods (get_pages, create_page, ...)
//! └── utils   - query-string building, transient-status classification
//! ```
//!
//! # Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`PageDataClient`] | Async client; one pooled HTTP connection set |
//! | [`ClientConfig`] | Immutable configuration, validated at construction |
//! | [`ApiKeyHeader`] | Which header name carries the API key |
//!
//! # Examples
//!
//! ```
//! use pagedata::{ClientConfig, PageDataClient};
//!
//! // Default configuration
//! let client = PageDataClient::new(
//!     ClientConfig::new("https://pages.example.com", "my-api-key"),
//! ).unwrap();
//!
//! // Custom configuration
//! let config = ClientConfig {
//!     retry_count: 2,
//!     timeout_ms: 5_000,
//!     ..ClientConfig::new("https://pages.example.com", "my-api-key")
//! };
//! let client = PageDataClient::new(config).unwrap();
//! ```

mod config;
mod fetch;
mod pages;
mod utils;

pub use config::{ApiKeyHeader, ClientConfig, DEFAULT_STATUS, DEFAULT_USER_AGENT};
pub use fetch::PageDataClient;
pub use utils::{build_query, is_transient_status};
