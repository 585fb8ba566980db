#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # PageData client
//!
//! An async Rust client for the PageData content/page-management HTTP API.
//!
//! ## Overview
//!
//! The crate is one component: a request pipeline that builds an outbound
//! HTTP request from (method, endpoint, body), injects auth and
//! identification headers, dispatches it, classifies the response, retries
//! transient GET failures, and normalizes the outcome into a parsed JSON
//! value or a typed [`PageDataError`]. Every public convenience method
//! (`get_pages`, `get_page`, `get_projects`, `create_page`, `update_page`,
//! `get_multiple_pages`) is a thin call-site into that pipeline.
//!
//! ## Key behaviors
//!
//! - **Eager configuration validation**: a missing host or API key fails at
//!   [`PageDataClient::new`], before any network activity.
//! - **Uniform error taxonomy**: transport failure, 404, other error
//!   statuses, and malformed JSON bodies are distinct [`PageDataError`]
//!   kinds, each carrying the source URL.
//! - **Bounded retry**: GETs failing with 502/503/504 are re-dispatched
//!   immediately up to `retry_count` times; exhausting the budget surfaces
//!   the original error unchanged. Writes are never retried.
//! - **Default status injection**: page reads send `status=draft` (or the
//!   configured default) unless the caller supplies their own.
//! - **Atomic fan-out**: [`PageDataClient::get_multiple_pages`] fires all
//!   fetches concurrently and fails the whole call if any one fails.
//!
//! ## Client Usage
//!
//! ```ignore
//! use pagedata::{ClientConfig, PageDataClient};
//!
//! #[tokio::main]
//! async fn main() -> pagedata::Result<()> {
//!     let config = ClientConfig {
//!         retry_count: 2,
//!         ..ClientConfig::new("https://pages.example.com", "my-api-key")
//!     };
//!     let client = PageDataClient::new(config)?;
//!
//!     let pages = client.get_pages(&[("tag", "news")]).await?;
//!     let about = client.get_page("about-us", &[]).await?;
//!     let merged = client
//!         .get_multiple_pages_merged(&["header", "footer"])
//!         .await?;
//!
//!     println!("{pages} {about} {merged}");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - **[client]** - Request pipeline, configuration, and endpoint methods
//! - **[error]** - Error taxonomy and result handling
//! - **[types]** - Plain-data request description
//! - **[merge]** - Gap-filling merge for combined page content

pub mod client;
pub mod error;
pub mod merge;
pub mod types;

pub use client::{ApiKeyHeader, ClientConfig, PageDataClient};
pub use error::{PageDataError, Result};
pub use types::{HttpMethod, RequestSpec};
