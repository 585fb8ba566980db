//! Endpoint-builder methods.
//!
//! Every method here is a thin call-site into
//! [`PageDataClient::send`](super::PageDataClient::send): it contributes a
//! path, a query string, and (for writes) a JSON body, nothing more. Query
//! options are ordered `(key, value)` pairs passed through verbatim; page
//! reads inject `status=<default_status>` only when the caller supplied no
//! `status` key of their own.

use std::collections::HashMap;

use futures::future::try_join_all;
use serde_json::Value;

use crate::client::fetch::PageDataClient;
use crate::client::utils::build_query;
use crate::error::{PageDataError, Result};
use crate::merge;
use crate::types::RequestSpec;

impl PageDataClient {
    /// Fetch the page listing: `GET /api/pages?{query}`.
    ///
    /// Injects the configured default `status` unless the caller already
    /// supplied one.
    pub async fn get_pages(&self, query: &[(&str, &str)]) -> Result<Value> {
        let endpoint = format!("/api/pages{}", self.page_query(query));
        self.send(RequestSpec::get(endpoint)).await
    }

    /// Fetch a single page by slug: `GET /api/pages/{slug}?{query}`.
    ///
    /// Same default-`status` injection as [`get_pages`](Self::get_pages).
    pub async fn get_page(&self, slug: &str, query: &[(&str, &str)]) -> Result<Value> {
        let endpoint = format!("/api/pages/{slug}{}", self.page_query(query));
        self.send(RequestSpec::get(endpoint)).await
    }

    /// Fetch the project listing: `GET /api/projects`.
    pub async fn get_projects(&self) -> Result<Value> {
        self.send(RequestSpec::get("/api/projects")).await
    }

    /// Create a page: `POST /api/pages` with a JSON payload.
    pub async fn create_page(&self, payload: Value) -> Result<Value> {
        self.send(RequestSpec::post("/api/pages", payload)).await
    }

    /// Update a page: `PUT /api/pages/{slug}` with a JSON payload.
    pub async fn update_page(&self, slug: &str, payload: Value) -> Result<Value> {
        self.send(RequestSpec::put(format!("/api/pages/{slug}"), payload))
            .await
    }

    /// Fetch several pages concurrently, keyed by slug.
    ///
    /// Fires one [`get_page`](Self::get_page) per slug and joins them all.
    /// The join is atomic: if any constituent fetch fails, the whole call
    /// fails and no partial mapping is returned.
    pub async fn get_multiple_pages(&self, slugs: &[&str]) -> Result<HashMap<String, Value>> {
        let fetches = slugs.iter().copied().map(|slug| async move {
            let page = self.get_page(slug, &[]).await?;
            Ok::<_, PageDataError>((slug.to_string(), page))
        });
        let resolved = try_join_all(fetches).await?;
        Ok(resolved.into_iter().collect())
    }

    /// Fetch several pages concurrently, projected onto caller-chosen keys.
    ///
    /// `mapping` is `(output_key, slug)` pairs. Each resolved page
    /// contributes only its `content` field, stored under `output_key`.
    /// Atomic like [`get_multiple_pages`](Self::get_multiple_pages).
    pub async fn get_multiple_pages_mapped(
        &self,
        mapping: &[(&str, &str)],
    ) -> Result<HashMap<String, Value>> {
        let fetches = mapping.iter().copied().map(|(key, slug)| async move {
            let page = self.get_page(slug, &[]).await?;
            let content = page.get("content").cloned().unwrap_or(Value::Null);
            Ok::<_, PageDataError>((key.to_string(), content))
        });
        let resolved = try_join_all(fetches).await?;
        Ok(resolved.into_iter().collect())
    }

    /// Fetch several pages concurrently and merge their `content` objects
    /// into one, earlier slugs winning and later ones filling gaps.
    pub async fn get_multiple_pages_merged(&self, slugs: &[&str]) -> Result<Value> {
        let pages = self.get_multiple_pages(slugs).await?;
        let contents: Vec<Value> = slugs
            .iter()
            .map(|slug| {
                pages
                    .get(*slug)
                    .and_then(|page| page.get("content"))
                    .cloned()
                    .unwrap_or(Value::Null)
            })
            .collect();
        Ok(merge::deep_fill(&contents))
    }

    /// Query string for page reads, injecting the default `status` when the
    /// caller did not supply one.
    fn page_query(&self, query: &[(&str, &str)]) -> String {
        if query.iter().any(|(key, _)| *key == "status") {
            return build_query(query);
        }
        let mut pairs = query.to_vec();
        pairs.push(("status", self.config().default_status.as_str()));
        build_query(&pairs)
    }
}
