//! Single-page catalog fetching with per-page retry/backoff

use crate::config::{CatalogConfig, RetryConfig};
use crate::error::{Error, Result};
use crate::retry::fetch_with_retry;
use crate::types::PageEnvelope;
use reqwest::header;
use url::Url;

/// Fetches and parses one catalog page at a time
///
/// The fetcher owns a single [`reqwest::Client`] (connection pooling, request
/// timeout) and the retry policy for transient failures. It distinguishes
/// transport failures (retryable) from malformed bodies (not retryable) by
/// reading the response as text before parsing.
#[derive(Debug)]
pub struct PageFetcher {
    client: reqwest::Client,
    search_url: Url,
    retry: RetryConfig,
}

impl PageFetcher {
    /// Create a fetcher for the configured catalog endpoint
    ///
    /// Validates the base URL once so per-page URL construction cannot fail.
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.fetch_timeout)
            .build()?;

        let base_url = Url::parse(&config.base_url).map_err(|e| Error::Config {
            message: format!("invalid catalog base URL '{}': {e}", config.base_url),
            key: Some("base_url".to_string()),
        })?;

        let mut search_url = base_url.clone();
        search_url
            .path_segments_mut()
            .map_err(|_| Error::Config {
                message: format!("catalog base URL '{base_url}' cannot have a path"),
                key: Some("base_url".to_string()),
            })?
            .pop_if_empty()
            .push("search");

        Ok(Self {
            client,
            search_url,
            retry: config.retry.clone(),
        })
    }

    /// Fetch and parse a single catalog page (one attempt, no retries)
    ///
    /// # Errors
    ///
    /// - [`Error::Network`] for transport failures (retryable)
    /// - [`Error::UpstreamStatus`] for non-2xx responses (retryable when 5xx/429)
    /// - [`Error::Parse`] for malformed bodies (not retryable)
    pub async fn fetch_page(&self, page: u32) -> Result<PageEnvelope> {
        let mut url = self.search_url.clone();
        url.set_query(Some(&format!("page={page}")));

        tracing::debug!(page, %url, "fetching catalog page");

        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::UpstreamStatus {
                status: status.as_u16(),
                page,
            });
        }

        let body = response.text().await?;
        let envelope: PageEnvelope = serde_json::from_str(&body).map_err(|e| Error::Parse {
            page,
            reason: e.to_string(),
        })?;

        tracing::debug!(page, records = envelope.data.len(), "parsed catalog page");
        Ok(envelope)
    }

    /// Fetch a page, retrying transient failures per the configured policy
    ///
    /// Transient failures are retried up to `retry.max_attempts` additional
    /// times with exponential backoff (2s, 4s, 8s at the defaults). Parse
    /// failures and 4xx statuses fail immediately.
    pub async fn fetch_page_with_retry(&self, page: u32) -> Result<PageEnvelope> {
        fetch_with_retry(&self.retry, || self.fetch_page(page)).await
    }
}
