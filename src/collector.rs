//! Full-catalog collection: page-count discovery and concurrent fan-out

use crate::error::{Error, Result};
use crate::fetcher::PageFetcher;
use crate::types::{Catalog, PageResult};
use futures::StreamExt;
use futures::stream;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Collects every page of the catalog into one unordered record sequence
///
/// Page 1 is fetched first to discover the total page count; its failure is
/// the one fatal path (the catalog size is unknowable without it). All
/// remaining pages are fetched concurrently, at most `concurrency_limit` in
/// flight at once. A page that fails after its retries contributes zero
/// records instead of aborting the collection.
pub struct CatalogCollector {
    fetcher: Arc<PageFetcher>,
    concurrency_limit: usize,
}

impl CatalogCollector {
    /// Create a collector over the given fetcher
    ///
    /// `concurrency_limit` caps simultaneous in-flight page fetches; a value
    /// of zero is treated as one.
    pub fn new(fetcher: Arc<PageFetcher>, concurrency_limit: usize) -> Self {
        Self {
            fetcher,
            concurrency_limit: concurrency_limit.max(1),
        }
    }

    /// Collect the whole catalog
    ///
    /// Equivalent to [`fetch_all_with_cancel`](Self::fetch_all_with_cancel)
    /// with a token that is never cancelled.
    pub async fn fetch_all(&self) -> Result<Catalog> {
        self.fetch_all_with_cancel(&CancellationToken::new()).await
    }

    /// Collect the whole catalog, honoring best-effort cancellation
    ///
    /// Cancelling the token degrades not-yet-finished pages to empty
    /// contributions; it does not abort pages that already completed, and a
    /// single page exhausting its retries never cancels its siblings.
    ///
    /// # Errors
    ///
    /// [`Error::FatalFetch`] when page 1 cannot be fetched after retries.
    pub async fn fetch_all_with_cancel(&self, cancel: &CancellationToken) -> Result<Catalog> {
        tracing::info!("collecting movie catalog");

        let first = self
            .fetcher
            .fetch_page_with_retry(1)
            .await
            .map_err(|e| Error::FatalFetch(format!("failed to fetch catalog page 1: {e}")))?;

        let total_pages = first.total_pages;
        tracing::info!(total_pages, "discovered catalog page count");

        // Page 1's records are reused; only pages 2..=N are fanned out
        let mut records = first.data;
        let mut degraded_pages = Vec::new();

        let results: Vec<PageResult> = stream::iter(2..=total_pages)
            .map(|page| {
                let fetcher = Arc::clone(&self.fetcher);
                let cancel = cancel.clone();
                async move {
                    tokio::select! {
                        _ = cancel.cancelled() => {
                            tracing::warn!(page, "page fetch cancelled");
                            PageResult::Degraded { page }
                        }
                        result = fetcher.fetch_page_with_retry(page) => match result {
                            Ok(envelope) => PageResult::Fetched(envelope),
                            Err(e) => {
                                tracing::warn!(
                                    page,
                                    error = %e,
                                    "page degraded to empty contribution after retries"
                                );
                                PageResult::Degraded { page }
                            }
                        }
                    }
                }
            })
            .buffer_unordered(self.concurrency_limit)
            .collect()
            .await;

        for result in results {
            match result {
                PageResult::Fetched(envelope) => records.extend(envelope.data),
                PageResult::Degraded { page } => degraded_pages.push(page),
            }
        }

        if degraded_pages.is_empty() {
            tracing::info!(records = records.len(), "catalog collection complete");
        } else {
            tracing::warn!(
                records = records.len(),
                degraded = degraded_pages.len(),
                "catalog collection complete with degraded pages"
            );
        }

        Ok(Catalog {
            records,
            degraded_pages,
        })
    }
}
