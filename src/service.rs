//! Director lookup service: cache-fronted fetch + aggregation pipeline

use crate::aggregator::DirectorAggregator;
use crate::cache::ThresholdCache;
use crate::collector::CatalogCollector;
use crate::config::Config;
use crate::error::Result;
use crate::fetcher::PageFetcher;
use std::sync::Arc;

/// The inbound operation exposed to the endpoint layer
///
/// `get_directors(threshold)` is memoized per threshold: a hit within the
/// cache TTL answers without touching the catalog; a miss runs the full
/// collect-then-aggregate pipeline and stores the result.
///
/// Threshold validation happens at the API boundary, not here; by the time
/// this service runs, the threshold is a positive integer.
pub struct DirectorService {
    collector: CatalogCollector,
    aggregator: DirectorAggregator,
    cache: ThresholdCache,
}

impl DirectorService {
    /// Build the service from configuration
    ///
    /// # Errors
    ///
    /// [`Error::Config`](crate::error::Error::Config) when the catalog base
    /// URL is invalid.
    pub fn new(config: &Config) -> Result<Self> {
        let fetcher = Arc::new(PageFetcher::new(&config.catalog)?);
        let collector = CatalogCollector::new(fetcher, config.catalog.concurrency_limit);
        let aggregator = DirectorAggregator::new(config.catalog.batch_size);
        let cache = ThresholdCache::new(config.cache.ttl, config.cache.max_entries);

        Ok(Self {
            collector,
            aggregator,
            cache,
        })
    }

    /// Directors whose batch-local movie count strictly exceeds `threshold`
    ///
    /// Returns an alphabetically sorted, duplicate-free list; an empty list
    /// means no director qualified (indistinguishable from an empty catalog
    /// at this boundary).
    ///
    /// # Errors
    ///
    /// [`Error::FatalFetch`](crate::error::Error::FatalFetch) when catalog
    /// page 1 cannot be fetched; all other page failures degrade silently
    /// into partial data.
    pub async fn get_directors(&self, threshold: u32) -> Result<Arc<Vec<String>>> {
        tracing::info!(threshold, "looking up directors over threshold");

        self.cache
            .get_or_compute(threshold, || async move {
                let catalog = self.collector.fetch_all().await?;
                let directors = self
                    .aggregator
                    .qualifying_directors(&catalog.records, threshold);

                tracing::info!(
                    threshold,
                    records = catalog.records.len(),
                    degraded_pages = catalog.degraded_pages.len(),
                    directors = directors.len(),
                    "aggregated catalog for threshold"
                );
                Ok(directors)
            })
            .await
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RetryConfig;
    use crate::error::Error;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: &str) -> Config {
        let mut config = Config::default();
        config.catalog.base_url = base_url.to_string();
        config.catalog.batch_size = 10;
        config.catalog.retry = RetryConfig {
            max_attempts: 0,
            initial_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(10),
            backoff_multiplier: 2.0,
            jitter: false,
        };
        config
    }

    fn page_body(
        page: u32,
        total_pages: u32,
        directors: &[Option<&str>],
    ) -> serde_json::Value {
        let data: Vec<serde_json::Value> = directors
            .iter()
            .map(|d| match d {
                Some(name) => serde_json::json!({"Title": "t", "Director": name}),
                None => serde_json::json!({"Title": "t", "Director": null}),
            })
            .collect();
        serde_json::json!({
            "page": page,
            "per_page": 10,
            "total": data.len(),
            "total_pages": total_pages,
            "data": data,
        })
    }

    async fn mount_page(server: &MockServer, page: u32, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("page", page.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn aggregates_across_pages_sorted_and_distinct() {
        let server = MockServer::start().await;
        mount_page(
            &server,
            1,
            page_body(1, 2, &[Some("Quentin"), Some("Quentin"), Some("Ava")]),
        )
        .await;
        mount_page(
            &server,
            2,
            page_body(2, 2, &[Some("Ava"), Some("Ava"), None]),
        )
        .await;

        let service = DirectorService::new(&test_config(&server.uri())).unwrap();
        let result = service.get_directors(1).await.unwrap();

        // One batch of 5 directed records: Quentin 2 > 1, Ava 3 > 1
        assert_eq!(*result, vec!["Ava".to_string(), "Quentin".to_string()]);
    }

    #[tokio::test]
    async fn repeat_call_within_ttl_fetches_catalog_once() {
        let server = MockServer::start().await;
        mount_page(&server, 1, page_body(1, 1, &[Some("A"), Some("A")])).await;

        let service = DirectorService::new(&test_config(&server.uri())).unwrap();
        let first = service.get_directors(1).await.unwrap();
        let second = service.get_directors(1).await.unwrap();

        assert_eq!(*first, *second);
        assert_eq!(
            server.received_requests().await.unwrap().len(),
            1,
            "second call must be served from the cache"
        );
    }

    #[tokio::test]
    async fn different_threshold_triggers_a_fresh_fetch() {
        let server = MockServer::start().await;
        mount_page(&server, 1, page_body(1, 1, &[Some("A"), Some("A")])).await;

        let service = DirectorService::new(&test_config(&server.uri())).unwrap();
        service.get_directors(1).await.unwrap();
        service.get_directors(2).await.unwrap();

        assert_eq!(
            server.received_requests().await.unwrap().len(),
            2,
            "each distinct threshold runs its own pipeline"
        );
    }

    #[tokio::test]
    async fn page_one_failure_surfaces_as_fatal_fetch() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let service = DirectorService::new(&test_config(&server.uri())).unwrap();
        let err = service.get_directors(1).await.unwrap_err();

        assert!(matches!(err, Error::FatalFetch(_)));
    }

    #[tokio::test]
    async fn failed_lookup_is_not_cached() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(500))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        mount_page(&server, 1, page_body(1, 1, &[Some("A"), Some("A")])).await;

        let service = DirectorService::new(&test_config(&server.uri())).unwrap();

        assert!(service.get_directors(1).await.is_err());
        let retry = service.get_directors(1).await.unwrap();
        assert_eq!(*retry, vec!["A".to_string()]);
    }

    #[tokio::test]
    async fn empty_catalog_yields_empty_list() {
        let server = MockServer::start().await;
        mount_page(&server, 1, page_body(1, 1, &[])).await;

        let service = DirectorService::new(&test_config(&server.uri())).unwrap();
        let result = service.get_directors(3).await.unwrap();

        assert!(result.is_empty(), "empty result, not an error");
    }
}
