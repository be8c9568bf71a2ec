//! # movie-directors
//!
//! Backend library answering one question: which directors have more than
//! N movies in an external, paginated movie catalog?
//!
//! ## Design Philosophy
//!
//! movie-directors is designed to be:
//! - **Degrade, don't abort** - A failed page contributes zero records
//!   instead of failing the whole lookup; only page 1 is fatal
//! - **Sensible defaults** - Works out of the box with zero configuration
//! - **Library-first** - No CLI or UI, purely a Rust crate for embedding,
//!   with an optional REST API server
//! - **Memoized** - Results are cached per threshold with TTL and LRU
//!   eviction, so repeated queries avoid re-fetching the catalog
//!
//! ## Quick Start
//!
//! ```no_run
//! use movie_directors::{Config, DirectorService};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Arc::new(Config::default());
//!     let service = Arc::new(DirectorService::new(&config)?);
//!
//!     // Direct library use
//!     let directors = service.get_directors(4).await?;
//!     println!("{directors:?}");
//!
//!     // Or serve the REST API (blocks until shutdown)
//!     movie_directors::api::start_api_server(service, config).await?;
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Director aggregation over fixed-size batches
pub mod aggregator;
/// REST API module
pub mod api;
/// Threshold-keyed result cache with TTL and LRU eviction
pub mod cache;
/// Full-catalog collection with bounded-concurrency fan-out
pub mod collector;
/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Single-page catalog fetching
pub mod fetcher;
/// Retry logic with exponential backoff
pub mod retry;
/// Director lookup service (cache-fronted pipeline)
pub mod service;
/// Core types: wire format and collection results
pub mod types;

// Re-export commonly used types
pub use aggregator::DirectorAggregator;
pub use cache::ThresholdCache;
pub use collector::CatalogCollector;
pub use config::{ApiConfig, CacheConfig, CatalogConfig, Config, RetryConfig};
pub use error::{ApiError, Error, ErrorDetail, Result, ToHttpStatus};
pub use fetcher::PageFetcher;
pub use service::DirectorService;
pub use types::{Catalog, DirectorsResponse, MovieRecord, PageEnvelope, PageResult};
