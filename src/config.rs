//! Configuration types for movie-directors

use serde::{Deserialize, Serialize};
use std::{net::SocketAddr, time::Duration};
use utoipa::ToSchema;

/// Catalog fetch configuration (endpoint, concurrency, aggregation window)
///
/// Groups settings related to how catalog pages are fetched and how the
/// movie stream is partitioned for aggregation. Used as a nested sub-config
/// within [`Config`].
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CatalogConfig {
    /// Base URL of the movie catalog service; pages are fetched from
    /// `<base_url>/search?page=<n>`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Maximum simultaneous in-flight page fetches (default: 5)
    ///
    /// This is the sole backpressure mechanism: it caps outbound requests
    /// regardless of the total page count.
    #[serde(default = "default_concurrency_limit")]
    pub concurrency_limit: usize,

    /// Aggregation window size (default: 10)
    ///
    /// Movies are counted per window of this many consecutive records in
    /// arrival order. See [`DirectorAggregator`](crate::aggregator::DirectorAggregator)
    /// for the per-batch counting semantics this implies.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Per-request timeout for a single page fetch attempt (default: 30 seconds)
    #[serde(default = "default_fetch_timeout", with = "duration_serde")]
    pub fetch_timeout: Duration,

    /// Retry policy for transient page-fetch failures
    #[serde(default)]
    pub retry: RetryConfig,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            concurrency_limit: default_concurrency_limit(),
            batch_size: default_batch_size(),
            fetch_timeout: default_fetch_timeout(),
            retry: RetryConfig::default(),
        }
    }
}

/// Threshold-cache configuration (expiry and capacity)
///
/// Used as a nested sub-config within [`Config`].
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CacheConfig {
    /// Time-to-live for a cache entry, measured from insertion
    /// (default: 5 minutes)
    ///
    /// Expiry is write-based: reads do not refresh an entry's age.
    #[serde(default = "default_cache_ttl", with = "duration_serde")]
    pub ttl: Duration,

    /// Maximum number of distinct thresholds held at once (default: 1000)
    ///
    /// Inserting beyond this evicts the least-recently-used entry.
    #[serde(default = "default_cache_max_entries")]
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: default_cache_ttl(),
            max_entries: default_cache_max_entries(),
        }
    }
}

/// REST API server configuration
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiConfig {
    /// Address the API server binds to (default: 127.0.0.1:8080)
    #[serde(default = "default_bind_address")]
    pub bind_address: SocketAddr,

    /// Enable CORS (default: true)
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// Allowed CORS origins ("*" for any; default: ["*"])
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Serve interactive Swagger UI at /swagger-ui (default: true)
    #[serde(default = "default_true")]
    pub swagger_ui: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            cors_enabled: true,
            cors_origins: default_cors_origins(),
            swagger_ui: true,
        }
    }
}

/// Main configuration for the directors service
///
/// Fields are organized into logical sub-configs:
/// - [`catalog`](CatalogConfig) — catalog endpoint, fetch concurrency, window size
/// - [`cache`](CacheConfig) — threshold-cache TTL and capacity
/// - [`api`](ApiConfig) — REST server settings
///
/// The catalog and cache sub-configs are flattened for serialization, so the
/// JSON/TOML format stays flat (no nesting) for those settings.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct Config {
    /// Catalog fetch and aggregation settings
    #[serde(flatten)]
    pub catalog: CatalogConfig,

    /// Threshold-cache settings
    #[serde(flatten)]
    pub cache: CacheConfig,

    /// API server settings
    #[serde(default)]
    pub api: ApiConfig,
}

/// Retry configuration for transient failures
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct RetryConfig {
    /// Maximum number of retry attempts after the initial try (default: 3)
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Initial delay before first retry (default: 2 seconds)
    #[serde(default = "default_initial_delay", with = "duration_serde")]
    pub initial_delay: Duration,

    /// Maximum delay between retries (default: 60 seconds)
    #[serde(default = "default_max_delay", with = "duration_serde")]
    pub max_delay: Duration,

    /// Multiplier for exponential backoff (default: 2.0)
    #[serde(default = "default_backoff_multiplier")]
    pub backoff_multiplier: f64,

    /// Add random jitter to delays (default: false)
    #[serde(default)]
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_secs(2),
            max_delay: Duration::from_secs(60),
            backoff_multiplier: 2.0,
            jitter: false,
        }
    }
}

fn default_base_url() -> String {
    "https://eron-movies.wiremockapi.cloud/api/movies".to_string()
}

fn default_concurrency_limit() -> usize {
    5
}

fn default_batch_size() -> usize {
    10
}

fn default_fetch_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_cache_ttl() -> Duration {
    Duration::from_secs(5 * 60) // 5 minutes
}

fn default_cache_max_entries() -> usize {
    1000
}

fn default_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_true() -> bool {
    true
}

fn default_max_attempts() -> u32 {
    3
}

fn default_initial_delay() -> Duration {
    Duration::from_secs(2)
}

fn default_max_delay() -> Duration {
    Duration::from_secs(60)
}

fn default_backoff_multiplier() -> f64 {
    2.0
}

// Duration serialization helper
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}
