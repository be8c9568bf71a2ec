//! Core types: catalog wire format and collection results

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single movie record as returned by the catalog service
///
/// The catalog serializes fields in PascalCase (`Title`, `Director`, ...).
/// Every field except `director` is carried opaquely; only `director` is
/// inspected by the aggregation pipeline, and it may be absent or null.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct MovieRecord {
    /// Movie title
    #[serde(default)]
    pub title: String,

    /// Release year
    #[serde(default)]
    pub year: String,

    /// Content rating (e.g., "PG-13")
    #[serde(default)]
    pub rated: String,

    /// Release date
    #[serde(default)]
    pub released: String,

    /// Runtime (e.g., "120 min")
    #[serde(default)]
    pub runtime: String,

    /// Genre list as a single string
    #[serde(default)]
    pub genre: String,

    /// Director name; null or absent for records without one
    #[serde(default)]
    pub director: Option<String>,

    /// Writer credits
    #[serde(default)]
    pub writer: String,

    /// Actor credits
    #[serde(default)]
    pub actors: String,
}

impl MovieRecord {
    /// Construct a minimal record with only a director set; test and
    /// fixture helper
    pub fn with_director(director: impl Into<String>) -> Self {
        Self {
            title: String::new(),
            year: String::new(),
            rated: String::new(),
            released: String::new(),
            runtime: String::new(),
            genre: String::new(),
            director: Some(director.into()),
            writer: String::new(),
            actors: String::new(),
        }
    }

    /// Construct a minimal record with no director
    pub fn without_director() -> Self {
        Self {
            title: String::new(),
            year: String::new(),
            rated: String::new(),
            released: String::new(),
            runtime: String::new(),
            genre: String::new(),
            director: None,
            writer: String::new(),
            actors: String::new(),
        }
    }
}

/// One page of catalog results plus pagination metadata
///
/// `total_pages` is authoritative only when read from page 1; it is assumed
/// constant across pages and never re-validated.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct PageEnvelope {
    /// The page number this envelope describes
    pub page: u32,

    /// Records per page
    pub per_page: u32,

    /// Total records in the catalog
    pub total: u32,

    /// Total page count
    pub total_pages: u32,

    /// The movie records on this page
    #[serde(default)]
    pub data: Vec<MovieRecord>,
}

/// Outcome of fetching a single catalog page
///
/// A failed page (after retries) is a visible value rather than a swallowed
/// error: it contributes zero records and is reported in
/// [`Catalog::degraded_pages`].
#[derive(Clone, Debug)]
pub enum PageResult {
    /// The page was fetched and parsed
    Fetched(PageEnvelope),
    /// The page failed after retries (or was cancelled) and contributes
    /// zero records
    Degraded {
        /// The page number that degraded
        page: u32,
    },
}

/// The collected movie catalog
///
/// `records` is an unordered concatenation of all successfully fetched
/// pages; no ordering among concurrently fetched pages is guaranteed.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    /// All movie records that were successfully fetched
    pub records: Vec<MovieRecord>,

    /// Page numbers that degraded to an empty contribution
    pub degraded_pages: Vec<u32>,
}

impl Catalog {
    /// True when every page contributed its records
    pub fn is_complete(&self) -> bool {
        self.degraded_pages.is_empty()
    }
}

/// Response body for the directors endpoint
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct DirectorsResponse {
    /// Alphabetically sorted, distinct director names
    pub directors: Vec<String>,
}
