//! Director lookup handler.

use crate::api::AppState;
use crate::error::Error;
use crate::types::DirectorsResponse;
use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

/// Query parameters for the directors endpoint
#[derive(Debug, Deserialize)]
pub struct DirectorsQuery {
    /// Minimum movie count a director must strictly exceed
    pub threshold: i64,
}

/// GET /directors - Directors with more than `threshold` movies
///
/// An empty `directors` array means no director qualified; an empty catalog
/// is indistinguishable from "none qualifying" at this boundary, so the
/// response is 200 in both cases.
#[utoipa::path(
    get,
    path = "/api/v1/directors",
    tag = "directors",
    params(
        ("threshold" = i64, Query, description = "Minimum movie count a director must strictly exceed (must be > 0)")
    ),
    responses(
        (status = 200, description = "Sorted, distinct director names", body = crate::types::DirectorsResponse),
        (status = 400, description = "Threshold missing or not a positive integer", body = crate::error::ApiError),
        (status = 502, description = "Catalog page 1 could not be fetched", body = crate::error::ApiError)
    )
)]
pub async fn get_directors(
    State(state): State<AppState>,
    Query(query): Query<DirectorsQuery>,
) -> Result<Json<DirectorsResponse>, Error> {
    // Threshold validation belongs to this boundary; the core never sees
    // non-positive values
    if query.threshold <= 0 {
        return Err(Error::InvalidThreshold {
            value: query.threshold,
        });
    }

    // Counts can never reach u32::MAX, so saturating oversized thresholds
    // preserves the (empty) result
    let threshold = u32::try_from(query.threshold).unwrap_or(u32::MAX);
    let directors = state.service.get_directors(threshold).await?;

    Ok(Json(DirectorsResponse {
        directors: directors.as_ref().clone(),
    }))
}
