//! Handler for per-mapping statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns access statistics for a short code without counting a view.
///
/// # Endpoint
///
/// `GET /stats/{code}`
///
/// # Response
///
/// ```json
/// {
///   "shortUrl": "http://localhost:8080/3f1c2a9b",
///   "originalUrl": "https://www.imdb.com",
///   "viewCount": 12,
///   "lastAccessed": "2024-06-01T12:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let record = state.mapping_service.get(&code).await?;

    Ok(Json(StatsResponse {
        short_url: state.mapping_service.short_url(&record.short_code),
        original_url: record.original_url,
        view_count: record.view_count,
        last_accessed: record.last_accessed,
    }))
}
