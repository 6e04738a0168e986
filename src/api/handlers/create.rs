//! Handlers for mapping creation.

use axum::{
    Json,
    extract::{Path, RawQuery, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::create::{CreateMappingRequest, MappingResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or returns the existing) mapping for a URL embedded in the path.
///
/// # Endpoint
///
/// `GET /new/{*url}`
///
/// Everything after `/new/` is taken as the URL. A query string on the
/// request belongs to the target URL and is re-attached, so
/// `/new/https://x.com/search?q=rust` maps `https://x.com/search?q=rust`.
///
/// # Response
///
/// Always `201 Created`, whether the mapping is new or not:
///
/// ```json
/// {
///   "shortUrl": "http://localhost:8080/3f1c2a9b",
///   "originalUrl": "https://www.imdb.com"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is not a valid http(s) URL.
pub async fn create_from_path_handler(
    State(state): State<AppState>,
    Path(url): Path<String>,
    RawQuery(query): RawQuery,
) -> Result<(StatusCode, Json<MappingResponse>), AppError> {
    let raw_url = match query {
        Some(query) => format!("{}?{}", url, query),
        None => url,
    };

    create(&state, &raw_url).await
}

/// Creates (or returns the existing) mapping for a URL in a JSON body.
///
/// # Endpoint
///
/// `POST /new`
///
/// # Request Body
///
/// ```json
/// { "url": "https://www.imdb.com" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body fails validation or the URL is not a
/// valid http(s) URL.
pub async fn create_from_body_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateMappingRequest>,
) -> Result<(StatusCode, Json<MappingResponse>), AppError> {
    payload.validate()?;

    create(&state, &payload.url).await
}

async fn create(
    state: &AppState,
    raw_url: &str,
) -> Result<(StatusCode, Json<MappingResponse>), AppError> {
    let mapping = state.mapping_service.create_or_get(raw_url).await?;

    Ok((StatusCode::CREATED, Json(mapping.into())))
}
