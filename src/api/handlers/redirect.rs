//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Look up the record for `code`
/// 2. Record the access (view count and last access time)
/// 3. Return 302 Found with `Location` set to the original URL
///
/// The access is recorded before the response is produced, so a successful
/// redirect is always counted.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let record = state.mapping_service.get(&code).await?;
    let record = state.mapping_service.touch(&record).await?;

    debug!(code = %code, target = %record.original_url, "Redirecting");

    let location = location_header(&record.original_url)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Builds the `Location` value for a stored URL.
///
/// The stored string is used verbatim when it is a legal header value.
/// Otherwise (non-ASCII hosts or paths) the parsed URL's ASCII serialization
/// is used, which punycodes the host and percent-encodes the rest.
fn location_header(original_url: &str) -> Result<HeaderValue, AppError> {
    if let Ok(value) = HeaderValue::from_str(original_url) {
        return Ok(value);
    }

    url::Url::parse(original_url)
        .ok()
        .and_then(|parsed| HeaderValue::from_str(parsed.as_str()).ok())
        .ok_or_else(|| AppError::internal("Stored URL cannot be used as a redirect target"))
}
