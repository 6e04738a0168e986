//! Mapping API route configuration.

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{
    create_from_body_handler, create_from_path_handler, redirect_handler, stats_handler,
};
use crate::state::AppState;

/// Routes of the mapping API.
///
/// # Endpoints
///
/// - `GET  /new/{*url}`    - Create a mapping from a URL in the path
/// - `POST /new`           - Create a mapping from a JSON body
/// - `GET  /stats/{code}`  - Access statistics for a code
/// - `GET  /{code}`        - Redirect to the original URL
pub fn mapping_routes() -> Router<AppState> {
    Router::new()
        .route("/new", post(create_from_body_handler))
        .route("/new/{*url}", get(create_from_path_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/{code}", get(redirect_handler))
}
