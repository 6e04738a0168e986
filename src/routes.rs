//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /new/{*url}`, `POST /new` - Create or fetch a mapping
//! - `GET  /stats/{code}`            - Access statistics
//! - `GET  /health`                  - Store health check
//! - `GET  /{code}`                  - Short link redirect
//!
//! Paths are not normalized: the remainder of `/new/...` is the caller's URL
//! and a trailing slash there is significant to canonicalization.

use axum::Router;
use axum::routing::get;

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::mapping_routes())
        .with_state(state)
        .layer(tracing::layer())
}
