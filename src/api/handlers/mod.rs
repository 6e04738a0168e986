//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod create;
pub mod health;
pub mod redirect;
pub mod stats;

pub use create::{create_from_body_handler, create_from_path_handler};
pub use health::health_handler;
pub use redirect::redirect_handler;
pub use stats::stats_handler;
