//! Domain layer containing business entities and store contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`errors`] - Domain and store error kinds
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on the presentation layer
//! - Repository traits define contracts implemented by the infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])

pub mod entities;
pub mod errors;
pub mod repositories;

pub use errors::{MappingError, StoreError};
