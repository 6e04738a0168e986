//! Core domain entities.
//!
//! Entities follow the "New Type" pattern with a separate struct for creation:
//! [`NewUrlRecord`] carries the caller-supplied fields and [`UrlRecord`] is the
//! stored state including access tracking.

pub mod url_record;

pub use url_record::{NewUrlRecord, UrlRecord};
