//! Utility functions for URL processing and code derivation.
//!
//! - [`url_canonicalizer`] - URL validation and canonical form
//! - [`code_deriver`] - Deterministic short code hashing

pub mod code_deriver;
pub mod url_canonicalizer;
