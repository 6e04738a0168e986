//! Repository trait definitions for the domain layer.
//!
//! The mapping store is abstracted behind [`UrlRecordRepository`] so the
//! mapping service stays independent of the persistence backend.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod url_record_repository;

pub use url_record_repository::UrlRecordRepository;

#[cfg(test)]
pub use url_record_repository::MockUrlRecordRepository;
