//! Repository trait for URL record storage.

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::errors::StoreError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Key-value store of URL records, keyed uniquely by short code.
///
/// The store is the only shared mutable state in the service. Every write that
/// can race with another request must be atomic at this level: the mapping
/// service never does read-modify-write on its own.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRecordRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::RedisUrlRecordRepository`] - Redis hashes
/// - [`crate::infrastructure::persistence::InMemoryUrlRecordRepository`] - process-local map
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url_record.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRecordRepository: Send + Sync {
    /// Finds a record by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlRecord))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend fails.
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, StoreError>;

    /// Stores a record unless one already exists for the same short code.
    ///
    /// Returns the record that is stored after the call. When two callers race
    /// on the same code, both receive the winner's record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend fails.
    async fn insert_if_absent(&self, new_record: NewUrlRecord) -> Result<UrlRecord, StoreError>;

    /// Atomically increments the view count and sets the last access time.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlRecord))` with the updated state
    /// - `Ok(None)` if no record exists for `code`
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend fails.
    async fn touch(
        &self,
        code: &str,
        accessed_at: DateTime<Utc>,
    ) -> Result<Option<UrlRecord>, StoreError>;

    /// Removes a record. Administrative use only.
    ///
    /// Returns `Ok(true)` if the record existed.
    async fn delete(&self, code: &str) -> Result<bool, StoreError>;

    /// Counts stored records.
    async fn count(&self) -> Result<i64, StoreError>;

    /// Checks whether the backend is reachable.
    async fn health_check(&self) -> bool;
}
