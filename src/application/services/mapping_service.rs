//! URL mapping creation, lookup and access tracking.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::errors::MappingError;
use crate::domain::repositories::UrlRecordRepository;
use crate::utils::code_deriver::derive;
use crate::utils::url_canonicalizer::{canonicalize, validate};

/// A mapping as returned to callers of [`MappingService::create_or_get`].
///
/// `short_url` is the short code prefixed with the configured base URL, ready to
/// be used as a redirect target. Only `record` is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub short_url: String,
    pub record: UrlRecord,
}

/// Service that maps long URLs to deterministic short codes.
///
/// Validation, canonicalization and code derivation happen here; all shared
/// state lives in the repository, which is responsible for atomicity of
/// creation and access tracking.
pub struct MappingService<R: UrlRecordRepository + ?Sized> {
    repository: Arc<R>,
    base_url: String,
}

impl<R: UrlRecordRepository + ?Sized> MappingService<R> {
    /// Creates a new mapping service.
    ///
    /// `base_url` is prepended to short codes on the return path, e.g.
    /// `http://localhost:8080/`.
    pub fn new(repository: Arc<R>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            repository,
            base_url,
        }
    }

    /// Returns the mapping for `raw_url`, creating it on first use.
    ///
    /// # Idempotence
    ///
    /// URLs that canonicalize identically share one record. A repeat call never
    /// modifies the stored record; the view count and last access time survive.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::InvalidUrlFormat`] if `raw_url` is not a valid
    /// http(s) URL. Nothing is persisted in that case.
    ///
    /// Returns [`MappingError::Store`] if the repository fails.
    pub async fn create_or_get(&self, raw_url: &str) -> Result<Mapping, MappingError> {
        if !validate(raw_url) {
            warn!(url = %raw_url, "Rejected URL mapping: invalid URL format");
            return Err(MappingError::InvalidUrlFormat(raw_url.to_string()));
        }

        let code = derive(&canonicalize(raw_url));

        let record = match self.repository.find_by_code(&code).await? {
            Some(existing) => {
                debug!(code = %code, "URL mapping already exists");
                existing
            }
            None => {
                let new_record = NewUrlRecord {
                    short_code: code.clone(),
                    original_url: raw_url.to_string(),
                };
                let stored = self.repository.insert_if_absent(new_record).await?;
                info!(code = %code, url = %raw_url, "URL mapping created");
                stored
            }
        };

        Ok(Mapping {
            short_url: self.short_url(&record.short_code),
            record,
        })
    }

    /// Retrieves a record by its raw short code.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::MappingNotFound`] if no record matches.
    /// Returns [`MappingError::Store`] if the repository fails.
    pub async fn get(&self, code: &str) -> Result<UrlRecord, MappingError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| MappingError::MappingNotFound(code.to_string()))
    }

    /// Records one access to `record` and returns the updated state.
    ///
    /// Must be called exactly once per redirect served.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::MappingNotFound`] if the record was removed
    /// after it was fetched.
    /// Returns [`MappingError::Store`] if the repository fails.
    pub async fn touch(&self, record: &UrlRecord) -> Result<UrlRecord, MappingError> {
        let code = &record.short_code;
        let updated = self
            .repository
            .touch(code, Utc::now())
            .await?
            .ok_or_else(|| MappingError::MappingNotFound(code.clone()))?;

        debug!(code = %code, views = updated.view_count, "URL mapping touched");
        Ok(updated)
    }

    /// Removes the mapping for `code`.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::MappingNotFound`] if no record matches.
    /// Returns [`MappingError::Store`] if the repository fails.
    pub async fn remove(&self, code: &str) -> Result<(), MappingError> {
        if !self.repository.delete(code).await? {
            return Err(MappingError::MappingNotFound(code.to_string()));
        }

        info!(code = %code, "URL mapping removed");
        Ok(())
    }

    /// Total number of stored mappings.
    pub async fn count(&self) -> Result<i64, MappingError> {
        Ok(self.repository.count().await?)
    }

    /// Builds the public short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }

    /// Reports whether the underlying store is reachable.
    pub async fn store_healthy(&self) -> bool {
        self.repository.health_check().await
    }
}
