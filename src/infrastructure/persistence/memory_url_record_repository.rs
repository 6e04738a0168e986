//! In-memory implementation of the URL record repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::errors::StoreError;
use crate::domain::repositories::UrlRecordRepository;

/// Process-local repository backed by a sharded concurrent map.
///
/// Entry guards hold the shard lock for the duration of a write, which makes
/// insert-if-absent and touch atomic per code. Nothing survives a restart, so
/// this is meant for development and tests.
#[derive(Debug, Default)]
pub struct InMemoryUrlRecordRepository {
    storage: DashMap<String, UrlRecord>,
}

impl InMemoryUrlRecordRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UrlRecordRepository for InMemoryUrlRecordRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, StoreError> {
        Ok(self.storage.get(code).map(|entry| entry.value().clone()))
    }

    async fn insert_if_absent(&self, new_record: NewUrlRecord) -> Result<UrlRecord, StoreError> {
        let entry = self
            .storage
            .entry(new_record.short_code.clone())
            .or_insert_with(|| new_record.into_record());

        Ok(entry.value().clone())
    }

    async fn touch(
        &self,
        code: &str,
        accessed_at: DateTime<Utc>,
    ) -> Result<Option<UrlRecord>, StoreError> {
        Ok(self.storage.get_mut(code).map(|mut entry| {
            entry.value_mut().record_access(accessed_at);
            entry.value().clone()
        }))
    }

    async fn delete(&self, code: &str) -> Result<bool, StoreError> {
        Ok(self.storage.remove(code).is_some())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Ok(self.storage.len() as i64)
    }

    async fn health_check(&self) -> bool {
        true
    }
}
