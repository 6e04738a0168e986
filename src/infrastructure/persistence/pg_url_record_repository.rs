//! PostgreSQL implementation of the URL record repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::errors::StoreError;
use crate::domain::repositories::UrlRecordRepository;

/// Row shape of the `url_mappings` table.
#[derive(Debug, sqlx::FromRow)]
struct UrlMappingRow {
    short_code: String,
    original_url: String,
    view_count: i64,
    last_accessed: Option<DateTime<Utc>>,
}

impl From<UrlMappingRow> for UrlRecord {
    fn from(row: UrlMappingRow) -> Self {
        UrlRecord::new(
            row.short_code,
            row.original_url,
            row.view_count,
            row.last_accessed,
        )
    }
}

/// PostgreSQL repository for URL records.
///
/// Uniqueness of short codes is enforced by the primary key; creation races
/// and concurrent touches are resolved inside single statements.
pub struct PgUrlRecordRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRecordRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRecordRepository for PgUrlRecordRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, StoreError> {
        let row = sqlx::query_as::<_, UrlMappingRow>(
            r#"
            SELECT short_code, original_url, view_count, last_accessed
            FROM url_mappings
            WHERE short_code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn insert_if_absent(&self, new_record: NewUrlRecord) -> Result<UrlRecord, StoreError> {
        // The no-op update on conflict makes RETURNING yield the stored row
        // instead of nothing when another request won the insert.
        let row = sqlx::query_as::<_, UrlMappingRow>(
            r#"
            INSERT INTO url_mappings (short_code, original_url)
            VALUES ($1, $2)
            ON CONFLICT (short_code) DO UPDATE SET short_code = url_mappings.short_code
            RETURNING short_code, original_url, view_count, last_accessed
            "#,
        )
        .bind(&new_record.short_code)
        .bind(&new_record.original_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn touch(
        &self,
        code: &str,
        accessed_at: DateTime<Utc>,
    ) -> Result<Option<UrlRecord>, StoreError> {
        let row = sqlx::query_as::<_, UrlMappingRow>(
            r#"
            UPDATE url_mappings
            SET view_count = view_count + 1,
                last_accessed = GREATEST(last_accessed, $2)
            WHERE short_code = $1
            RETURNING short_code, original_url, view_count, last_accessed
            "#,
        )
        .bind(code)
        .bind(accessed_at)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn delete(&self, code: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM url_mappings WHERE short_code = $1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM url_mappings")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
