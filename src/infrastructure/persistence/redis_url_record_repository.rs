//! Redis implementation of the URL record repository.
//!
//! Each record is a hash under `url_mapping:{code}` with the fields
//! `original_url`, `view_count` and `last_accessed` (Unix epoch milliseconds).
//! A set of all codes backs [`UrlRecordRepository::count`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use redis::{AsyncCommands, Client, Script, aio::ConnectionManager};
use std::collections::HashMap;
use tracing::info;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::errors::StoreError;
use crate::domain::repositories::UrlRecordRepository;

const KEY_PREFIX: &str = "url_mapping:";
const CODES_KEY: &str = "url_mapping_codes";

const FIELD_ORIGINAL_URL: &str = "original_url";
const FIELD_VIEW_COUNT: &str = "view_count";
const FIELD_LAST_ACCESSED: &str = "last_accessed";

/// KEYS[1] = record key, KEYS[2] = code set; ARGV[1] = url, ARGV[2] = code.
const INSERT_IF_ABSENT_SCRIPT: &str = r#"
if redis.call('EXISTS', KEYS[1]) == 0 then
    redis.call('HSET', KEYS[1], 'original_url', ARGV[1], 'view_count', 0)
    redis.call('SADD', KEYS[2], ARGV[2])
end
return redis.call('HGETALL', KEYS[1])
"#;

/// KEYS[1] = record key; ARGV[1] = access time in epoch milliseconds.
const TOUCH_SCRIPT: &str = r#"
if redis.call('EXISTS', KEYS[1]) == 0 then
    return {}
end
redis.call('HINCRBY', KEYS[1], 'view_count', 1)
local previous = tonumber(redis.call('HGET', KEYS[1], 'last_accessed') or '0')
if tonumber(ARGV[1]) > previous then
    redis.call('HSET', KEYS[1], 'last_accessed', ARGV[1])
end
return redis.call('HGETALL', KEYS[1])
"#;

/// Redis repository for URL records.
///
/// Creation and touches run as Lua scripts, so each one is atomic on the
/// server regardless of how many service instances share the database.
pub struct RedisUrlRecordRepository {
    connection: ConnectionManager,
    insert_script: Script,
    touch_script: Script,
}

impl RedisUrlRecordRepository {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Redis`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str) -> Result<Self, StoreError> {
        let client = Client::open(redis_url)?;
        let connection = ConnectionManager::new(client).await?;

        let mut test_conn = connection.clone();
        test_conn.ping::<()>().await?;

        info!("Connected to Redis store");

        Ok(Self {
            connection,
            insert_script: Script::new(INSERT_IF_ABSENT_SCRIPT),
            touch_script: Script::new(TOUCH_SCRIPT),
        })
    }

    fn build_key(code: &str) -> String {
        format!("{}{}", KEY_PREFIX, code)
    }
}

/// Decodes a hash returned by HGETALL. An empty hash means "no record".
fn decode_record(
    code: &str,
    mut fields: HashMap<String, String>,
) -> Result<Option<UrlRecord>, StoreError> {
    if fields.is_empty() {
        return Ok(None);
    }

    let corrupted = |reason: String| StoreError::Corrupted {
        code: code.to_string(),
        reason,
    };

    let original_url = fields
        .remove(FIELD_ORIGINAL_URL)
        .ok_or_else(|| corrupted(format!("missing field '{}'", FIELD_ORIGINAL_URL)))?;

    let view_count = match fields.get(FIELD_VIEW_COUNT) {
        Some(raw) => raw
            .parse::<i64>()
            .map_err(|e| corrupted(format!("invalid view_count '{}': {}", raw, e)))?,
        None => 0,
    };

    let last_accessed = match fields.get(FIELD_LAST_ACCESSED) {
        Some(raw) => {
            let millis = raw
                .parse::<i64>()
                .map_err(|e| corrupted(format!("invalid last_accessed '{}': {}", raw, e)))?;
            let timestamp = DateTime::<Utc>::from_timestamp_millis(millis)
                .ok_or_else(|| corrupted(format!("last_accessed out of range: {}", millis)))?;
            Some(timestamp)
        }
        None => None,
    };

    Ok(Some(UrlRecord::new(
        code.to_string(),
        original_url,
        view_count,
        last_accessed,
    )))
}

#[async_trait]
impl UrlRecordRepository for RedisUrlRecordRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, StoreError> {
        let mut conn = self.connection.clone();
        let fields: HashMap<String, String> = conn.hgetall(Self::build_key(code)).await?;

        decode_record(code, fields)
    }

    async fn insert_if_absent(&self, new_record: NewUrlRecord) -> Result<UrlRecord, StoreError> {
        let mut conn = self.connection.clone();
        let code = new_record.short_code;

        let fields: HashMap<String, String> = self
            .insert_script
            .key(Self::build_key(&code))
            .key(CODES_KEY)
            .arg(&new_record.original_url)
            .arg(&code)
            .invoke_async(&mut conn)
            .await?;

        decode_record(&code, fields)?.ok_or_else(|| StoreError::Corrupted {
            code: code.clone(),
            reason: "record missing right after insert".to_string(),
        })
    }

    async fn touch(
        &self,
        code: &str,
        accessed_at: DateTime<Utc>,
    ) -> Result<Option<UrlRecord>, StoreError> {
        let mut conn = self.connection.clone();

        let fields: HashMap<String, String> = self
            .touch_script
            .key(Self::build_key(code))
            .arg(accessed_at.timestamp_millis())
            .invoke_async(&mut conn)
            .await?;

        decode_record(code, fields)
    }

    async fn delete(&self, code: &str) -> Result<bool, StoreError> {
        let mut conn = self.connection.clone();

        let (deleted, _): (i64, i64) = redis::pipe()
            .atomic()
            .del(Self::build_key(code))
            .srem(CODES_KEY, code)
            .query_async(&mut conn)
            .await?;

        Ok(deleted > 0)
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let mut conn = self.connection.clone();
        let count: i64 = conn.scard(CODES_KEY).await?;
        Ok(count)
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.connection.clone();
        conn.ping::<()>().await.is_ok()
    }
}
