//! DTOs for per-mapping statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Access statistics for a single short code.
///
/// `last_accessed` serializes as `null` until the first redirect.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub short_url: String,
    pub original_url: String,
    pub view_count: i64,
    pub last_accessed: Option<DateTime<Utc>>,
}
