//! URL record entity representing a short code to URL mapping.

use chrono::{DateTime, Utc};

/// A persisted mapping between a short code and the URL it redirects to.
///
/// The short code is derived from the canonical form of `original_url`, so
/// equivalent URLs always resolve to the same record. `original_url` keeps the
/// exact string the caller submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub short_code: String,
    pub original_url: String,
    pub view_count: i64,
    pub last_accessed: Option<DateTime<Utc>>,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(
        short_code: String,
        original_url: String,
        view_count: i64,
        last_accessed: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            short_code,
            original_url,
            view_count,
            last_accessed,
        }
    }

    /// Returns true if the mapping has been followed at least once.
    pub fn was_accessed(&self) -> bool {
        self.last_accessed.is_some()
    }

    /// Applies one access event at `accessed_at`.
    ///
    /// `last_accessed` never moves backwards, even if `accessed_at` is older
    /// than the stored value.
    pub fn record_access(&mut self, accessed_at: DateTime<Utc>) {
        self.view_count += 1;
        self.last_accessed = Some(match self.last_accessed {
            Some(previous) if previous > accessed_at => previous,
            _ => accessed_at,
        });
    }
}

/// Input data for storing a new mapping.
///
/// New mappings always start with zero views and no access time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlRecord {
    pub short_code: String,
    pub original_url: String,
}

impl NewUrlRecord {
    /// Converts the input into the record that gets persisted.
    pub fn into_record(self) -> UrlRecord {
        UrlRecord::new(self.short_code, self.original_url, 0, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn new_record() -> UrlRecord {
        NewUrlRecord {
            short_code: "9a2c41f0".to_string(),
            original_url: "https://www.imdb.com".to_string(),
        }
        .into_record()
    }

    #[test]
    fn test_new_record_starts_untouched() {
        let record = new_record();

        assert_eq!(record.short_code, "9a2c41f0");
        assert_eq!(record.original_url, "https://www.imdb.com");
        assert_eq!(record.view_count, 0);
        assert!(record.last_accessed.is_none());
        assert!(!record.was_accessed());
    }

    #[test]
    fn test_record_access_increments_and_stamps() {
        let mut record = new_record();
        let now = Utc::now();

        record.record_access(now);

        assert_eq!(record.view_count, 1);
        assert_eq!(record.last_accessed, Some(now));
        assert!(record.was_accessed());
    }

    #[test]
    fn test_record_access_never_moves_backwards() {
        let mut record = new_record();
        let now = Utc::now();

        record.record_access(now);
        record.record_access(now - Duration::seconds(30));

        assert_eq!(record.view_count, 2);
        assert_eq!(record.last_accessed, Some(now));
    }
}
