//! Domain error types for the mapping engine and its store.

use thiserror::Error;

/// Failures raised by a [`crate::domain::repositories::UrlRecordRepository`].
///
/// The mapping service never inspects these; they are passed through to the
/// caller unchanged.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("stored record for '{code}' is corrupted: {reason}")]
    Corrupted { code: String, reason: String },
}

/// Outcomes of the mapping service that end a request.
#[derive(Debug, Error)]
pub enum MappingError {
    /// The submitted string is not a well-formed http(s) URL.
    #[error("'{0}' is not a valid URL format")]
    InvalidUrlFormat(String),

    /// No mapping exists for the requested short code.
    #[error("'{0}' is not mapped to an existing URL")]
    MappingNotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_message() {
        let err = MappingError::InvalidUrlFormat("htt://www.imdb.com".to_string());
        assert_eq!(
            err.to_string(),
            "'htt://www.imdb.com' is not a valid URL format"
        );
    }

    #[test]
    fn test_not_found_message() {
        let err = MappingError::MappingNotFound("doesNotExist".to_string());
        assert_eq!(
            err.to_string(),
            "'doesNotExist' is not mapped to an existing URL"
        );
    }

    #[test]
    fn test_store_error_is_transparent() {
        let err = MappingError::from(StoreError::Corrupted {
            code: "abc".to_string(),
            reason: "missing original_url".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "stored record for 'abc' is corrupted: missing original_url"
        );
    }
}
