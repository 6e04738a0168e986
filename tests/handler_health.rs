mod common;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::sync::Arc;
use url_mapper::domain::entities::{NewUrlRecord, UrlRecord};
use url_mapper::domain::errors::StoreError;
use url_mapper::domain::repositories::UrlRecordRepository;
use url_mapper::routes::app_router;

/// Store that is never reachable.
struct UnreachableStore;

fn unreachable() -> StoreError {
    StoreError::Corrupted {
        code: String::new(),
        reason: "store unreachable".to_string(),
    }
}

#[async_trait]
impl UrlRecordRepository for UnreachableStore {
    async fn find_by_code(&self, _code: &str) -> Result<Option<UrlRecord>, StoreError> {
        Err(unreachable())
    }

    async fn insert_if_absent(&self, _record: NewUrlRecord) -> Result<UrlRecord, StoreError> {
        Err(unreachable())
    }

    async fn touch(
        &self,
        _code: &str,
        _accessed_at: DateTime<Utc>,
    ) -> Result<Option<UrlRecord>, StoreError> {
        Err(unreachable())
    }

    async fn delete(&self, _code: &str) -> Result<bool, StoreError> {
        Err(unreachable())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Err(unreachable())
    }

    async fn health_check(&self) -> bool {
        false
    }
}

fn unreachable_server() -> TestServer {
    let state = common::create_test_state_with(Arc::new(UnreachableStore));
    TestServer::new(app_router(state)).unwrap()
}

#[tokio::test]
async fn test_health_ok() {
    let server = common::create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["store"]["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_degraded() {
    let server = unreachable_server();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["store"]["status"], "error");
}

#[tokio::test]
async fn test_store_failure_is_internal_error() {
    let server = unreachable_server();

    let response = server.get("/new/https://www.imdb.com").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], "Internal server error");
}
