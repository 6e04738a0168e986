#![allow(dead_code)]

use axum_test::TestServer;
use std::sync::Arc;
use url_mapper::domain::repositories::UrlRecordRepository;
use url_mapper::infrastructure::persistence::InMemoryUrlRecordRepository;
use url_mapper::routes::app_router;
use url_mapper::state::AppState;

pub const BASE_URL: &str = "http://localhost:8080/";

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(InMemoryUrlRecordRepository::new()), BASE_URL)
}

pub fn create_test_state_with(repository: Arc<dyn UrlRecordRepository>) -> AppState {
    AppState::new(repository, BASE_URL)
}

pub fn create_test_server() -> TestServer {
    TestServer::new(app_router(create_test_state())).unwrap()
}

/// Short code the app assigns to `url`, as seen in the returned `shortUrl`.
pub fn code_of(short_url: &str) -> &str {
    short_url.rsplit('/').next().unwrap()
}
