mod common;

use axum::http::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn test_redirect_success() {
    let server = common::create_test_server();

    let created: Value = server.get("/new/https://www.imdb.com").await.json();
    let code = common::code_of(created["shortUrl"].as_str().unwrap()).to_string();

    let response = server.get(&format!("/{}", code)).await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://www.imdb.com");
}

#[tokio::test]
async fn test_redirect_uses_first_stored_spelling() {
    let server = common::create_test_server();

    let created: Value = server.get("/new/http:www.imdb.com").await.json();
    server.get("/new/https://www.imdb.com/").await;
    let code = common::code_of(created["shortUrl"].as_str().unwrap()).to_string();

    let response = server.get(&format!("/{}", code)).await;

    assert_eq!(response.header("location"), "http:www.imdb.com");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let server = common::create_test_server();

    let response = server.get("/doesnotexist").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "'doesnotexist' is not mapped to an existing URL");
}

#[tokio::test]
async fn test_redirect_counts_views() {
    let server = common::create_test_server();

    let created: Value = server.get("/new/https://www.imdb.com").await.json();
    let code = common::code_of(created["shortUrl"].as_str().unwrap()).to_string();

    for _ in 0..3 {
        server
            .get(&format!("/{}", code))
            .await
            .assert_status(StatusCode::FOUND);
    }

    let stats: Value = server.get(&format!("/stats/{}", code)).await.json();
    assert_eq!(stats["viewCount"], 3);
    assert!(stats["lastAccessed"].is_string());

    // Re-creating does not reset statistics
    server.get("/new/https://www.imdb.com").await;
    let stats: Value = server.get(&format!("/stats/{}", code)).await.json();
    assert_eq!(stats["viewCount"], 3);
}
