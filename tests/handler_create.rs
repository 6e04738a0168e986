mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use url_mapper::utils::code_deriver::derive;

#[tokio::test]
async fn test_create_from_path() {
    let server = common::create_test_server();

    let response = server.get("/new/https://www.imdb.com").await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(
        body["shortUrl"],
        format!("http://localhost:8080/{}", derive("www.imdb.com"))
    );
    assert_eq!(body["originalUrl"], "https://www.imdb.com");
}

#[tokio::test]
async fn test_create_from_body() {
    let server = common::create_test_server();

    let response = server
        .post("/new")
        .json(&json!({ "url": "https://www.imdb.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["originalUrl"], "https://www.imdb.com");
}

#[tokio::test]
async fn test_create_is_idempotent_across_equivalent_spellings() {
    let server = common::create_test_server();

    let first: Value = server.get("/new/https://www.imdb.com").await.json();

    let second = server
        .post("/new")
        .json(&json!({ "url": "http:www.imdb.com/" }))
        .await;

    // Repeat creation still reports 201
    second.assert_status(StatusCode::CREATED);
    let second: Value = second.json();
    assert_eq!(second["shortUrl"], first["shortUrl"]);
    assert_eq!(second["originalUrl"], "https://www.imdb.com");
}

#[tokio::test]
async fn test_create_keeps_query_string() {
    let server = common::create_test_server();

    let response = server.get("/new/https://x.com/search?q=rust").await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["originalUrl"], "https://x.com/search?q=rust");
}

#[tokio::test]
async fn test_create_invalid_url() {
    let server = common::create_test_server();

    let response = server.get("/new/www.imdb.com").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "'www.imdb.com' is not a valid URL format");
}

#[tokio::test]
async fn test_create_unsupported_scheme() {
    let server = common::create_test_server();

    let response = server
        .post("/new")
        .json(&json!({ "url": "ftp://files.example.com" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_empty_body_url() {
    let server = common::create_test_server();

    let response = server.post("/new").json(&json!({ "url": "" })).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().starts_with("Invalid request"));
}

#[tokio::test]
async fn test_invalid_create_persists_nothing() {
    let server = common::create_test_server();

    server.get("/new/htt://www.imdb.com").await;

    let response = server
        .get(&format!("/{}", derive("htt://www.imdb.com")))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}
