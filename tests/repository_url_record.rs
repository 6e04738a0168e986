use chrono::{Duration, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use url_mapper::domain::entities::NewUrlRecord;
use url_mapper::domain::repositories::UrlRecordRepository;
use url_mapper::infrastructure::persistence::PgUrlRecordRepository;

fn new_record(code: &str, url: &str) -> NewUrlRecord {
    NewUrlRecord {
        short_code: code.to_string(),
        original_url: url.to_string(),
    }
}

#[sqlx::test]
async fn test_insert_and_find(pool: PgPool) {
    let repo = PgUrlRecordRepository::new(Arc::new(pool));

    let stored = repo
        .insert_if_absent(new_record("abc12345", "https://example.com"))
        .await
        .unwrap();
    let found = repo.find_by_code("abc12345").await.unwrap().unwrap();

    assert_eq!(stored, found);
    assert_eq!(found.view_count, 0);
    assert!(found.last_accessed.is_none());
}

#[sqlx::test]
async fn test_find_not_found(pool: PgPool) {
    let repo = PgUrlRecordRepository::new(Arc::new(pool));

    assert!(repo.find_by_code("notfound").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_insert_if_absent_keeps_existing(pool: PgPool) {
    let repo = PgUrlRecordRepository::new(Arc::new(pool));

    repo.insert_if_absent(new_record("abc12345", "https://example.com"))
        .await
        .unwrap();
    repo.touch("abc12345", Utc::now()).await.unwrap();

    let second = repo
        .insert_if_absent(new_record("abc12345", "http:example.com"))
        .await
        .unwrap();

    assert_eq!(second.original_url, "https://example.com");
    assert_eq!(second.view_count, 1);
}

#[sqlx::test]
async fn test_touch_increments_and_keeps_latest(pool: PgPool) {
    let repo = PgUrlRecordRepository::new(Arc::new(pool));
    let now = Utc::now();

    repo.insert_if_absent(new_record("abc12345", "https://example.com"))
        .await
        .unwrap();
    repo.touch("abc12345", now).await.unwrap();
    let record = repo
        .touch("abc12345", now - Duration::seconds(10))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(record.view_count, 2);
    let last = record.last_accessed.unwrap();
    // Postgres stores microseconds
    assert!((last - now).num_milliseconds().abs() < 1);
}

#[sqlx::test]
async fn test_touch_missing(pool: PgPool) {
    let repo = PgUrlRecordRepository::new(Arc::new(pool));

    assert!(repo.touch("missing", Utc::now()).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_delete_and_count(pool: PgPool) {
    let repo = PgUrlRecordRepository::new(Arc::new(pool));

    repo.insert_if_absent(new_record("a", "https://a.com"))
        .await
        .unwrap();
    repo.insert_if_absent(new_record("b", "https://b.com"))
        .await
        .unwrap();
    assert_eq!(repo.count().await.unwrap(), 2);

    assert!(repo.delete("a").await.unwrap());
    assert!(!repo.delete("a").await.unwrap());
    assert_eq!(repo.count().await.unwrap(), 1);
    assert!(repo.health_check().await);
}
