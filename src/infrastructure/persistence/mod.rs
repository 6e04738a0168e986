//! Mapping store implementations.
//!
//! Concrete implementations of [`crate::domain::repositories::UrlRecordRepository`].
//!
//! # Repositories
//!
//! - [`PgUrlRecordRepository`] - PostgreSQL via SQLx
//! - [`RedisUrlRecordRepository`] - Redis hashes with Lua scripts for atomic writes
//! - [`InMemoryUrlRecordRepository`] - Process-local, for development and tests

pub mod memory_url_record_repository;
pub mod pg_url_record_repository;
pub mod redis_url_record_repository;

pub use memory_url_record_repository::InMemoryUrlRecordRepository;
pub use pg_url_record_repository::PgUrlRecordRepository;
pub use redis_url_record_repository::RedisUrlRecordRepository;
