//! HTTP server initialization and runtime setup.
//!
//! Handles store connection, migrations, and the Axum server lifecycle.

use crate::config::{Config, StoreBackend};
use crate::domain::repositories::UrlRecordRepository;
use crate::infrastructure::persistence::{
    InMemoryUrlRecordRepository, PgUrlRecordRepository, RedisUrlRecordRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Connects the store selected by `config.store_backend`.
///
/// For Postgres this builds the pool from the `DB_*` settings and applies the
/// embedded migrations.
///
/// # Errors
///
/// Returns an error if the store URL is missing, the connection fails, or a
/// migration fails.
pub async fn connect_store(config: &Config) -> Result<Arc<dyn UrlRecordRepository>> {
    match config.store_backend {
        StoreBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is not configured")?;

            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .idle_timeout(Duration::from_secs(config.db_idle_timeout))
                .max_lifetime(Duration::from_secs(config.db_max_lifetime))
                .connect(database_url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run migrations")?;

            Ok(Arc::new(PgUrlRecordRepository::new(Arc::new(pool))))
        }
        StoreBackend::Redis => {
            let redis_url = config
                .redis_url
                .as_deref()
                .context("REDIS_URL is not configured")?;

            let repository = RedisUrlRecordRepository::connect(redis_url)
                .await
                .context("Failed to connect to Redis")?;
            tracing::info!("Connected to Redis");

            Ok(Arc::new(repository))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store");
            Ok(Arc::new(InMemoryUrlRecordRepository::new()))
        }
    }
}

/// Runs the HTTP server with the given configuration.
///
/// Serves until Ctrl-C or SIGTERM, then drains in-flight requests.
///
/// # Errors
///
/// Returns an error if:
/// - Store connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = connect_store(&config).await?;

    let state = AppState::new(repository, config.base_url.clone());

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
