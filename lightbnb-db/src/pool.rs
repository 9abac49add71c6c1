//! Connection pool lifecycle
//!
//! One pool per process: build it at startup with [`connect`], hand
//! `&PgPool` to each repository, and call [`PgPool::close`] before exit.
//! Operations check a connection out for a single statement, so the pool
//! size is the only concurrency limit.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::config::{DbConfig, DEFAULT_MAX_CONNECTIONS};

/// Open a pool with the default size.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Open a pool holding at most `max_connections` connections.
///
/// Fails if the URL is malformed or the first connection cannot be made.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Open the pool described by `config`.
///
/// The URL is never logged; it usually carries credentials.
pub async fn connect(config: &DbConfig) -> Result<PgPool, sqlx::Error> {
    let pool = create_pool_with_options(&config.database_url, config.max_connections).await?;
    info!(
        max_connections = config.max_connections,
        "database pool ready"
    );
    Ok(pool)
}
