use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod repositories;
pub mod target;

pub type DbPool = sqlx::PgPool;

/// Open the probe's single connection to `database_url`.
///
/// The pool is capped at one connection, and `acquire_timeout` bounds how
/// long establishing it may take.
pub async fn connect(database_url: &str, acquire_timeout: Duration) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(acquire_timeout)
        .connect(database_url)
        .await
}

/// Verify the connection is usable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Full server version banner as reported by `SELECT version()`.
pub async fn server_version(pool: &DbPool) -> Result<String, sqlx::Error> {
    let (version,): (String,) = sqlx::query_as("SELECT version()").fetch_one(pool).await?;
    tracing::debug!(version = %version, "Fetched server version");
    Ok(version)
}
