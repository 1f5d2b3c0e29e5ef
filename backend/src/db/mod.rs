//! Database connection and pool management
//!
//! The backing store is a single local SQLite file. Connections come
//! from a pool, but no transaction ever spans more than one call into
//! this crate.

pub mod schema;

use crate::error::AppResult;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::{info, warn};

/// Create a SQLite connection pool, creating the database file if needed
pub async fn create_pool(database_url: &str, max_connections: u32) -> AppResult<SqlitePool> {
    let connect_options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(connect_options)
        .await?;

    info!(url = database_url, max = max_connections, "Database pool created");

    Ok(pool)
}

/// Initialize the credential store schema
///
/// Executes the five `CREATE TABLE` statements of [`schema::SCHEMA`].
/// Not idempotent: calling this against an already-initialized store
/// fails with the database's table-exists error. Invoke at most once per
/// fresh store.
pub async fn init_schema(pool: &SqlitePool) -> AppResult<()> {
    for statement in schema::SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    info!(tables = schema::SCHEMA.len(), "Credential store schema created");
    Ok(())
}

/// Check database health
pub async fn health_check(pool: &SqlitePool) -> AppResult<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(|e| {
            warn!("Database health check failed: {}", e);
            e.into()
        })
}
