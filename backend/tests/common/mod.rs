//! Common test utilities for integration tests
//!
//! Provides a fresh, fully initialized in-memory credential store per
//! test.

use food_finder_backend::{db, telemetry};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Test application wrapper around a fresh credential store
pub struct TestApp {
    pub pool: SqlitePool,
}

impl TestApp {
    /// Create a new in-memory store with the schema applied
    ///
    /// A single connection keeps the in-memory database alive and shared
    /// for the whole test.
    pub async fn new() -> Self {
        telemetry::init();

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create in-memory database");

        db::init_schema(&pool).await.expect("Failed to apply schema");

        Self { pool }
    }
}
