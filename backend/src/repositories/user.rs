//! User repository for the credential store
//!
//! Rows are (username, password) pairs, both plain text. The store does
//! not enforce username uniqueness and comparisons happen in application
//! code as a linear scan over all rows; both are preserved contract
//! behavior. Password handling is plaintext equality — a known security
//! gap the store deliberately does not paper over.

use anyhow::Result;
use sqlx::SqlitePool;

/// Credential row from the users table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub username: String,
    pub password: String,
}

/// User repository for database operations
pub struct UserRepository;

impl UserRepository {
    /// Insert a credential row unconditionally
    ///
    /// Does not check whether the username is already taken; callers
    /// that care must ask [`Self::username_taken`] first. Two concurrent
    /// registrations of the same name can both land.
    pub async fn insert(pool: &SqlitePool, username: &str, password: &str) -> Result<()> {
        sqlx::query("INSERT INTO users (username, password) VALUES (?, ?)")
            .bind(username)
            .bind(password)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Check a (username, password) pair against every stored row
    ///
    /// Returns true when any row matches exactly (case-sensitive). An
    /// empty table authenticates nobody. O(n) in registered users.
    pub async fn authenticate(pool: &SqlitePool, username: &str, password: &str) -> Result<bool> {
        let rows = sqlx::query_as::<_, UserRecord>("SELECT username, password FROM users")
            .fetch_all(pool)
            .await?;

        Ok(rows
            .iter()
            .any(|row| row.username == username && row.password == password))
    }

    /// Check whether any stored row already uses this username
    pub async fn username_taken(pool: &SqlitePool, username: &str) -> Result<bool> {
        let names: Vec<String> = sqlx::query_scalar("SELECT username FROM users")
            .fetch_all(pool)
            .await?;

        Ok(names.iter().any(|name| name == username))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn fresh_store() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory pool");
        db::init_schema(&pool).await.expect("schema");
        pool
    }

    #[tokio::test]
    async fn insert_then_authenticate_round_trip() {
        let pool = fresh_store().await;

        UserRepository::insert(&pool, "alice", "hunter2").await.unwrap();

        assert!(UserRepository::authenticate(&pool, "alice", "hunter2").await.unwrap());
        assert!(!UserRepository::authenticate(&pool, "alice", "wrong").await.unwrap());
        assert!(!UserRepository::authenticate(&pool, "bob", "hunter2").await.unwrap());
    }

    #[tokio::test]
    async fn authentication_is_case_sensitive() {
        let pool = fresh_store().await;

        UserRepository::insert(&pool, "Alice", "Secret").await.unwrap();

        assert!(!UserRepository::authenticate(&pool, "alice", "Secret").await.unwrap());
        assert!(!UserRepository::authenticate(&pool, "Alice", "secret").await.unwrap());
        assert!(UserRepository::authenticate(&pool, "Alice", "Secret").await.unwrap());
    }

    #[tokio::test]
    async fn empty_table_authenticates_nobody() {
        let pool = fresh_store().await;
        assert!(!UserRepository::authenticate(&pool, "anyone", "anything").await.unwrap());
    }

    #[tokio::test]
    async fn username_taken_flips_after_insert() {
        let pool = fresh_store().await;

        assert!(!UserRepository::username_taken(&pool, "carol").await.unwrap());
        UserRepository::insert(&pool, "carol", "pw").await.unwrap();
        assert!(UserRepository::username_taken(&pool, "carol").await.unwrap());
    }

    #[tokio::test]
    async fn duplicate_usernames_are_tolerated() {
        let pool = fresh_store().await;

        UserRepository::insert(&pool, "dave", "first").await.unwrap();
        // No uniqueness constraint: the second insert must not error.
        UserRepository::insert(&pool, "dave", "second").await.unwrap();

        // Either stored password authenticates.
        assert!(UserRepository::authenticate(&pool, "dave", "first").await.unwrap());
        assert!(UserRepository::authenticate(&pool, "dave", "second").await.unwrap());
    }
}
