//! Account service for registration and authentication
//!
//! A thin facade over [`UserRepository`]. Registration inserts
//! unconditionally: checking availability first is the caller's job, and
//! two registrations racing on the same username can both land. Store
//! failures propagate to the caller; nothing here retries.

use crate::error::AppError;
use crate::repositories::UserRepository;
use sqlx::SqlitePool;
use tracing::info;

/// Account service for credential operations
pub struct AccountService;

impl AccountService {
    /// Register a new user
    ///
    /// Inserts the credential pair as given. Callers that want unique
    /// usernames must check [`Self::is_username_taken`] first.
    pub async fn register(
        pool: &SqlitePool,
        username: &str,
        password: &str,
    ) -> Result<(), AppError> {
        UserRepository::insert(pool, username, password)
            .await
            .map_err(AppError::Internal)?;

        info!(username, "User registered");
        Ok(())
    }

    /// Authenticate a (username, password) pair
    ///
    /// True when any stored row matches exactly.
    pub async fn authenticate(
        pool: &SqlitePool,
        username: &str,
        password: &str,
    ) -> Result<bool, AppError> {
        UserRepository::authenticate(pool, username, password)
            .await
            .map_err(AppError::Internal)
    }

    /// Check whether a username is already in use
    pub async fn is_username_taken(pool: &SqlitePool, username: &str) -> Result<bool, AppError> {
        UserRepository::username_taken(pool, username)
            .await
            .map_err(AppError::Internal)
    }
}
