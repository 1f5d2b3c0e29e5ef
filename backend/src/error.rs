//! Application error handling
//!
//! Two error families live in this crate. `AppError` covers the
//! credential store and startup paths, where failures propagate to the
//! caller. The directory providers have their own richer error type
//! (`providers::DirectoryError`) which never escapes the service facade.

use thiserror::Error;

/// Errors surfaced by the credential store and configuration loading
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("API key file error: {0}")]
    Keys(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for store and startup operations
pub type AppResult<T> = Result<T, AppError>;
