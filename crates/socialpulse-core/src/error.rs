//! Error types for the core library.

use thiserror::Error;

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Database operation failed (storage unavailable, schema failure).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing failed.
    #[error("Password hashing error: {0}")]
    Hash(#[from] crate::account::hashing::HashError),

    /// Registration attempted with a username that already exists.
    #[error("Username already taken: {0}")]
    DuplicateUsername(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
