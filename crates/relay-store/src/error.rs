//! Error types for the status store.

use thiserror::Error;

/// Errors that can occur while reading the status store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Driver-level failure (network, auth, server selection, decoding).
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// The store could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store configuration is unusable.
    #[error("invalid store configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
