//! Storage error types

use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Storage backend error (filesystem, browser storage, etc.)
    #[error("storage backend error: {0}")]
    Backend(String),

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;
