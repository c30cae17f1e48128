//! Error types for the storage layer.

use contacts_types::ContactId;
use thiserror::Error;

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record with this id.
    #[error("contact not found: {0}")]
    NotFound(ContactId),

    /// A record with this id already exists.
    #[error("contact already exists: {0}")]
    Conflict(ContactId),

    /// Every id has been handed out.
    #[error("contact id space exhausted")]
    IdSpaceExhausted,

    /// IO error (file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
