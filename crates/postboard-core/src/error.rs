//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: String },
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Transaction failed: {0}")]
    Transaction(String),
}

/// Errors returned by the external media store.
#[derive(Debug, Error)]
pub enum MediaStoreError {
    #[error("Media store is not configured")]
    NotConfigured,

    #[error("Failed to read upload: {0}")]
    Io(#[from] std::io::Error),

    #[error("Media store request failed: {0}")]
    Transport(String),

    #[error("Media store rejected upload ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Unexpected media store response: {0}")]
    Decode(String),
}
