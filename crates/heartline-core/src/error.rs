//! Error types for Heartline

use thiserror::Error;

/// Main error type for Heartline operations
#[derive(Error, Debug)]
pub enum HeartlineError {
    /// Backend data provider failed (network, auth, or server error)
    #[error("Provider error: {0}")]
    Provider(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Locale tag could not be parsed
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    /// Theme key not present in the registry
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    /// Invalid operation for current state
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

/// Result type alias using HeartlineError
pub type HeartlineResult<T> = Result<T, HeartlineError>;
