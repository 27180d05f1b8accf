//! Centralized error types for JsonSage.

use thiserror::Error;

/// Main error type for JsonSage operations.
#[derive(Error, Debug)]
pub enum SageError {
    #[error("Database error: {0}")]
    Database(#[from] jsonsage_db::DbError),
}

/// Result type for JsonSage operations.
pub type SageResult<T> = Result<T, SageError>;
