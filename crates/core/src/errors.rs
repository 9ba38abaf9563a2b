//! Core error types for the ClubDesk application.
//!
//! This module defines store-agnostic error types. Remote-store errors
//! (HTTP status codes, transport failures, etc.) are converted to these
//! types by the store layer.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the club application.
///
/// This enum represents all possible errors that can occur in the application.
/// Store-specific errors are wrapped in string form to keep this type
/// store-agnostic.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Remote store operation failed: {0}")]
    Remote(#[from] RemoteError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Settings not initialized: {0}")]
    NotInitialized(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Store-agnostic error type for remote row-store operations.
///
/// This enum uses `String` for all error details, allowing the store layer
/// to convert transport-specific errors into this format.
#[derive(Error, Debug)]
pub enum RemoteError {
    /// The remote store could not be reached.
    #[error("Failed to reach remote store: {0}")]
    ConnectionFailed(String),

    /// A select against the remote store failed.
    #[error("Remote query failed: {0}")]
    QueryFailed(String),

    /// The requested row was not found.
    #[error("Row not found: {0}")]
    NotFound(String),

    /// An upsert or delete against the remote store failed.
    #[error("Remote write failed: {0}")]
    WriteFailed(String),

    /// Internal/unexpected remote store error.
    #[error("Internal remote store error: {0}")]
    Internal(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),
}

// === From implementations for common error types ===

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
