//! Store-specific error types for the remote row store.
//!
//! This module provides error types that wrap transport-specific errors and
//! convert them to the store-agnostic error types defined in `clubdesk-core`.

use clubdesk_core::errors::{Error, RemoteError};
use thiserror::Error;

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Store-specific errors that wrap HTTP and JSON types.
///
/// These errors are internal to the store layer and are converted to
/// `clubdesk_core::Error` before being returned to callers.
#[derive(Debug, Error)]
pub enum StoreError {
    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error response from the row store API
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Invalid request (missing required data, etc.)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl StoreError {
    /// Create an API error from status and message
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Converts a write-path failure into the core write error.
    pub fn into_write(self) -> Error {
        Error::Remote(RemoteError::WriteFailed(self.to_string()))
    }
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Http(e) if e.is_connect() || e.is_timeout() => {
                Error::Remote(RemoteError::ConnectionFailed(e.to_string()))
            }
            StoreError::Http(e) => Error::Remote(RemoteError::QueryFailed(e.to_string())),
            StoreError::Json(e) => Error::Remote(RemoteError::Internal(e.to_string())),
            StoreError::Api { status: 404, message } => {
                Error::Remote(RemoteError::NotFound(message))
            }
            StoreError::Api { status, message } => Error::Remote(RemoteError::QueryFailed(
                format!("{}: {}", status, message),
            )),
            StoreError::InvalidRequest(m) => Error::Remote(RemoteError::Internal(m)),
        }
    }
}
