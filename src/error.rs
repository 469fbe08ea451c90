//! Error types for TallyKV
//!
//! Provides a unified error type for all operations. The `Display` text of
//! each variant is what clients see in the `Error` field of a response.

use thiserror::Error;

use crate::protocol::StatusCode;

/// Result type alias using TallyError
pub type Result<T> = std::result::Result<T, TallyError>;

/// Unified error type for TallyKV operations
#[derive(Debug, Error)]
pub enum TallyError {
    // -------------------------------------------------------------------------
    // Request Errors
    // -------------------------------------------------------------------------
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("Value already exists")]
    AlreadyExists,

    #[error("Specified key is nil")]
    NotFound,

    // -------------------------------------------------------------------------
    // I/O and Transport Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TallyError {
    /// Status code reported for this error.
    ///
    /// Every failure collapses onto the same client-error code; only the
    /// message tells the kinds apart.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::Failure
    }
}

impl From<reqwest::Error> for TallyError {
    fn from(err: reqwest::Error) -> Self {
        TallyError::Http(err.to_string())
    }
}
