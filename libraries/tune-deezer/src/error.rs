//! Error types for the Deezer client.

use thiserror::Error;

/// Errors that can occur when calling the upstream API.
#[derive(Error, Debug)]
pub enum DeezerError {
    /// HTTP request failed (connection, timeout, ...)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream returned a non-success status
    #[error("Upstream error ({status}): {message}")]
    Upstream { status: u16, message: String },

    /// Failed to parse the upstream response as JSON
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Search type not supported by the upstream API
    #[error("Invalid search type: {0}")]
    InvalidSearchType(String),

    /// Invalid base URL
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

impl DeezerError {
    /// Upstream HTTP status, when the upstream answered at all
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            DeezerError::Upstream { status, .. } => Some(*status),
            DeezerError::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type for Deezer client operations.
pub type Result<T> = std::result::Result<T, DeezerError>;
