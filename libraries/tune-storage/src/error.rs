/// Storage-specific errors
use std::path::PathBuf;
use thiserror::Error;
use tune_core::TuneError;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Rejected by a repository rule (validation, duplicate, not found)
    #[error(transparent)]
    Domain(#[from] TuneError),

    /// Collection file exists but does not hold a valid document
    #[error("Corrupt collection file {path:?}: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    /// Serialization error while writing a document
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl StorageError {
    /// Create a corrupt file error
    pub fn corrupt(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Corrupt {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// The repository rule that rejected the operation, if any
    pub fn domain(&self) -> Option<&TuneError> {
        match self {
            StorageError::Domain(err) => Some(err),
            _ => None,
        }
    }
}
