/// Core error types for Tune Catalog
use crate::types::EntityKind;
use thiserror::Error;

/// Result type alias using `TuneError`
pub type Result<T> = std::result::Result<T, TuneError>;

/// Core error type for Tune Catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TuneError {
    /// A required field was absent or blank
    #[error("{entity} is missing required field `{field}`")]
    MissingField {
        entity: EntityKind,
        field: &'static str,
    },

    /// An entity matching the uniqueness rule already exists
    #[error("Duplicate {0}")]
    Duplicate(EntityKind),

    /// Entity not found
    #[error("{entity} not found: {key}")]
    NotFound { entity: EntityKind, key: String },

    /// Email does not have the `local@domain.tld` shape
    #[error("Invalid email address")]
    InvalidEmail,

    /// Password does not meet the strength rules
    #[error("Password is too weak")]
    WeakPassword,
}

impl TuneError {
    /// Create a missing field error
    pub fn missing_field(entity: EntityKind, field: &'static str) -> Self {
        Self::MissingField { entity, field }
    }

    /// Create a not found error
    pub fn not_found(entity: EntityKind, key: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }
}
