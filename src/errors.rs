//! Error types for cloud-resource record operations

use thiserror::Error;

use crate::domain::ValidationError;

/// Errors that can occur while building or configuring records
#[derive(Debug, Error)]
pub enum ResourceError {
    /// A record or default violated an invariant
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Deserialization error
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Result type for record operations
pub type ResourceResult<T> = Result<T, ResourceError>;

impl From<serde_json::Error> for ResourceError {
    fn from(err: serde_json::Error) -> Self {
        ResourceError::Deserialization(err.to_string())
    }
}
