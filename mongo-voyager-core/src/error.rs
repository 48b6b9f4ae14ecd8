//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Connection profile not found
    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    /// Credential storage error
    #[error("Credential error: {0}")]
    CredentialError(String),

    /// Query text is not valid JSON
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Query text parsed, but is neither an object (find) nor an array (pipeline)
    #[error("Invalid query shape: {0}")]
    InvalidQueryShape(String),

    /// Server unreachable or authentication failed
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Any other driver-reported failure, server message verbatim
    #[error("Driver error: {0}")]
    Driver(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Storage layer error (profile file I/O)
    #[error("Storage error: {0}")]
    PersistenceError(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.),
    /// used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when
    /// returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::ProfileNotFound(_)
                | Self::ParseError(_)
                | Self::InvalidQueryShape(_)
                | Self::ValidationError(_)
        )
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
