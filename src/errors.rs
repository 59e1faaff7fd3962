//! Error types for the propal CLI
//!
//! Each error type has a corresponding error code for programmatic handling.

use thiserror::Error;

/// Result type alias for propal operations
pub type Result<T> = std::result::Result<T, PropalError>;

/// Main error type for all propal operations
#[derive(Debug, Error)]
pub enum PropalError {
    /// Data root not found - no .propal directory
    #[error("Data root not found: {0}")]
    DataRootNotFound(String),

    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Record lookup failed
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    /// A workflow control was invoked at a stage that does not expose it
    #[error("No {control} control at stage {stage}")]
    NoSuchControl { stage: String, control: String },

    /// The persistence write did not complete; the mutation is not committed
    #[error("Persistence failure: {0}")]
    Persistence(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error with context
    #[error("{context}: {message}")]
    Wrapped { context: String, message: String },
}

impl PropalError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            PropalError::DataRootNotFound(_) => "DATA_ROOT_NOT_FOUND",
            PropalError::InvalidJson(_) => "INVALID_JSON",
            PropalError::FileNotFound(_) => "FILE_NOT_FOUND",
            PropalError::ConfigError(_) => "CONFIG_ERROR",
            PropalError::RecordNotFound(_) => "RECORD_NOT_FOUND",
            PropalError::NoSuchControl { .. } => "NO_SUCH_CONTROL",
            PropalError::Persistence(_) => "PERSISTENCE_FAILURE",
            PropalError::Io(_) => "IO_ERROR",
            PropalError::Wrapped { .. } => "WRAPPED_ERROR",
        }
    }

    /// Wrap an error with additional context
    pub fn wrap<E: std::fmt::Display>(error: E, context: impl Into<String>) -> Self {
        PropalError::Wrapped {
            context: context.into(),
            message: error.to_string(),
        }
    }
}

/// Convert an error to an appropriate exit code
pub fn to_exit_code(error: &PropalError) -> i32 {
    match error {
        PropalError::NoSuchControl { .. } => 2,
        _ => 1,
    }
}
