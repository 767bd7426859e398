//! Core error types and traits for Faultline

use crate::severity::Severity;
use thiserror::Error;

/// Result type alias for Faultline operations
pub type FaultlineResult<T> = Result<T, FaultlineError>;

/// Unified error trait that all Faultline errors implement.
pub trait UnifiedError: std::error::Error + Send + Sync {
    /// Get the error code for programmatic handling
    fn error_code(&self) -> &str;

    /// Get the human-readable error message
    fn message(&self) -> &str;

    /// Get optional context about the error
    fn context(&self) -> Option<&str> {
        None
    }
}

/// Main error type for Faultline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FaultlineError {
    /// A severity has no entry in the label table.
    ///
    /// This means the descriptor is out of date with the host's severity set
    /// and must never be papered over with a default label.
    #[error("No label registered for severity {severity} (code {})", .severity.code())]
    UnmappedSeverity { severity: Severity },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },
}
