//! Constructor methods for FaultlineError

use super::types::FaultlineError;
use crate::severity::Severity;

impl FaultlineError {
    /// Create an unmapped-severity error
    pub fn unmapped_severity(severity: Severity) -> Self {
        Self::UnmappedSeverity { severity }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: None,
        }
    }

    /// Create a configuration error with context
    pub fn config_with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: Some(context.into()),
        }
    }
}
