//! UnifiedError trait implementation for FaultlineError

use super::types::{FaultlineError, UnifiedError};

impl UnifiedError for FaultlineError {
    fn error_code(&self) -> &str {
        match self {
            Self::UnmappedSeverity { .. } => "FAULTLINE_UNMAPPED_SEVERITY",
            Self::Config { .. } => "FAULTLINE_CONFIG",
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::UnmappedSeverity { .. } => "Severity has no registered label",
            Self::Config { message, .. } => message,
        }
    }

    fn context(&self) -> Option<&str> {
        match self {
            Self::UnmappedSeverity { .. } => None,
            Self::Config { context, .. } => context.as_deref(),
        }
    }
}
