//! Exception kinds and the built-in severity buckets

use crate::severity::Severity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse category a classified exception belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExceptionKind {
    /// Fault-level diagnostics
    Fatal,
    /// Warnings
    Warning,
    /// Deprecation advisories
    Deprecation,
    /// Notices and everything not otherwise bucketed
    Generic,
}

impl ExceptionKind {
    /// Name of the concrete exception type for this kind
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Fatal => "Error",
            Self::Warning => "Warning",
            Self::Deprecation => "DeprecationNotice",
            Self::Generic => "ErrorException",
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

impl fmt::Display for ExceptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Bucket for severities with a fixed classification, `None` otherwise
pub(crate) fn builtin_kind(severity: Severity) -> Option<ExceptionKind> {
    match severity {
        Severity::ERROR | Severity::USER_ERROR | Severity::RECOVERABLE_ERROR => {
            Some(ExceptionKind::Fatal)
        }
        Severity::WARNING | Severity::USER_WARNING => Some(ExceptionKind::Warning),
        Severity::DEPRECATED | Severity::USER_DEPRECATED => Some(ExceptionKind::Deprecation),
        _ => None,
    }
}
