//! Raw diagnostic input

use crate::severity::Severity;
use std::path::PathBuf;

/// A diagnostic as delivered by the host's error trap.
///
/// Host lines start at 1. A `source_line` of 0 marks a diagnostic raised
/// without a known location; its captured trace is kept whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticEvent {
    pub severity: Severity,
    pub message: String,
    pub source_file: PathBuf,
    pub source_line: u32,
}

impl DiagnosticEvent {
    pub fn new(
        severity: Severity,
        message: impl Into<String>,
        source_file: impl Into<PathBuf>,
        source_line: u32,
    ) -> Self {
        Self {
            severity,
            message: message.into(),
            source_file: source_file.into(),
            source_line,
        }
    }
}
