//! Builder that finalizes an exception around a sanitized trace

use super::ClassifiedException;
use crate::classifier::ExceptionKind;
use crate::severity::Severity;
use crate::trace::{Frame, StackTrace, TraceSanitizer};
use std::path::PathBuf;

/// Builder for [`ClassifiedException`].
///
/// The raw trace is captured separately and sanitized before the exception
/// is finalized, so a built exception never carries trap frames. Without a
/// [`location`](Self::location) the exception reports an empty path and line
/// 0, meaning the host gave no source location.
#[derive(Debug, Clone)]
pub struct ExceptionBuilder {
    severity: Severity,
    message: String,
    kind: ExceptionKind,
    file: PathBuf,
    line: u32,
}

impl ExceptionBuilder {
    /// Start a builder; `message` is used verbatim
    pub fn new(severity: Severity, message: impl Into<String>, kind: ExceptionKind) -> Self {
        Self {
            severity,
            message: message.into(),
            kind,
            file: PathBuf::new(),
            line: 0,
        }
    }

    /// Set the source location that raised the diagnostic
    pub fn location(mut self, file: impl Into<PathBuf>, line: u32) -> Self {
        self.file = file.into();
        self.line = line;
        self
    }

    /// Finalize with the sanitized form of `raw_frames`
    pub fn build(self, raw_frames: Vec<Frame>) -> ClassifiedException {
        let frames = TraceSanitizer::sanitize_frames(raw_frames, &self.file, self.line);
        self.build_unsanitized(frames)
    }

    /// Finalize with `frames` as given
    pub(crate) fn build_unsanitized(self, frames: Vec<Frame>) -> ClassifiedException {
        ClassifiedException {
            message: self.message,
            severity: self.severity,
            file: self.file,
            line: self.line,
            trace: StackTrace::new(frames),
            kind: self.kind,
        }
    }
}
