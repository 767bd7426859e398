//! Exception types produced and consumed by the converter

mod builder;

pub use builder::ExceptionBuilder;

use crate::classifier::ExceptionKind;
use crate::severity::Severity;
use crate::trace::StackTrace;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A normalized diagnostic.
///
/// Built once per diagnostic and immutable afterwards; the only way to get a
/// different trace is [`ClassifiedException::replace_trace`], which consumes
/// the value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ClassifiedException {
    message: String,
    severity: Severity,
    file: PathBuf,
    line: u32,
    trace: StackTrace,
    kind: ExceptionKind,
}

impl ClassifiedException {
    /// Label-prefixed message, e.g. `"User Warning: bad input"`
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Source file that raised the diagnostic
    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Source line that raised the diagnostic
    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn trace(&self) -> &StackTrace {
        &self.trace
    }

    pub fn kind(&self) -> ExceptionKind {
        self.kind
    }

    /// Name of the concrete exception type, see [`ExceptionKind::type_name`]
    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }

    /// Rebuild the exception around a different trace
    pub fn replace_trace(self, trace: impl Into<StackTrace>) -> Self {
        Self {
            trace: trace.into(),
            ..self
        }
    }
}

/// An exception raised by the host that has not been normalized yet
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct PartialException {
    pub severity: Severity,
    pub message: String,
    pub file: PathBuf,
    pub line: u32,
}

impl PartialException {
    pub fn new(
        severity: Severity,
        message: impl Into<String>,
        file: impl Into<PathBuf>,
        line: u32,
    ) -> Self {
        Self {
            severity,
            message: message.into(),
            file: file.into(),
            line,
        }
    }
}

/// Any exception handed back to the converter for re-normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RaisedError {
    /// Already normalized; re-normalizing is a no-op
    Classified(ClassifiedException),
    /// Still needs a label, kind and clean trace
    Partial(PartialException),
}

impl RaisedError {
    pub fn severity(&self) -> Severity {
        match self {
            Self::Classified(e) => e.severity(),
            Self::Partial(e) => e.severity,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Classified(e) => e.message(),
            Self::Partial(e) => &e.message,
        }
    }
}

impl From<ClassifiedException> for RaisedError {
    fn from(exception: ClassifiedException) -> Self {
        Self::Classified(exception)
    }
}

impl From<PartialException> for RaisedError {
    fn from(exception: PartialException) -> Self {
        Self::Partial(exception)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::Frame;

    fn sample() -> ClassifiedException {
        ExceptionBuilder::new(
            Severity::USER_NOTICE,
            "User Notice: cache miss",
            ExceptionKind::Generic,
        )
        .location("cache.src", 12)
        .build_unsanitized(vec![Frame::new("cache.src", 12), Frame::new("main.src", 1)])
    }

    #[test]
    fn test_accessors() {
        let exception = sample();
        assert_eq!(exception.message(), "User Notice: cache miss");
        assert_eq!(exception.to_string(), "User Notice: cache miss");
        assert_eq!(exception.severity(), Severity::USER_NOTICE);
        assert_eq!(exception.file(), Path::new("cache.src"));
        assert_eq!(exception.line(), 12);
        assert_eq!(exception.kind(), ExceptionKind::Generic);
        assert_eq!(exception.type_name(), "ErrorException");
    }

    #[test]
    fn test_replace_trace_keeps_other_fields() {
        let exception = sample();
        let replaced = exception.clone().replace_trace(vec![Frame::new("main.src", 1)]);

        assert_eq!(replaced.trace().len(), 1);
        assert_eq!(replaced.message(), exception.message());
        assert_eq!(replaced.file(), exception.file());
        assert_ne!(replaced, exception);
    }

    #[test]
    fn test_raised_error_accessors() {
        let partial = PartialException::new(Severity::NOTICE, "undefined index", "a.src", 4);
        assert_eq!(partial.to_string(), "undefined index");

        let raised = RaisedError::from(partial);
        assert_eq!(raised.severity(), Severity::NOTICE);
        assert_eq!(raised.message(), "undefined index");

        let raised = RaisedError::from(sample());
        assert_eq!(raised.severity(), Severity::USER_NOTICE);
        assert_eq!(raised.message(), "User Notice: cache miss");
    }
}
