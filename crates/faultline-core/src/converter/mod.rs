//! Diagnostic to exception conversion
//!
//! The host's error trap calls into a [`Converter`] synchronously with each
//! diagnostic. A converter holds no mutable state and can be shared across
//! threads when its stack source can.

mod event;

pub use event::DiagnosticEvent;

use crate::classifier::Classifier;
use crate::error::FaultlineResult;
use crate::exception::{ClassifiedException, ExceptionBuilder, RaisedError};
use crate::severity::Severity;
use crate::trace::{NoStack, StackSource};
use std::path::{Path, PathBuf};

/// Builds classified exceptions from host diagnostics
#[derive(Debug, Clone)]
pub struct Converter<S = NoStack> {
    classifier: Classifier,
    stack: S,
}

impl Converter<NoStack> {
    /// Converter that records no call stack
    pub fn new(classifier: Classifier) -> Self {
        Self {
            classifier,
            stack: NoStack,
        }
    }
}

impl Default for Converter<NoStack> {
    fn default() -> Self {
        Self::new(Classifier::builtin())
    }
}

impl<S: StackSource> Converter<S> {
    /// Converter that captures traces from the host's stack source
    pub fn with_stack_source(classifier: Classifier, stack: S) -> Self {
        Self { classifier, stack }
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Convert a raw diagnostic
    pub fn from_event(&self, event: DiagnosticEvent) -> FaultlineResult<ClassifiedException> {
        self.create(
            event.severity,
            &event.message,
            event.source_file,
            event.source_line,
        )
    }

    /// Convert the four values an error trap receives
    pub fn from_error(
        &self,
        severity: Severity,
        message: &str,
        file: impl Into<PathBuf>,
        line: u32,
    ) -> FaultlineResult<ClassifiedException> {
        self.create(severity, message, file.into(), line)
    }

    /// Normalize an exception that was already raised.
    ///
    /// Classified exceptions come back unchanged. For partial ones, a label
    /// prefix left by an earlier conversion is removed before relabeling so
    /// the label never repeats.
    pub fn from_existing(
        &self,
        existing: impl Into<RaisedError>,
    ) -> FaultlineResult<ClassifiedException> {
        let partial = match existing.into() {
            RaisedError::Classified(exception) => {
                tracing::trace!(
                    severity = exception.severity().code(),
                    "Exception already classified; returning as is"
                );
                return Ok(exception);
            }
            RaisedError::Partial(partial) => partial,
        };

        let label = self.classifier.resolve_label(partial.severity)?;
        let prefix = format!("{}: ", label);
        let message = match partial.message.strip_prefix(&prefix) {
            Some(unwrapped) => {
                tracing::trace!(label, "Stripped existing label prefix");
                unwrapped
            }
            None => partial.message.as_str(),
        };

        self.create(partial.severity, message, partial.file.clone(), partial.line)
    }

    fn create(
        &self,
        severity: Severity,
        message: &str,
        file: PathBuf,
        line: u32,
    ) -> FaultlineResult<ClassifiedException> {
        let label = self.classifier.resolve_label(severity)?;
        let display_message = format!("{}: {}", label, message);
        let kind = self.classifier.resolve_kind(severity);

        let raw_frames = self.stack.capture();
        let captured = raw_frames.len();
        let exception = ExceptionBuilder::new(severity, display_message, kind)
            .location(file, line)
            .build(raw_frames);

        log_conversion(&exception, captured);
        Ok(exception)
    }
}

fn log_conversion(exception: &ClassifiedException, captured: usize) {
    let file: &Path = exception.file();
    tracing::debug!(
        severity = %exception.severity(),
        kind = exception.type_name(),
        file = %file.display(),
        line = exception.line(),
        dropped = captured - exception.trace().len(),
        "Converted diagnostic to exception"
    );
}
