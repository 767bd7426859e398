//! Faultline Core Library
//!
//! Turns a host runtime's non-fatal diagnostics (warnings, notices,
//! deprecations, recoverable faults) into classified exceptions whose stack
//! traces start at the code that raised the diagnostic rather than at the
//! host's trap and dispatch frames.
//!
//! The host's error-trap calls [`Converter::from_event`] (or
//! [`Converter::from_error`]) synchronously; the crate keeps no global state.

pub mod classifier;
pub mod config;
pub mod converter;
pub mod error;
pub mod exception;
pub mod severity;
pub mod trace;

// Re-export commonly used types
pub use classifier::{Classifier, ExceptionKind};
pub use config::{ConverterConfig, SeverityEntry};
pub use converter::{Converter, DiagnosticEvent};
pub use error::{FaultlineError, FaultlineResult, UnifiedError};
pub use exception::{ClassifiedException, ExceptionBuilder, PartialException, RaisedError};
pub use severity::{Severity, SeverityDescriptor};
pub use trace::{Frame, NoStack, StackSource, StackTrace, TraceSanitizer};
