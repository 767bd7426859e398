//! Severity classification
//!
//! Two independent mappings live here:
//! - label lookup, which is strict: every severity must have a label
//! - kind selection, which is total: unbucketed severities become `Generic`
//!
//! Supporting a new host severity means adding a label (mandatory) and,
//! optionally, a kind bucket.

mod kinds;

pub use kinds::ExceptionKind;

use crate::config::ConverterConfig;
use crate::error::{FaultlineError, FaultlineResult};
use crate::severity::{Severity, SeverityDescriptor};
pub(crate) use kinds::builtin_kind;
use std::collections::BTreeMap;

/// Maps severities to labels and exception kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classifier {
    descriptor: SeverityDescriptor,
    extra_kinds: BTreeMap<Severity, ExceptionKind>,
}

impl Classifier {
    /// Classifier over the built-in label table and buckets
    pub fn builtin() -> Self {
        Self::with_descriptor(SeverityDescriptor::builtin())
    }

    /// Classifier over a custom label table
    pub fn with_descriptor(descriptor: SeverityDescriptor) -> Self {
        Self {
            descriptor,
            extra_kinds: BTreeMap::new(),
        }
    }

    /// Built-in classifier extended with the configured severities
    pub fn from_config(config: &ConverterConfig) -> FaultlineResult<Self> {
        config.validate()?;

        let mut classifier = Self::builtin();
        for entry in &config.severities {
            let severity = Severity::from_code(entry.code);
            classifier.descriptor = classifier.descriptor.with_label(severity, &entry.label);
            if let Some(kind) = entry.kind {
                classifier.extra_kinds.insert(severity, kind);
            }
        }
        Ok(classifier)
    }

    /// Assign a bucket to a severity without a built-in one.
    ///
    /// Built-in buckets take priority, so assigning a bucketed severity to a
    /// different kind is rejected.
    pub fn with_kind(mut self, severity: Severity, kind: ExceptionKind) -> FaultlineResult<Self> {
        if let Some(builtin) = builtin_kind(severity).filter(|b| *b != kind) {
            return Err(FaultlineError::config_with_context(
                format!("Severity {} is already classified as {:?}", severity, builtin),
                format!("Assigning kind {:?}", kind),
            ));
        }
        self.extra_kinds.insert(severity, kind);
        Ok(self)
    }

    pub fn descriptor(&self) -> &SeverityDescriptor {
        &self.descriptor
    }

    /// Display label for `severity`
    pub fn resolve_label(&self, severity: Severity) -> FaultlineResult<&str> {
        self.descriptor.label(severity).ok_or_else(|| {
            tracing::warn!(
                severity = severity.code(),
                "Severity has no label; the descriptor table is out of date"
            );
            FaultlineError::unmapped_severity(severity)
        })
    }

    /// Exception kind for `severity`; never fails
    pub fn resolve_kind(&self, severity: Severity) -> ExceptionKind {
        builtin_kind(severity)
            .or_else(|| self.extra_kinds.get(&severity).copied())
            .unwrap_or(ExceptionKind::Generic)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::builtin()
    }
}
