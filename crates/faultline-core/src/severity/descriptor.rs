//! Severity label table

use super::Severity;
use std::collections::BTreeMap;

/// Labels for every severity the host can raise.
///
/// Adding a host severity code means adding a row here. A missing row is an
/// authoring bug and surfaces as `FaultlineError::UnmappedSeverity`.
const BUILTIN_LABELS: [(Severity, &str); 15] = [
    (Severity::ERROR, "Fatal Error"),
    (Severity::WARNING, "Warning"),
    (Severity::PARSE, "Parse Error"),
    (Severity::NOTICE, "Notice"),
    (Severity::CORE_ERROR, "Core Error"),
    (Severity::CORE_WARNING, "Core Warning"),
    (Severity::COMPILE_ERROR, "Compile Error"),
    (Severity::COMPILE_WARNING, "Compile Warning"),
    (Severity::USER_ERROR, "User Error"),
    (Severity::USER_WARNING, "User Warning"),
    (Severity::USER_NOTICE, "User Notice"),
    (Severity::STRICT, "Runtime Notice"),
    (Severity::RECOVERABLE_ERROR, "Catchable Fatal Error"),
    (Severity::DEPRECATED, "Deprecated"),
    (Severity::USER_DEPRECATED, "User Deprecated"),
];

/// Immutable mapping from severity to display label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeverityDescriptor {
    labels: BTreeMap<Severity, String>,
}

impl SeverityDescriptor {
    /// The table covering [`Severity::ALL`]
    pub fn builtin() -> Self {
        Self {
            labels: BUILTIN_LABELS
                .iter()
                .map(|(severity, label)| (*severity, (*label).to_string()))
                .collect(),
        }
    }

    /// A descriptor with no entries
    pub fn empty() -> Self {
        Self {
            labels: BTreeMap::new(),
        }
    }

    /// Return a copy with `severity` mapped to `label`, replacing any existing entry
    pub fn with_label(mut self, severity: Severity, label: impl Into<String>) -> Self {
        self.labels.insert(severity, label.into());
        self
    }

    /// Label for `severity`, if one is registered
    pub fn label(&self, severity: Severity) -> Option<&str> {
        self.labels.get(&severity).map(String::as_str)
    }

    /// Whether `severity` has a label
    pub fn contains(&self, severity: Severity) -> bool {
        self.labels.contains_key(&severity)
    }

    /// Registered (severity, label) pairs in code order
    pub fn iter(&self) -> impl Iterator<Item = (Severity, &str)> {
        self.labels.iter().map(|(s, l)| (*s, l.as_str()))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for SeverityDescriptor {
    fn default() -> Self {
        Self::builtin()
    }
}
