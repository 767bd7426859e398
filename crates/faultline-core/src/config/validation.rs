//! Configuration validation

use super::ConverterConfig;
use crate::classifier::builtin_kind;
use crate::error::{FaultlineError, FaultlineResult};
use crate::severity::Severity;
use std::collections::HashSet;

/// Configuration validator
pub(super) struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration
    pub(super) fn validate(config: &ConverterConfig) -> FaultlineResult<()> {
        Self::validate_labels(config)?;
        Self::validate_unique_codes(config)?;
        Self::validate_kinds(config)?;
        Ok(())
    }

    fn validate_labels(config: &ConverterConfig) -> FaultlineResult<()> {
        for entry in &config.severities {
            if entry.label.trim().is_empty() {
                return Err(FaultlineError::config_with_context(
                    "Severity label must not be empty",
                    format!("Severity code {}", entry.code),
                ));
            }
        }
        Ok(())
    }

    fn validate_unique_codes(config: &ConverterConfig) -> FaultlineResult<()> {
        let mut seen = HashSet::new();
        for entry in &config.severities {
            if !seen.insert(entry.code) {
                return Err(FaultlineError::config(format!(
                    "Severity code {} is configured more than once",
                    entry.code
                )));
            }
        }
        Ok(())
    }

    /// Built-in buckets have fixed priority and cannot be reassigned
    fn validate_kinds(config: &ConverterConfig) -> FaultlineResult<()> {
        for entry in &config.severities {
            let severity = Severity::from_code(entry.code);
            match (entry.kind, builtin_kind(severity)) {
                (Some(kind), Some(builtin)) if kind != builtin => {
                    return Err(FaultlineError::config_with_context(
                        format!("Severity {} is already classified as {:?}", severity, builtin),
                        format!("Configured kind {:?}", kind),
                    ));
                }
                _ => {}
            }
        }
        Ok(())
    }
}
