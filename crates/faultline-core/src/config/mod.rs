//! Configuration for host severities the built-in table does not cover
//!
//! ```toml
//! [[severity]]
//! code = 32768
//! label = "Host Advisory"
//! kind = "warning"
//! ```

mod validation;

use crate::classifier::ExceptionKind;
use crate::error::FaultlineResult;
use serde::{Deserialize, Serialize};

/// Extra severity registrations applied on top of the built-in table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    #[serde(rename = "severity", default)]
    pub severities: Vec<SeverityEntry>,
}

/// One host severity registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityEntry {
    /// Raw host code
    pub code: u32,
    /// Display label; required for every severity the host can raise
    pub label: String,
    /// Bucket for codes without a built-in one; `Generic` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ExceptionKind>,
}

impl ConverterConfig {
    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> FaultlineResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Parse a JSON document
    pub fn from_json_str(content: &str) -> FaultlineResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Merge with another config; entries of `other` win on equal codes
    pub fn merge(&mut self, other: ConverterConfig) {
        for entry in other.severities {
            match self.severities.iter_mut().find(|e| e.code == entry.code) {
                Some(existing) => *existing = entry,
                None => self.severities.push(entry),
            }
        }
    }

    /// Reject configurations the classifier cannot apply
    pub fn validate(&self) -> FaultlineResult<()> {
        validation::ConfigValidator::validate(self)
    }
}
