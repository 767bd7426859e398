//! From trait implementations for FaultlineError conversions

use super::types::FaultlineError;

impl From<serde_json::Error> for FaultlineError {
    fn from(error: serde_json::Error) -> Self {
        Self::config_with_context(error.to_string(), "Deserializing JSON configuration")
    }
}

impl From<toml::de::Error> for FaultlineError {
    fn from(error: toml::de::Error) -> Self {
        Self::config_with_context(error.to_string(), "Deserializing TOML configuration")
    }
}
