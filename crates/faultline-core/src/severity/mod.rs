//! Host diagnostic severities
//!
//! A severity is the host's numeric diagnostic class. The host defines the
//! set, so [`Severity`] wraps the raw code and any value is representable;
//! the associated constants name the codes this crate knows about.

mod descriptor;

pub use descriptor::SeverityDescriptor;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A host diagnostic severity code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Severity(u32);

impl Severity {
    /// Unrecoverable runtime error
    pub const ERROR: Self = Self(1);
    /// Runtime warning
    pub const WARNING: Self = Self(1 << 1);
    /// Parse-time error
    pub const PARSE: Self = Self(1 << 2);
    /// Runtime notice
    pub const NOTICE: Self = Self(1 << 3);
    /// Error raised during host startup
    pub const CORE_ERROR: Self = Self(1 << 4);
    /// Warning raised during host startup
    pub const CORE_WARNING: Self = Self(1 << 5);
    /// Compile-time error
    pub const COMPILE_ERROR: Self = Self(1 << 6);
    /// Compile-time warning
    pub const COMPILE_WARNING: Self = Self(1 << 7);
    /// Error raised explicitly by user code
    pub const USER_ERROR: Self = Self(1 << 8);
    /// Warning raised explicitly by user code
    pub const USER_WARNING: Self = Self(1 << 9);
    /// Notice raised explicitly by user code
    pub const USER_NOTICE: Self = Self(1 << 10);
    /// Runtime strictness notice
    pub const STRICT: Self = Self(1 << 11);
    /// Fault the host allows user code to catch
    pub const RECOVERABLE_ERROR: Self = Self(1 << 12);
    /// Deprecation advisory from the host
    pub const DEPRECATED: Self = Self(1 << 13);
    /// Deprecation advisory raised by user code
    pub const USER_DEPRECATED: Self = Self(1 << 14);

    /// Every severity the crate knows by name, in code order
    pub const ALL: [Self; 15] = [
        Self::ERROR,
        Self::WARNING,
        Self::PARSE,
        Self::NOTICE,
        Self::CORE_ERROR,
        Self::CORE_WARNING,
        Self::COMPILE_ERROR,
        Self::COMPILE_WARNING,
        Self::USER_ERROR,
        Self::USER_WARNING,
        Self::USER_NOTICE,
        Self::STRICT,
        Self::RECOVERABLE_ERROR,
        Self::DEPRECATED,
        Self::USER_DEPRECATED,
    ];

    /// Wrap a raw host code
    pub const fn from_code(code: u32) -> Self {
        Self(code)
    }

    /// The raw host code
    pub const fn code(self) -> u32 {
        self.0
    }

    /// Identifier of a known severity, `None` for codes outside [`Severity::ALL`]
    pub fn name(self) -> Option<&'static str> {
        let name = match self {
            Self::ERROR => "Error",
            Self::WARNING => "Warning",
            Self::PARSE => "Parse",
            Self::NOTICE => "Notice",
            Self::CORE_ERROR => "CoreError",
            Self::CORE_WARNING => "CoreWarning",
            Self::COMPILE_ERROR => "CompileError",
            Self::COMPILE_WARNING => "CompileWarning",
            Self::USER_ERROR => "UserError",
            Self::USER_WARNING => "UserWarning",
            Self::USER_NOTICE => "UserNotice",
            Self::STRICT => "Strict",
            Self::RECOVERABLE_ERROR => "RecoverableError",
            Self::DEPRECATED => "Deprecated",
            Self::USER_DEPRECATED => "UserDeprecated",
            _ => return None,
        };
        Some(name)
    }

    /// Whether the code is one of the named severities
    pub fn is_known(self) -> bool {
        self.name().is_some()
    }
}

impl From<u32> for Severity {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "Severity({})", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_are_distinct_bits() {
        let mut seen = 0u32;
        for severity in Severity::ALL {
            assert_eq!(severity.code().count_ones(), 1, "{severity} is not a single bit");
            assert_eq!(seen & severity.code(), 0, "{severity} reuses a bit");
            seen |= severity.code();
        }
        assert_eq!(seen, (1 << 15) - 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(Severity::USER_WARNING.to_string(), "UserWarning");
        assert_eq!(Severity::STRICT.to_string(), "Strict");
        assert_eq!(Severity::from_code(1 << 15).to_string(), "Severity(32768)");
    }

    #[test]
    fn test_unknown_code() {
        let severity = Severity::from(0);
        assert!(!severity.is_known());
        assert_eq!(severity.name(), None);
        assert!(Severity::ALL.iter().all(|s| s.is_known()));
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Severity::USER_DEPRECATED).unwrap();
        assert_eq!(json, "16384");
        let back: Severity = serde_json::from_str("512").unwrap();
        assert_eq!(back, Severity::USER_WARNING);
    }
}
