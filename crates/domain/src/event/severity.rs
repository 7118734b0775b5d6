//! Optional severity attached to an event by its sender.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Severity levels accepted by the event service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Error,
    Warning,
    Debug,
}

impl Severity {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Debug => "DEBUG",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known severity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity {0:?}")]
pub struct UnknownSeverity(pub String);

impl FromStr for Severity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INFO" => Ok(Self::Info),
            "ERROR" => Ok(Self::Error),
            "WARNING" => Ok(Self::Warning),
            "DEBUG" => Ok(Self::Debug),
            other => Err(UnknownSeverity(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_uppercase_levels_only() {
        assert_eq!("WARNING".parse::<Severity>(), Ok(Severity::Warning));
        assert!("warning".parse::<Severity>().is_err());
        assert!("CRITICAL".parse::<Severity>().is_err());
    }

    #[test]
    fn should_display_uppercase() {
        assert_eq!(Severity::Debug.to_string(), "DEBUG");
    }
}
