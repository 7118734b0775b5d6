//! Sequences — ordered event patterns that must all be seen within a timeout.
//!
//! A sequence such as "garage door opens, then living-room motion" is
//! described by a [`SequenceDefinition`] and followed at runtime by a
//! [`SequenceTracker`], which advances one step per matching event and
//! forgets its progress once the run outlives the timeout.

mod pattern;
mod tracker;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub use pattern::EventPattern;
pub use tracker::SequenceTracker;

/// Timeout applied when a definition does not set one.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// A named, ordered list of event patterns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceDefinition {
    pub name: String,
    pub steps: Vec<EventPattern>,
    /// Seconds allowed between the first matched step and completion.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl SequenceDefinition {
    /// Create a definition with the default timeout.
    pub fn new(name: impl Into<String>, steps: Vec<EventPattern>) -> Self {
        Self {
            name: name.into(),
            steps,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    #[must_use]
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check the definition's invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] for a blank name, no steps, or a step
    /// with a blank sender.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.steps.is_empty() {
            return Err(ValidationError::EmptySequence {
                name: self.name.clone(),
            });
        }
        if self.steps.iter().any(|step| step.sender.trim().is_empty()) {
            return Err(ValidationError::EmptySender);
        }
        Ok(())
    }
}
