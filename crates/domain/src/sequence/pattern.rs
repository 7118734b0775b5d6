//! Event pattern — one step of a sequence.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::event::EventMessage;

/// Matches events from one sender whose listed fields all have the given values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventPattern {
    pub sender: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl EventPattern {
    /// A pattern matching every event from `sender`.
    pub fn sender(sender: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            fields: Map::new(),
        }
    }

    /// Also require `key` to equal `value`.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn matches(&self, event: &EventMessage) -> bool {
        event.sender() == self.sender
            && self
                .fields
                .iter()
                .all(|(key, expected)| event.field(key) == Some(expected))
    }
}
