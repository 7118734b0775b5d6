//! Event message — the decoded payload of one inbound frame.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Sender;

/// A decoded event: a `sender` tag plus sender-specific fields.
///
/// The `sender` key is never stored inside [`fields`](Self::fields); it is
/// re-attached on serialization so the JSON form round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventMessage {
    sender: String,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl EventMessage {
    /// Create an event with the given sender and no other fields.
    pub fn new(sender: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            fields: Map::new(),
        }
    }

    /// Add a field, replacing any previous value. A `sender` key is ignored.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if key != "sender" {
            self.fields.insert(key, value.into());
        }
        self
    }

    /// Build an event from an arbitrary JSON value.
    ///
    /// Returns `None` unless the value is an object whose `sender` is a string.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        let Value::Object(mut fields) = value else {
            return None;
        };
        match fields.remove("sender") {
            Some(Value::String(sender)) => Some(Self { sender, fields }),
            _ => None,
        }
    }

    /// The raw sender tag.
    #[must_use]
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// The sender tag if it names one of the known subsystems.
    #[must_use]
    pub fn known_sender(&self) -> Option<Sender> {
        self.sender.parse().ok()
    }

    /// Look up a sender-specific field.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Look up a sender-specific field holding a string.
    #[must_use]
    pub fn field_str(&self, key: &str) -> Option<&str> {
        self.field(key).and_then(Value::as_str)
    }

    /// The `event` field, set by `asterisk` (e.g. `incoming-call`).
    #[must_use]
    pub fn event(&self) -> Option<&str> {
        self.field_str("event")
    }

    /// The `state` field, set by `garagedoor` (e.g. `open`).
    #[must_use]
    pub fn state(&self) -> Option<&str> {
        self.field_str("state")
    }

    /// All fields except `sender`.
    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// The full payload as a JSON object, `sender` included.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut object = Map::with_capacity(self.fields.len() + 1);
        object.insert("sender".to_string(), Value::String(self.sender.clone()));
        object.extend(self.fields.iter().map(|(k, v)| (k.clone(), v.clone())));
        Value::Object(object)
    }
}
