//! Typed identifier newtypes backed by UUIDs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one WebSocket subscriber of the event service.
///
/// Only used to correlate log lines for a connection; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(uuid::Uuid);

impl Default for ClientId {
    fn default() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl ClientId {
    /// Generate a new random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_generate_unique_ids_when_called_twice() {
        assert_ne!(ClientId::new(), ClientId::new());
    }

    #[test]
    fn should_display_as_hyphenated_uuid() {
        let id = ClientId::new();
        let text = id.to_string();
        assert_eq!(text.len(), 36);
        assert_eq!(text.matches('-').count(), 4);
    }
}
