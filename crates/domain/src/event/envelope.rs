//! Envelope validation for events submitted to the event service.
//!
//! Producers post `{"event": {"sender": "...", ...}}`. The envelope is
//! checked in a fixed order and the first failure is reported; its
//! display text is what the producer sees in the response body.

use serde_json::Value;

use super::{EventMessage, Severity};

/// Why a submitted event was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BadEvent {
    #[error("Invalid JSON")]
    InvalidJson,
    #[error("Bad envelope")]
    BadEnvelope,
    #[error("No sender in event")]
    MissingSender,
    #[error("Bad severity")]
    BadSeverity,
}

/// Validate a raw envelope body and extract the inner event.
///
/// # Errors
///
/// Returns the first [`BadEvent`] reason that applies.
pub fn parse_envelope(body: &[u8]) -> Result<EventMessage, BadEvent> {
    let envelope: Value = serde_json::from_slice(body).map_err(|_| BadEvent::InvalidJson)?;

    let event = match envelope {
        Value::Object(mut map) => map.remove("event").ok_or(BadEvent::BadEnvelope)?,
        _ => return Err(BadEvent::BadEnvelope),
    };

    let event = EventMessage::from_value(event).ok_or(BadEvent::MissingSender)?;

    if let Some(severity) = event.field("severity") {
        let known = severity
            .as_str()
            .is_some_and(|s| s.parse::<Severity>().is_ok());
        if !known {
            return Err(BadEvent::BadSeverity);
        }
    }

    Ok(event)
}
