//! Events — real-time messages produced by household subsystems.
//!
//! Every event carries a `sender` tag naming the subsystem that produced it
//! (`asterisk`, `weather`, `garagedoor`, …) plus arbitrary sender-specific
//! fields. Events are transient: decoded per message, handed to exactly one
//! consumer, then dropped.

mod envelope;
mod message;
mod sender;
mod severity;

pub use envelope::{BadEvent, parse_envelope};
pub use message::EventMessage;
pub use sender::{Sender, UnknownSender};
pub use severity::{Severity, UnknownSeverity};
