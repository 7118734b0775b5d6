//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`WsEventsError`] via `#[from]` when crossing a port boundary.

use crate::event::BadEvent;

/// Base error for the wsevents workspace.
#[derive(Debug, thiserror::Error)]
pub enum WsEventsError {
    /// An inbound event failed envelope validation.
    #[error("bad event")]
    BadEvent(#[from] BadEvent),

    /// A transport or infrastructure failure reported by an adapter.
    #[error("transport error")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A name was empty or only whitespace.
    #[error("name must not be empty")]
    EmptyName,

    /// A sequence was defined without any step.
    #[error("sequence {name:?} has no steps")]
    EmptySequence { name: String },

    /// A pattern was defined with a blank sender.
    #[error("pattern sender must not be empty")]
    EmptySender,
}
