//! Event service handlers.
//!
//! `/events` serves both directions: producers `POST` envelopes to it and
//! dashboards upgrade a `GET` to a WebSocket to receive them.

#[allow(clippy::missing_errors_doc)]
pub mod events;
pub mod ws;
