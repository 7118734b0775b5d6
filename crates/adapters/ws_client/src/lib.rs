//! # wsevents-adapter-ws-client
//!
//! WebSocket client adapter — the dashboard's end of the event feed.
//!
//! ## Responsibilities
//! - Connect to the event service (`ws://server:5003/events` by default)
//! - Turn incoming frames into text payloads, skipping control frames
//! - Hand each payload to a caller-supplied callback, one at a time
//! - Reconnect after a fixed interval when the connection drops
//!
//! Decoding and routing the payloads is left to the caller
//! (see `wsevents_app::event_router`).
//!
//! ## Dependency rule
//! Depends on `wsevents-domain` only, for error conversion.

pub mod config;
pub mod connection;
pub mod error;

pub use config::ClientConfig;
pub use connection::{EventConnection, run_reconnecting};
pub use error::WsClientError;
