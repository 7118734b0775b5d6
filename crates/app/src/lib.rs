//! # wsevents-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters implement:
//!   - `Dashboard` — the display collaborators events are routed to
//!   - `EventPublisher` — fan-out of accepted events to subscribers
//!   - `SequenceListener` — notified when an event sequence completes
//! - Provide the **event router**: decode a raw frame and invoke exactly one
//!   dashboard collaborator based on the event's sender
//! - Provide the **sequence engine**: follow configured event sequences and
//!   report the ones that complete
//! - Provide the **event feed**: route each incoming frame, then offer it to
//!   the sequence engine
//! - Provide **in-process infrastructure** (event bus) that doesn't need IO
//!
//! ## Dependency rule
//! Depends on `wsevents-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod event_bus;
pub mod event_feed;
pub mod event_router;
pub mod ports;
pub mod sequence_engine;
