//! # wsevents-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum) — the event service.
//!
//! ## Responsibilities
//! - Accept events from producers: `POST /events` with an
//!   `{"event": {"sender": ...}}` envelope, rejected with `400` and a
//!   plain-text reason when the envelope is malformed
//! - Fan accepted events out to every dashboard subscribed on the
//!   `GET /events` WebSocket
//! - Serve static dashboard assets under `/static/`
//!
//! ## Dependency rule
//! Depends on `wsevents-app` (for the event bus) and `wsevents-domain`
//! (for envelope validation). Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
