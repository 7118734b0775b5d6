//! # wsevents-domain
//!
//! Pure domain model for the wsevents home-automation event feed.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Event messages** (a `sender` tag plus sender-specific fields)
//! - Define the closed set of known **Senders** and event **Severities**
//! - Validate the **envelope** producers submit to the event service
//! - Define **Sequences** (ordered event patterns with a timeout) and track
//!   progress through them
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod event;
pub mod sequence;
