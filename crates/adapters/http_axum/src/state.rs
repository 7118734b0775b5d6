//! Shared application state for axum handlers.

use std::sync::Arc;

use wsevents_app::event_bus::InProcessEventBus;

/// Application state shared across all axum handlers.
///
/// `Clone` only bumps the `Arc`; every handler sees the same bus.
#[derive(Clone)]
pub struct AppState {
    /// Bus accepted events are published on and subscribers read from.
    pub event_bus: Arc<InProcessEventBus>,
}

impl AppState {
    /// Create a new application state around an event bus.
    pub fn new(event_bus: InProcessEventBus) -> Self {
        Self::from_arc(Arc::new(event_bus))
    }

    /// Create a new application state from a bus shared with other tasks.
    pub fn from_arc(event_bus: Arc<InProcessEventBus>) -> Self {
        Self { event_bus }
    }
}
