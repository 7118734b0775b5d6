//! Event feed — what the dashboard does with each incoming frame.
//!
//! A frame is decoded once, routed to its [`Dashboard`] handler, then
//! offered to the [`SequenceEngine`].

use wsevents_domain::event::EventMessage;

use crate::event_router::{EventRouter, Route};
use crate::ports::{Dashboard, SequenceListener};
use crate::sequence_engine::SequenceEngine;

/// Couples the event router with the sequence engine.
pub struct EventFeed<D, L> {
    router: EventRouter<D>,
    sequences: SequenceEngine<L>,
}

impl<D: Dashboard, L: SequenceListener> EventFeed<D, L> {
    pub fn new(router: EventRouter<D>, sequences: SequenceEngine<L>) -> Self {
        Self { router, sequences }
    }

    /// Handle one raw text frame.
    ///
    /// Undecodable frames and events without a `sender` are logged and
    /// dropped. An event whose handler could not run is still offered to
    /// the sequences. Returns the route taken, if any.
    pub fn handle(&mut self, raw: &str) -> Option<Route> {
        let value: serde_json::Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(error = %err, "dropping undecodable frame");
                return None;
            }
        };
        let Some(message) = EventMessage::from_value(value) else {
            tracing::warn!("skipping event without a sender");
            return None;
        };

        let route = match self.router.dispatch(&message) {
            Ok(route) => Some(route),
            Err(err) => {
                tracing::warn!(error = %err, "event not routed");
                None
            }
        };

        let fired = self.sequences.process_event(&message);
        if !fired.is_empty() {
            tracing::debug!(?fired, "sequences fired");
        }

        route
    }

    #[must_use]
    pub fn router(&self) -> &EventRouter<D> {
        &self.router
    }

    #[must_use]
    pub fn sequences(&self) -> &SequenceEngine<L> {
        &self.sequences
    }
}
