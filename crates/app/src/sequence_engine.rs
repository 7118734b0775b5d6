//! Sequence engine — fires named sequences when their events arrive in order.
//!
//! Every decoded event is offered to each configured sequence. When a
//! sequence's last step matches within its timeout, the
//! [`SequenceListener`] is notified and that sequence starts over.

use wsevents_domain::error::ValidationError;
use wsevents_domain::event::EventMessage;
use wsevents_domain::sequence::{SequenceDefinition, SequenceTracker};
use wsevents_domain::time::{Timestamp, now};

use crate::ports::SequenceListener;

/// Tracks a set of sequences against the live event feed.
pub struct SequenceEngine<L> {
    trackers: Vec<SequenceTracker>,
    listener: L,
}

impl<L: SequenceListener> SequenceEngine<L> {
    /// Create an engine for the given definitions.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] among the definitions.
    pub fn new(definitions: Vec<SequenceDefinition>, listener: L) -> Result<Self, ValidationError> {
        Ok(Self {
            trackers: build_trackers(definitions)?,
            listener,
        })
    }

    /// Names of the configured sequences.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.trackers.iter().map(SequenceTracker::name)
    }

    #[must_use]
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Offer an event to every sequence using the current time.
    pub fn process_event(&mut self, event: &EventMessage) -> Vec<String> {
        self.process_event_at(event, now())
    }

    /// Offer an event to every sequence; returns the names that fired.
    pub fn process_event_at(&mut self, event: &EventMessage, now: Timestamp) -> Vec<String> {
        let mut fired = Vec::new();

        for tracker in &mut self.trackers {
            if tracker.process_event(event, now) {
                tracing::debug!(
                    sequence = tracker.name(),
                    step = tracker.progress(),
                    "sequence step matched"
                );
            }
            if tracker.satisfied(now) {
                tracing::info!(sequence = tracker.name(), "sequence triggered");
                self.listener.sequence_triggered(tracker.name(), event);
                fired.push(tracker.name().to_string());
                tracker.reset();
            }
        }

        fired
    }
}

fn build_trackers(
    definitions: Vec<SequenceDefinition>,
) -> Result<Vec<SequenceTracker>, ValidationError> {
    definitions
        .into_iter()
        .map(|definition| {
            definition.validate()?;
            Ok(SequenceTracker::new(definition))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use wsevents_domain::sequence::EventPattern;

    // ── Spy listener ───────────────────────────────────────────────

    #[derive(Default)]
    struct SpyListener {
        fired: Mutex<Vec<(String, String)>>,
    }

    impl SequenceListener for SpyListener {
        fn sequence_triggered(&self, name: &str, last: &EventMessage) {
            self.fired
                .lock()
                .unwrap()
                .push((name.to_string(), last.sender().to_string()));
        }
    }

    // ── Helpers ────────────────────────────────────────────────────

    fn arrival() -> SequenceDefinition {
        SequenceDefinition::new(
            "arrival",
            vec![
                EventPattern::sender("garagedoor").with_field("state", "open"),
                EventPattern::sender("lrmotion"),
            ],
        )
        .with_timeout_secs(30)
    }

    fn doorbell() -> SequenceDefinition {
        SequenceDefinition::new(
            "doorbell",
            vec![EventPattern::sender("asterisk").with_field("event", "incoming-call")],
        )
    }

    fn door_open() -> EventMessage {
        EventMessage::new("garagedoor").with_field("state", "open")
    }

    // ── Tests ──────────────────────────────────────────────────────

    #[test]
    fn should_fire_when_all_steps_match() {
        let mut engine = SequenceEngine::new(vec![arrival()], SpyListener::default()).unwrap();
        let t0 = now();

        assert!(engine.process_event_at(&door_open(), t0).is_empty());
        let fired = engine.process_event_at(&EventMessage::new("lrmotion"), t0);

        assert_eq!(fired, vec!["arrival".to_string()]);
        assert_eq!(
            *engine.listener().fired.lock().unwrap(),
            vec![("arrival".to_string(), "lrmotion".to_string())]
        );
    }

    #[test]
    fn should_start_over_after_firing() {
        let mut engine = SequenceEngine::new(vec![arrival()], SpyListener::default()).unwrap();
        let t0 = now();

        engine.process_event_at(&door_open(), t0);
        engine.process_event_at(&EventMessage::new("lrmotion"), t0);
        let fired = engine.process_event_at(&EventMessage::new("lrmotion"), t0);

        assert!(fired.is_empty());
    }

    #[test]
    fn should_not_fire_after_timeout() {
        let mut engine = SequenceEngine::new(vec![arrival()], SpyListener::default()).unwrap();
        let t0 = now();

        engine.process_event_at(&door_open(), t0);
        let late = t0 + chrono::TimeDelta::seconds(31);
        let fired = engine.process_event_at(&EventMessage::new("lrmotion"), late);

        assert!(fired.is_empty());
        assert!(engine.listener().fired.lock().unwrap().is_empty());
    }

    #[test]
    fn should_track_sequences_independently() {
        let mut engine =
            SequenceEngine::new(vec![arrival(), doorbell()], SpyListener::default()).unwrap();
        let t0 = now();

        engine.process_event_at(&door_open(), t0);
        let call = EventMessage::new("asterisk").with_field("event", "incoming-call");
        assert_eq!(engine.process_event_at(&call, t0), vec!["doorbell".to_string()]);
        assert_eq!(
            engine.process_event_at(&EventMessage::new("lrmotion"), t0),
            vec!["arrival".to_string()]
        );
    }

    #[test]
    fn should_reject_invalid_definition() {
        let result = SequenceEngine::new(
            vec![SequenceDefinition::new("empty", vec![])],
            SpyListener::default(),
        );
        assert!(result.is_err());
    }
}
