//! Runtime progress through one sequence definition.

use crate::event::EventMessage;
use crate::time::{Timestamp, has_elapsed};

use super::SequenceDefinition;

/// Follows a single [`SequenceDefinition`] across incoming events.
///
/// The clock is passed in by the caller so behaviour is deterministic.
#[derive(Debug, Clone)]
pub struct SequenceTracker {
    definition: SequenceDefinition,
    index: usize,
    started_at: Option<Timestamp>,
}

impl SequenceTracker {
    #[must_use]
    pub fn new(definition: SequenceDefinition) -> Self {
        Self {
            definition,
            index: 0,
            started_at: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    /// Number of steps matched in the current run.
    #[must_use]
    pub fn progress(&self) -> usize {
        self.index
    }

    /// Forget the current run.
    pub fn reset(&mut self) {
        self.index = 0;
        self.started_at = None;
    }

    /// Whether the current run started longer ago than the timeout.
    #[must_use]
    pub fn expired(&self, now: Timestamp) -> bool {
        self.started_at
            .is_some_and(|start| has_elapsed(start, now, self.definition.timeout()))
    }

    /// Offer an event to the next expected step.
    ///
    /// An expired run is discarded first, so the event may start a new run.
    /// Returns `true` when the event matched and the run advanced.
    pub fn process_event(&mut self, event: &EventMessage, now: Timestamp) -> bool {
        if self.expired(now) {
            self.reset();
        }

        let Some(step) = self.definition.steps.get(self.index) else {
            return false;
        };
        if !step.matches(event) {
            return false;
        }

        if self.index == 0 {
            self.started_at = Some(now);
        }
        self.index += 1;
        true
    }

    /// Whether every step matched within the timeout.
    ///
    /// An expired run is reset and reported unsatisfied.
    pub fn satisfied(&mut self, now: Timestamp) -> bool {
        if self.expired(now) {
            self.reset();
            return false;
        }
        !self.definition.steps.is_empty() && self.index == self.definition.steps.len()
    }
}
