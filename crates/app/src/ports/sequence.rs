//! Sequence listener port — reacts to completed event sequences.

use wsevents_domain::event::EventMessage;

/// Notified by the [`SequenceEngine`](crate::sequence_engine::SequenceEngine)
/// each time a sequence completes.
pub trait SequenceListener {
    /// `name` is the completed sequence; `last` is the event that completed it.
    fn sequence_triggered(&self, name: &str, last: &EventMessage);
}

impl<T: SequenceListener + ?Sized> SequenceListener for std::sync::Arc<T> {
    fn sequence_triggered(&self, name: &str, last: &EventMessage) {
        (**self).sequence_triggered(name, last);
    }
}
