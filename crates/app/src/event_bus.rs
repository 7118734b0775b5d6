//! In-process event bus backed by a tokio broadcast channel.

use std::future::Future;

use tokio::sync::broadcast;

use wsevents_domain::error::WsEventsError;
use wsevents_domain::event::EventMessage;

use crate::ports::EventPublisher;

/// Fans accepted events out to every connected subscriber.
///
/// Publishing succeeds even when there are no active subscribers
/// (the event is simply dropped). A subscriber that falls more than
/// `capacity` events behind loses the oldest ones.
pub struct InProcessEventBus {
    sender: broadcast::Sender<EventMessage>,
}

impl InProcessEventBus {
    /// Create a new event bus with the given channel capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to events published *after* this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<EventMessage> {
        self.sender.subscribe()
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl EventPublisher for InProcessEventBus {
    fn publish(
        &self,
        event: EventMessage,
    ) -> impl Future<Output = Result<(), WsEventsError>> + Send {
        match self.sender.send(event) {
            Ok(delivered) => tracing::trace!(delivered, "event published"),
            Err(_) => tracing::trace!("event published with no subscribers"),
        }
        async { Ok(()) }
    }
}
