//! Event bus port — publish/subscribe for accepted events.

use std::future::Future;

use wsevents_domain::error::WsEventsError;
use wsevents_domain::event::EventMessage;

/// Publishes accepted events to every current subscriber.
pub trait EventPublisher {
    /// Publish an event to all current subscribers.
    fn publish(&self, event: EventMessage)
    -> impl Future<Output = Result<(), WsEventsError>> + Send;
}

impl<T: EventPublisher + Send + Sync> EventPublisher for std::sync::Arc<T> {
    fn publish(
        &self,
        event: EventMessage,
    ) -> impl Future<Output = Result<(), WsEventsError>> + Send {
        (**self).publish(event)
    }
}
