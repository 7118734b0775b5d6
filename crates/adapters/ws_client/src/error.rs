//! WebSocket client adapter error types.

use tokio_tungstenite::tungstenite;
use wsevents_domain::error::WsEventsError;

/// Errors specific to the WebSocket client adapter.
#[derive(Debug, thiserror::Error)]
pub enum WsClientError {
    /// The handshake with the event service failed.
    #[error("failed to connect to {url}")]
    Connect {
        url: String,
        #[source]
        source: Box<tungstenite::Error>,
    },

    /// Reading from an established connection failed.
    #[error("failed to read from event feed")]
    Receive(#[source] Box<tungstenite::Error>),
}

impl From<WsClientError> for WsEventsError {
    fn from(err: WsClientError) -> Self {
        Self::Transport(Box::new(err))
    }
}
