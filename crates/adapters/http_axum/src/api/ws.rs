//! `GET /events` WebSocket — live feed of accepted events.

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::Response;
use futures::{SinkExt, StreamExt};
use tokio::sync::broadcast::error::RecvError;

use wsevents_domain::id::ClientId;

use crate::state::AppState;

/// Upgrade the connection and stream events to it until it goes away.
pub async fn subscribe(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Forward every bus event to one client as a JSON text frame.
///
/// Text sent by the client is ignored; pings are answered by the protocol
/// layer. The subscription ends on close, on a socket error, or when the
/// bus shuts down.
async fn handle_socket(socket: WebSocket, state: AppState) {
    let client_id = ClientId::new();
    let mut events = state.event_bus.subscribe();
    let (mut sink, mut stream) = socket.split();

    tracing::debug!(%client_id, "new websocket connection");

    loop {
        tokio::select! {
            received = events.recv() => match received {
                Ok(event) => {
                    let json = match serde_json::to_string(&event) {
                        Ok(json) => json,
                        Err(err) => {
                            tracing::warn!(%client_id, %err, "failed to encode event");
                            continue;
                        }
                    };
                    if sink.send(Message::Text(json.into())).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(%client_id, skipped, "subscriber lagged, some events were dropped");
                }
                Err(RecvError::Closed) => break,
            },
            incoming = stream.next() => match incoming {
                Some(Ok(Message::Close(_)) | Err(_)) | None => break,
                Some(Ok(_)) => {}
            },
        }
    }

    tracing::debug!(%client_id, "disconnected");
}
