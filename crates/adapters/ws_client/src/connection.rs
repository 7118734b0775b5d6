//! Client side of the event feed WebSocket.

use std::future::Future;

use futures::StreamExt;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

use crate::config::ClientConfig;
use crate::error::WsClientError;

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// One live connection to the event service.
///
/// Owns the socket; the caller supplies what happens to each frame.
pub struct EventConnection {
    url: String,
    stream: WsStream,
}

impl EventConnection {
    /// Open a WebSocket to `url`.
    ///
    /// # Errors
    ///
    /// Returns [`WsClientError::Connect`] if the TCP connection or the
    /// handshake fails.
    pub async fn connect(url: &str) -> Result<Self, WsClientError> {
        let (stream, _response) =
            connect_async(url)
                .await
                .map_err(|source| WsClientError::Connect {
                    url: url.to_string(),
                    source: Box::new(source),
                })?;
        tracing::info!(url, "connected to event feed");
        Ok(Self {
            url: url.to_string(),
            stream,
        })
    }

    /// Wait for the next text payload.
    ///
    /// Binary frames holding valid UTF-8 are returned as text; other binary
    /// frames and control frames are skipped. Returns `None` once the peer
    /// closes the connection.
    ///
    /// # Errors
    ///
    /// Returns [`WsClientError::Receive`] when the socket fails.
    pub async fn next_text(&mut self) -> Result<Option<String>, WsClientError> {
        while let Some(message) = self.stream.next().await {
            match message.map_err(|err| WsClientError::Receive(Box::new(err)))? {
                Message::Text(text) => return Ok(Some(text.as_str().to_owned())),
                Message::Binary(bytes) => match String::from_utf8(bytes.to_vec()) {
                    Ok(text) => return Ok(Some(text)),
                    Err(_) => tracing::warn!(len = bytes.len(), "skipping non UTF-8 binary frame"),
                },
                Message::Close(_) => return Ok(None),
                Message::Ping(_) | Message::Pong(_) | Message::Frame(_) => {}
            }
        }
        Ok(None)
    }

    /// Hand every text payload to `on_message` until the peer closes.
    ///
    /// # Errors
    ///
    /// Returns [`WsClientError::Receive`] when the socket fails.
    pub async fn run<F>(mut self, mut on_message: F) -> Result<(), WsClientError>
    where
        F: FnMut(&str),
    {
        while let Some(text) = self.next_text().await? {
            on_message(&text);
        }
        tracing::info!(url = %self.url, "event feed closed");
        Ok(())
    }
}

/// Keep a connection to `config.url` open until `shutdown` resolves.
///
/// Each dropped or failed connection is logged and retried after
/// `config.reconnect_interval()`; there is no backoff.
pub async fn run_reconnecting<F, S>(config: &ClientConfig, mut on_message: F, shutdown: S)
where
    F: FnMut(&str),
    S: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    loop {
        let session = async {
            let connection = EventConnection::connect(&config.url).await?;
            connection.run(&mut on_message).await
        };

        tokio::select! {
            () = &mut shutdown => break,
            result = session => {
                if let Err(err) = result {
                    tracing::warn!(error = %err, "event feed connection lost");
                }
            }
        }

        tracing::debug!(
            delay_secs = config.reconnect_interval_secs,
            "reconnecting to event feed"
        );
        tokio::select! {
            () = &mut shutdown => break,
            () = tokio::time::sleep(config.reconnect_interval()) => {}
        }
    }

    tracing::info!("event feed stopped");
}
