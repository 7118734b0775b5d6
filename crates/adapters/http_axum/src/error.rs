//! HTTP error response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use wsevents_domain::error::WsEventsError;
use wsevents_domain::event::BadEvent;

/// Maps [`WsEventsError`] to an HTTP response with appropriate status code.
///
/// Bodies are plain text: producers are shell scripts and small daemons
/// that print whatever comes back.
#[derive(Debug)]
pub struct ApiError(WsEventsError);

impl From<WsEventsError> for ApiError {
    fn from(err: WsEventsError) -> Self {
        Self(err)
    }
}

impl From<BadEvent> for ApiError {
    fn from(err: BadEvent) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.0 {
            WsEventsError::BadEvent(reason) => {
                tracing::debug!(%reason, "bad event");
                (StatusCode::BAD_REQUEST, reason.to_string()).into_response()
            }
            WsEventsError::Transport(err) => {
                tracing::error!(error = %err, "transport error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
                    .into_response()
            }
        }
    }
}
