//! `POST /events` — event submission from producers.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;

use wsevents_app::ports::EventPublisher;
use wsevents_domain::event::parse_envelope;

use crate::error::ApiError;
use crate::state::AppState;

/// Log target for accepted events, kept apart from request tracing.
pub const EVENT_LOG_TARGET: &str = "wsevents::events";

/// Validate the envelope and broadcast the inner event.
///
/// Responds `200` with an empty body, or `400` with the rejection reason.
pub async fn submit(State(state): State<AppState>, body: Bytes) -> Result<StatusCode, ApiError> {
    let event = parse_envelope(&body)?;

    tracing::info!(target: EVENT_LOG_TARGET, "Event: {}", event.to_value());
    state.event_bus.publish(event).await?;

    Ok(StatusCode::OK)
}
