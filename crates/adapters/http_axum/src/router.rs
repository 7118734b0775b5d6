//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::http::{StatusCode, Uri};
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::api::{events, ws};
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// `/events` accepts `POST` submissions and WebSocket subscriptions,
/// `/static/` serves files from `static_dir`, and every other path or
/// method is answered with `400`. Includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/events",
            get(ws::subscribe)
                .post(events::submit)
                .fallback(unknown_request),
        )
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .fallback(unknown_request)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn unknown_request(uri: Uri) -> StatusCode {
    tracing::debug!(path = %uri.path(), "unknown request");
    StatusCode::BAD_REQUEST
}
