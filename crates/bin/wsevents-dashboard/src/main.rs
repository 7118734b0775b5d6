//! # wsevents-dashboard — event feed client
//!
//! Composition root that wires the WebSocket client adapter to the event
//! router and the sequence engine.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise `tracing` from the configured filter
//! - Build the console dashboard and the sequence engine
//! - Follow the event feed, reconnecting when it drops
//! - Stop on Ctrl-C
//!
//! ## Dependency rule
//! This is the wiring layer — no domain logic belongs here.

mod config;
mod console;

use tracing_subscriber::EnvFilter;

use wsevents_app::event_feed::EventFeed;
use wsevents_app::event_router::EventRouter;
use wsevents_app::ports::GARAGE_REGION;
use wsevents_app::sequence_engine::SequenceEngine;

use crate::config::Config;
use crate::console::{ConsoleDashboard, LoggingListener};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let sequences = SequenceEngine::new(config.sequences, LoggingListener)?;
    let mut feed = EventFeed::new(EventRouter::new(ConsoleDashboard::new()), sequences);

    let sequence_names: Vec<&str> = feed.sequences().names().collect();
    tracing::info!(
        url = %config.connection.url,
        sequences = ?sequence_names,
        "wsevents-dashboard starting"
    );

    wsevents_adapter_ws_client::run_reconnecting(
        &config.connection,
        |raw| {
            feed.handle(raw);
        },
        shutdown_signal(),
    )
    .await;

    tracing::info!(
        garage = ?feed.router().dashboard().region(GARAGE_REGION),
        "wsevents-dashboard stopped"
    );
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
