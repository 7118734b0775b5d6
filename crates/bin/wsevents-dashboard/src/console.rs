//! Console dashboard — renders routed events as log lines.
//!
//! Stands in for a graphical display: every handler call is logged under
//! the `wsevents::dashboard` target, and region texts are kept in memory so
//! the latest value of each region can be read back.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use wsevents_app::ports::{Dashboard, SequenceListener};
use wsevents_domain::event::EventMessage;

const TARGET: &str = "wsevents::dashboard";

#[derive(Debug, Default)]
pub struct ConsoleDashboard {
    regions: Mutex<HashMap<String, String>>,
}

impl ConsoleDashboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Text last rendered into `region`.
    pub fn region(&self, region: &str) -> Option<String> {
        self.regions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(region)
            .cloned()
    }
}

impl Dashboard for ConsoleDashboard {
    fn incoming_call(&self, payload: &EventMessage) {
        tracing::info!(
            target: TARGET,
            number = payload.field_str("number"),
            name = payload.field_str("name"),
            "incoming call"
        );
    }

    fn weather_event(&self, payload: &EventMessage) {
        tracing::info!(target: TARGET, payload = %payload.to_value(), "weather update");
    }

    fn mpd_event(&self, payload: &EventMessage) {
        tracing::info!(target: TARGET, payload = %payload.to_value(), "music update");
    }

    fn aprs_event(&self, payload: &EventMessage) {
        tracing::info!(target: TARGET, payload = %payload.to_value(), "aprs update");
    }

    fn wemo_event(&self, payload: &EventMessage) {
        tracing::info!(target: TARGET, payload = %payload.to_value(), "wemo update");
    }

    fn hvac_event(&self, payload: &EventMessage) {
        tracing::info!(target: TARGET, payload = %payload.to_value(), "hvac update");
    }

    fn reload_mainimg(&self) {
        tracing::info!(target: TARGET, "reloading main image");
    }

    fn render_region(&self, region: &str, text: &str) {
        tracing::info!(target: TARGET, region, text, "region updated");
        self.regions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(region.to_string(), text.to_string());
    }
}

/// Logs every completed sequence.
#[derive(Debug, Default)]
pub struct LoggingListener;

impl SequenceListener for LoggingListener {
    fn sequence_triggered(&self, name: &str, last: &EventMessage) {
        tracing::info!(
            target: TARGET,
            sequence = name,
            last_sender = last.sender(),
            "sequence completed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wsevents_app::ports::GARAGE_REGION;

    #[test]
    fn should_start_with_no_region_text() {
        let dashboard = ConsoleDashboard::new();
        assert_eq!(dashboard.region(GARAGE_REGION), None);
    }

    #[test]
    fn should_keep_latest_region_text() {
        let dashboard = ConsoleDashboard::new();

        dashboard.render_region(GARAGE_REGION, "OPEN");
        dashboard.render_region(GARAGE_REGION, "CLOSED");
        dashboard.render_region("porch", "ON");

        assert_eq!(dashboard.region(GARAGE_REGION).as_deref(), Some("CLOSED"));
        assert_eq!(dashboard.region("porch").as_deref(), Some("ON"));
    }

    #[test]
    fn should_leave_regions_untouched_by_other_handlers() {
        let dashboard = ConsoleDashboard::new();
        let event = EventMessage::new("mpd").with_field("song", "So What");

        dashboard.mpd_event(&event);
        dashboard.reload_mainimg();

        assert_eq!(dashboard.region(GARAGE_REGION), None);
    }
}
