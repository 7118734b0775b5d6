//! Dashboard port — the display collaborators inbound events are routed to.
//!
//! Each method stands for one externally implemented handler. The router
//! calls at most one of them per event, synchronously, from a single task.

use wsevents_domain::event::EventMessage;

/// Identifier of the region showing the garage door state.
pub const GARAGE_REGION: &str = "garage";

/// Handlers the event router dispatches to.
pub trait Dashboard {
    /// An `asterisk` event announcing an incoming call.
    fn incoming_call(&self, payload: &EventMessage);

    fn weather_event(&self, payload: &EventMessage);

    fn mpd_event(&self, payload: &EventMessage);

    fn aprs_event(&self, payload: &EventMessage);

    fn wemo_event(&self, payload: &EventMessage);

    fn hvac_event(&self, payload: &EventMessage);

    /// Refresh the main camera image. Takes no payload.
    fn reload_mainimg(&self);

    /// Replace the text shown in a named display region.
    fn render_region(&self, region: &str, text: &str);
}

impl<T: Dashboard + ?Sized> Dashboard for std::sync::Arc<T> {
    fn incoming_call(&self, payload: &EventMessage) {
        (**self).incoming_call(payload);
    }

    fn weather_event(&self, payload: &EventMessage) {
        (**self).weather_event(payload);
    }

    fn mpd_event(&self, payload: &EventMessage) {
        (**self).mpd_event(payload);
    }

    fn aprs_event(&self, payload: &EventMessage) {
        (**self).aprs_event(payload);
    }

    fn wemo_event(&self, payload: &EventMessage) {
        (**self).wemo_event(payload);
    }

    fn hvac_event(&self, payload: &EventMessage) {
        (**self).hvac_event(payload);
    }

    fn reload_mainimg(&self) {
        (**self).reload_mainimg();
    }

    fn render_region(&self, region: &str, text: &str) {
        (**self).render_region(region, text);
    }
}
