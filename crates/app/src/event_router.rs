//! Event router — sends each inbound frame to exactly one dashboard handler.
//!
//! A frame is decoded as JSON and its `sender` compared against the known
//! senders, in order:
//!
//! | sender       | condition                  | handler                              |
//! |--------------|----------------------------|--------------------------------------|
//! | `asterisk`   | `event == "incoming-call"` | [`Dashboard::incoming_call`]         |
//! | `weather`    |                            | [`Dashboard::weather_event`]         |
//! | `garagedoor` |                            | uppercased `state` → [`GARAGE_REGION`] |
//! | `lrmotion`   |                            | [`Dashboard::reload_mainimg`]        |
//! | `mpd`        |                            | [`Dashboard::mpd_event`]             |
//! | `aprs`       |                            | [`Dashboard::aprs_event`]            |
//! | `wemo`       |                            | [`Dashboard::wemo_event`]            |
//! | `hvac`       |                            | [`Dashboard::hvac_event`]            |
//!
//! Anything else is ignored. Frames that are not JSON are reported to the
//! caller and reach no handler.

use wsevents_domain::event::{EventMessage, Sender};

use crate::ports::{Dashboard, GARAGE_REGION};

/// `event` value an `asterisk` message carries for a ringing line.
pub const INCOMING_CALL: &str = "incoming-call";

/// The branch taken for one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    IncomingCall,
    Weather,
    /// Garage door region updated with this text.
    GarageDoor { text: String },
    LrMotion,
    Mpd,
    Aprs,
    Wemo,
    Hvac,
    /// No branch matched; nothing was invoked.
    Ignored,
}

/// Reasons a frame could not be routed.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// The frame is not valid JSON.
    #[error("failed to decode event message")]
    Decode(#[source] serde_json::Error),

    /// A matched sender lacks a field its handler needs.
    #[error("{sender} event has no string field {field:?}")]
    MissingField { sender: Sender, field: &'static str },
}

/// Decide which branch a message takes, without invoking anything.
///
/// # Errors
///
/// Returns [`RouteError::MissingField`] for a `garagedoor` event without a
/// string `state`.
pub fn classify(message: &EventMessage) -> Result<Route, RouteError> {
    let Some(sender) = message.known_sender() else {
        return Ok(Route::Ignored);
    };

    let route = match sender {
        Sender::Asterisk if message.event() == Some(INCOMING_CALL) => Route::IncomingCall,
        Sender::Asterisk => Route::Ignored,
        Sender::Weather => Route::Weather,
        Sender::GarageDoor => {
            let state = message.state().ok_or(RouteError::MissingField {
                sender,
                field: "state",
            })?;
            Route::GarageDoor {
                text: state.to_uppercase(),
            }
        }
        Sender::LrMotion => Route::LrMotion,
        Sender::Mpd => Route::Mpd,
        Sender::Aprs => Route::Aprs,
        Sender::Wemo => Route::Wemo,
        Sender::Hvac => Route::Hvac,
    };
    Ok(route)
}

/// Stateless dispatcher from raw frames to a [`Dashboard`].
pub struct EventRouter<D> {
    dashboard: D,
}

impl<D: Dashboard> EventRouter<D> {
    pub fn new(dashboard: D) -> Self {
        Self { dashboard }
    }

    #[must_use]
    pub fn dashboard(&self) -> &D {
        &self.dashboard
    }

    /// Decode a raw text frame and dispatch it.
    ///
    /// JSON that is not an object, or has no string `sender`, is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Decode`] when `raw` is not JSON, and any error
    /// from [`classify`]. No handler is invoked on error.
    pub fn handle_message(&self, raw: &str) -> Result<Route, RouteError> {
        let value: serde_json::Value = serde_json::from_str(raw).map_err(RouteError::Decode)?;
        match EventMessage::from_value(value) {
            Some(message) => self.dispatch(&message),
            None => {
                tracing::trace!("ignoring frame without a string sender");
                Ok(Route::Ignored)
            }
        }
    }

    /// Invoke the handler matching an already decoded message.
    ///
    /// # Errors
    ///
    /// Propagates [`classify`] errors.
    pub fn dispatch(&self, message: &EventMessage) -> Result<Route, RouteError> {
        let route = classify(message)?;
        match &route {
            Route::IncomingCall => self.dashboard.incoming_call(message),
            Route::Weather => self.dashboard.weather_event(message),
            Route::GarageDoor { text } => self.dashboard.render_region(GARAGE_REGION, text),
            Route::LrMotion => self.dashboard.reload_mainimg(),
            Route::Mpd => self.dashboard.mpd_event(message),
            Route::Aprs => self.dashboard.aprs_event(message),
            Route::Wemo => self.dashboard.wemo_event(message),
            Route::Hvac => self.dashboard.hvac_event(message),
            Route::Ignored => {}
        }
        tracing::debug!(sender = message.sender(), ?route, "event routed");
        Ok(route)
    }
}
