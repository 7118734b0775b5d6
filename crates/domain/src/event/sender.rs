//! Sender — the closed set of subsystems the dashboard knows about.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A subsystem that publishes events the dashboard reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// Phone system.
    Asterisk,
    Weather,
    #[serde(rename = "garagedoor")]
    GarageDoor,
    /// Living-room motion sensor.
    #[serde(rename = "lrmotion")]
    LrMotion,
    /// Music player daemon.
    Mpd,
    Aprs,
    Wemo,
    Hvac,
}

impl Sender {
    /// Every sender, in dispatch order.
    pub const ALL: [Self; 8] = [
        Self::Asterisk,
        Self::Weather,
        Self::GarageDoor,
        Self::LrMotion,
        Self::Mpd,
        Self::Aprs,
        Self::Wemo,
        Self::Hvac,
    ];

    /// The wire tag for this sender.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asterisk => "asterisk",
            Self::Weather => "weather",
            Self::GarageDoor => "garagedoor",
            Self::LrMotion => "lrmotion",
            Self::Mpd => "mpd",
            Self::Aprs => "aprs",
            Self::Wemo => "wemo",
            Self::Hvac => "hvac",
        }
    }
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a tag names no known sender.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sender {0:?}")]
pub struct UnknownSender(pub String);

impl FromStr for Sender {
    type Err = UnknownSender;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sender| sender.as_str() == s)
            .ok_or_else(|| UnknownSender(s.to_string()))
    }
}
