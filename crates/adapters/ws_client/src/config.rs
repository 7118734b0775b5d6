//! Event feed connection configuration.

use std::time::Duration;

use serde::Deserialize;

/// Where to read events from and how long to wait before reconnecting.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// WebSocket URL of the event service.
    pub url: String,
    /// Fixed pause between a dropped connection and the next attempt, in seconds.
    pub reconnect_interval_secs: u64,
}

impl ClientConfig {
    #[must_use]
    pub fn reconnect_interval(&self) -> Duration {
        Duration::from_secs(self.reconnect_interval_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: "ws://server:5003/events".to_string(),
            reconnect_interval_secs: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_have_sensible_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.url, "ws://server:5003/events");
        assert_eq!(config.reconnect_interval(), Duration::from_secs(5));
    }

    #[test]
    fn should_deserialize_from_toml() {
        let toml = r#"
            url = "ws://10.0.0.2:5003/events"
            reconnect_interval_secs = 30
        "#;
        let config: ClientConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.url, "ws://10.0.0.2:5003/events");
        assert_eq!(config.reconnect_interval_secs, 30);
    }

    #[test]
    fn should_use_defaults_for_missing_fields() {
        let config: ClientConfig = toml::from_str(r#"url = "ws://hub/events""#).unwrap();
        assert_eq!(config.url, "ws://hub/events");
        assert_eq!(config.reconnect_interval_secs, 5);
    }
}
