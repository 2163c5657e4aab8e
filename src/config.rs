//! Client configuration with environment overrides.

use crate::protocol::DEFAULT_MAX_FRAME_LEN;

/// Connection settings for [`crate::Client`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Broker address, `host:port`.
    pub addr: String,
    /// Sent as `client_id` in request headers v1 and later.
    pub client_id: String,
    /// Largest response frame accepted, in bytes.
    pub max_frame_len: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:9092".to_string(),
            client_id: "kafka-wire".to_string(),
            max_frame_len: DEFAULT_MAX_FRAME_LEN,
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `KAFKA_WIRE_ADDR`, `KAFKA_WIRE_CLIENT_ID` and
    /// `KAFKA_WIRE_MAX_FRAME_LEN`. Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            addr: std::env::var("KAFKA_WIRE_ADDR").unwrap_or(defaults.addr),
            client_id: std::env::var("KAFKA_WIRE_CLIENT_ID").unwrap_or(defaults.client_id),
            max_frame_len: std::env::var("KAFKA_WIRE_MAX_FRAME_LEN")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_frame_len),
        }
    }
}
