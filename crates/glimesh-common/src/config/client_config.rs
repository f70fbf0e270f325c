//! Client configuration
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Protocol version sent in the `vsn` query parameter
pub const PROTOCOL_VERSION: &str = "2.0.0";

/// Main client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub env: Environment,
    /// WebSocket endpoint of the GraphQL API
    #[serde(default = "default_websocket_url")]
    pub websocket_url: String,
    /// Client ID, grants read only access
    #[serde(default)]
    pub client_id: Option<String>,
    /// Access token, grants write access
    #[serde(default)]
    pub access_token: Option<String>,
    /// Join reference sent with every request
    #[serde(default = "default_join_ref")]
    pub join_ref: String,
    #[serde(default = "default_heartbeat_interval_ms")]
    pub heartbeat_interval_ms: u64,
    /// How long a query or mutation waits for its reply
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    /// Capacity of the event broadcast channel
    #[serde(default = "default_event_buffer")]
    pub event_buffer: usize,
    /// Channel whose chat the CLI follows
    #[serde(default)]
    pub channel_id: Option<i64>,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

// Default value functions
fn default_websocket_url() -> String {
    "wss://glimesh.tv/api/graph/websocket".to_string()
}

fn default_join_ref() -> String {
    format!("glimesh-{}", uuid::Uuid::new_v4())
}

fn default_heartbeat_interval_ms() -> u64 {
    30_000
}

fn default_request_timeout_ms() -> u64 {
    7_000
}

fn default_event_buffer() -> usize {
    256
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            env: Environment::default(),
            websocket_url: default_websocket_url(),
            client_id: None,
            access_token: None,
            join_ref: default_join_ref(),
            heartbeat_interval_ms: default_heartbeat_interval_ms(),
            request_timeout_ms: default_request_timeout_ms(),
            event_buffer: default_event_buffer(),
            channel_id: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a numeric variable cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration through a variable lookup function
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            env: match non_empty("APP_ENV") {
                Some(s) => Environment::parse(&s)
                    .ok_or(ConfigError::InvalidValue("APP_ENV", s))?,
                None => Environment::default(),
            },
            websocket_url: non_empty("GLIMESH_WEBSOCKET_URL")
                .unwrap_or_else(default_websocket_url),
            client_id: non_empty("GLIMESH_CLIENT_ID"),
            access_token: non_empty("GLIMESH_ACCESS_TOKEN"),
            join_ref: non_empty("GLIMESH_JOIN_REF").unwrap_or_else(default_join_ref),
            heartbeat_interval_ms: parse_or(
                "GLIMESH_HEARTBEAT_INTERVAL_MS",
                non_empty("GLIMESH_HEARTBEAT_INTERVAL_MS"),
                default_heartbeat_interval_ms,
            )?,
            request_timeout_ms: parse_or(
                "GLIMESH_REQUEST_TIMEOUT_MS",
                non_empty("GLIMESH_REQUEST_TIMEOUT_MS"),
                default_request_timeout_ms,
            )?,
            event_buffer: parse_or(
                "GLIMESH_EVENT_BUFFER",
                non_empty("GLIMESH_EVENT_BUFFER"),
                default_event_buffer,
            )?,
            channel_id: parse_optional("GLIMESH_CHANNEL_ID", non_empty("GLIMESH_CHANNEL_ID"))?,
        })
    }

    /// Set the WebSocket endpoint
    #[must_use]
    pub fn with_websocket_url(mut self, url: impl Into<String>) -> Self {
        self.websocket_url = url.into();
        self
    }

    /// Set the heartbeat interval
    #[must_use]
    pub fn with_heartbeat_interval(mut self, interval: Duration) -> Self {
        self.heartbeat_interval_ms = interval.as_millis() as u64;
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout_ms = timeout.as_millis() as u64;
        self
    }

    /// Heartbeat period, never zero
    #[must_use]
    pub fn heartbeat_interval(&self) -> Duration {
        Duration::from_millis(self.heartbeat_interval_ms.max(1))
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

fn parse_or<T, D>(key: &'static str, raw: Option<String>, default: D) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    D: FnOnce() -> T,
{
    match raw {
        Some(s) => s
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, s)),
        None => Ok(default()),
    }
}

fn parse_optional<T>(key: &'static str, raw: Option<String>) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
{
    raw.map(|s| {
        s.trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, s))
    })
    .transpose()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
