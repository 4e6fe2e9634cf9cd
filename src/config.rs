//! Transport configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the default HTTP transport
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransportConfig {
    /// Base URL of the cluster node to talk to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in milliseconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_ms: u64,

    /// Request timeout in milliseconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,

    /// Authentication to present on every request
    #[serde(default)]
    pub auth: AuthMethod,
}

fn default_base_url() -> String {
    "http://localhost:9200".to_string()
}

fn default_connect_timeout() -> u64 {
    5000
}

fn default_request_timeout() -> u64 {
    30000
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_ms: default_connect_timeout(),
            request_timeout_ms: default_request_timeout(),
            auth: AuthMethod::default(),
        }
    }
}

impl TransportConfig {
    /// Point the default config at a specific node
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

/// Authentication methods understood by the HTTP transport
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum AuthMethod {
    /// No authentication header
    #[default]
    None,

    /// HTTP basic auth
    Basic { username: String, password: String },

    /// Pre-encoded API key (`Authorization: ApiKey ...`)
    ApiKey { key: String },
}
