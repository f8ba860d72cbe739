//! Connection configuration types for ISM TUI.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, timeouts, retries).
//! - Define the main `Config` structure combining connection, auth, and list defaults.
//! - Provide serialization helpers for `Duration`.
//!
//! Does NOT handle:
//! - Configuration loading from files/env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).
//! - Default values come from `constants`, not magic numbers.

use crate::constants::{
    DEFAULT_DASHBOARDS_PORT, DEFAULT_MAX_RETRIES, DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECS,
};
use crate::types::auth::{AuthConfig, AuthStrategy};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection configuration for the Dashboards server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the Dashboards server (e.g., http://localhost:5601)
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
    /// Maximum number of retries for rate-limited requests
    pub max_retries: usize,
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
    /// Initial page size of the managed indices table
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl Default for Config {
    /// Development defaults: a local Dashboards instance with the demo
    /// security configuration (`admin`/`admin`).
    fn default() -> Self {
        Self {
            connection: ConnectionConfig {
                base_url: format!("http://localhost:{DEFAULT_DASHBOARDS_PORT}"),
                skip_verify: false,
                timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
                max_retries: DEFAULT_MAX_RETRIES,
            },
            auth: AuthConfig {
                strategy: AuthStrategy::Basic {
                    username: "admin".to_string(),
                    password: SecretString::new("admin".to_string().into()),
                },
            },
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    /// Create a config with an API token for the given base URL.
    pub fn with_api_token(base_url: String, token: SecretString) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                ..Self::default().connection
            },
            auth: AuthConfig {
                strategy: AuthStrategy::ApiToken { token },
            },
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_targets_local_dashboards() {
        let config = Config::default();
        assert_eq!(config.connection.base_url, "http://localhost:5601");
        assert_eq!(config.connection.timeout, Duration::from_secs(30));
        assert_eq!(config.page_size, 20);
    }

    #[test]
    fn test_timeout_serializes_as_seconds() {
        let config = Config::default();
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["connection"]["timeout"], 30);
    }

    #[test]
    fn test_page_size_defaults_when_missing() {
        let json = r#"{
            "connection": {"base_url": "http://dash:5601", "skip_verify": false, "timeout": 10, "max_retries": 1},
            "auth": {"type": "token", "token": "abc"}
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.page_size, 20);
        assert_eq!(config.connection.timeout, Duration::from_secs(10));
    }
}
