//! Profile configuration types for ISM TUI.
//!
//! Responsibilities:
//! - Define `ProfileConfig` for storing named connection profiles.
//! - Support partial configuration (all fields optional).
//!
//! Does NOT handle:
//! - Profile loading or merging (see `loader` module).
//! - Profile persistence (see `persistence` module).

use crate::types::auth::opt_secret_string;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Profile configuration for storing named connection profiles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Base URL of the Dashboards server
    pub base_url: Option<String>,
    /// Username for basic authentication
    pub username: Option<String>,
    /// Password for basic authentication
    #[serde(with = "opt_secret_string", skip_serializing_if = "Option::is_none")]
    pub password: Option<SecretString>,
    /// Bearer token
    #[serde(with = "opt_secret_string", skip_serializing_if = "Option::is_none")]
    pub api_token: Option<SecretString>,
    /// Whether to skip TLS verification
    pub skip_verify: Option<bool>,
    /// Request timeout in seconds
    pub timeout_seconds: Option<u64>,
    /// Maximum number of retries for rate-limited requests
    pub max_retries: Option<usize>,
    /// Initial page size of the managed indices table
    pub page_size: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_profile_config_serde_round_trip() {
        let original = ProfileConfig {
            base_url: Some("https://dashboards.example.com".to_string()),
            username: Some("admin".to_string()),
            password: Some(SecretString::new("test-password".to_string().into())),
            api_token: None,
            skip_verify: Some(true),
            timeout_seconds: Some(60),
            max_retries: Some(5),
            page_size: Some(50),
        };

        let json = serde_json::to_string(&original).unwrap();
        let deserialized: ProfileConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.base_url, original.base_url);
        assert_eq!(deserialized.username, original.username);
        assert_eq!(deserialized.skip_verify, original.skip_verify);
        assert_eq!(
            deserialized.password.as_ref().map(|p| p.expose_secret().to_string()),
            Some("test-password".to_string())
        );
        assert!(deserialized.api_token.is_none());
    }

    #[test]
    fn test_partial_profile_uses_defaults() {
        let profile: ProfileConfig =
            serde_json::from_str(r#"{"base_url": "http://localhost:5601"}"#).unwrap();
        assert_eq!(profile.base_url.as_deref(), Some("http://localhost:5601"));
        assert!(profile.username.is_none());
        assert!(profile.password.is_none());
        assert!(profile.page_size.is_none());
    }
}
