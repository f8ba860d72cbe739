//! Property-based tests for configuration serialization and URL handling.

use proptest::prelude::*;
use secrecy::{ExposeSecret, SecretString};

use ism_config::{AuthStrategy, Config, ConfigLoader};

fn base_url_strategy() -> impl Strategy<Value = String> {
    let host = prop_oneof![
        Just("localhost"),
        Just("dashboards.example.com"),
        Just("opensearch-dashboards.internal"),
    ];
    let scheme = prop_oneof![Just("http"), Just("https")];
    (scheme, host, 1024u16..=65535u16)
        .prop_map(|(scheme, host, port)| format!("{scheme}://{host}:{port}"))
}

proptest! {
    #[test]
    fn prop_token_config_roundtrips(url in base_url_strategy(), token in "[a-zA-Z0-9_.-]{8,64}") {
        let config = Config::with_api_token(url.clone(), SecretString::new(token.clone().into()));
        let json = serde_json::to_string(&config).unwrap();
        let restored: Config = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(restored.connection.base_url, url);
        match restored.auth.strategy {
            AuthStrategy::ApiToken { token: restored_token } => {
                prop_assert_eq!(restored_token.expose_secret(), token.as_str());
            }
            _ => prop_assert!(false, "strategy changed during roundtrip"),
        }
    }

    #[test]
    fn prop_trailing_slashes_are_stripped(url in base_url_strategy(), slashes in 0usize..3) {
        let raw = format!("{url}{}", "/".repeat(slashes));
        let config = ConfigLoader::new()
            .with_base_url(raw)
            .with_api_token("tok".to_string())
            .build()
            .unwrap();
        prop_assert!(!config.connection.base_url.ends_with('/'));
        prop_assert_eq!(config.connection.base_url, url);
    }
}
