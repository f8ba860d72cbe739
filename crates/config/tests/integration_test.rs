//! Integration tests for configuration loading.
//!
//! These tests drive the `ConfigLoader` builder chain the way the TUI
//! entrypoint does: profile file first, then environment, then flags.

use ism_config::{
    AuthStrategy, ConfigError, ConfigLoader, ConfigManager, PersistedState, ProfileConfig,
};
use secrecy::{ExposeSecret, SecretString};
use serial_test::serial;

const ISM_VARS: [&str; 10] = [
    "ISM_BASE_URL",
    "ISM_USERNAME",
    "ISM_PASSWORD",
    "ISM_API_TOKEN",
    "ISM_SKIP_VERIFY",
    "ISM_TIMEOUT",
    "ISM_MAX_RETRIES",
    "ISM_PAGE_SIZE",
    "ISM_CONFIG_PATH",
    "ISM_PROFILE",
];

fn cleared_env() -> Vec<(&'static str, Option<&'static str>)> {
    ISM_VARS.iter().map(|k| (*k, None)).collect()
}

fn write_profile(path: &std::path::Path, name: &str, profile: ProfileConfig) {
    let mut manager = ConfigManager::new_with_path(path.to_path_buf()).unwrap();
    manager.save_profile(name, profile).unwrap();
}

#[test]
#[serial]
fn test_profile_values_are_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    write_profile(
        &path,
        "staging",
        ProfileConfig {
            base_url: Some("https://staging.example.com:5601".to_string()),
            username: Some("ops".to_string()),
            password: Some(SecretString::new("hunter2".to_string().into())),
            page_size: Some(50),
            ..Default::default()
        },
    );

    temp_env::with_vars(cleared_env(), || {
        let config = ConfigLoader::new()
            .with_config_path(path.clone())
            .with_profile_name("staging".to_string())
            .from_profile()
            .unwrap()
            .from_env()
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(config.connection.base_url, "https://staging.example.com:5601");
        assert_eq!(config.page_size, 50);
        match config.auth.strategy {
            AuthStrategy::Basic { username, password } => {
                assert_eq!(username, "ops");
                assert_eq!(password.expose_secret(), "hunter2");
            }
            other => panic!("unexpected strategy: {other:?}"),
        }
    });
}

#[test]
#[serial]
fn test_env_overrides_profile() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    write_profile(
        &path,
        "default",
        ProfileConfig {
            base_url: Some("https://profile.example.com".to_string()),
            api_token: Some(SecretString::new("profile-token".to_string().into())),
            ..Default::default()
        },
    );

    let mut vars = cleared_env();
    vars.retain(|(k, _)| *k != "ISM_BASE_URL");
    vars.push(("ISM_BASE_URL", Some("https://env.example.com")));

    temp_env::with_vars(vars, || {
        let config = ConfigLoader::new()
            .with_config_path(path.clone())
            .with_profile_name("default".to_string())
            .from_profile()
            .unwrap()
            .from_env()
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.connection.base_url, "https://env.example.com");
        assert!(matches!(config.auth.strategy, AuthStrategy::ApiToken { .. }));
    });
}

#[test]
#[serial]
fn test_invalid_env_page_size_is_rejected_at_build() {
    let mut vars = cleared_env();
    vars.retain(|(k, _)| *k != "ISM_PAGE_SIZE");
    vars.push(("ISM_PAGE_SIZE", Some("33")));

    temp_env::with_vars(vars, || {
        let err = ConfigLoader::new()
            .with_base_url("http://localhost:5601".to_string())
            .with_api_token("tok".to_string())
            .from_env()
            .unwrap()
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPageSize { .. }));
    });
}

#[test]
fn test_persisted_location_survives_profile_writes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let mut manager = ConfigManager::new_with_path(path.clone()).unwrap();
    manager
        .save(&PersistedState {
            managed_indices_location: Some("from=20&size=20&showDataStreams=true".to_string()),
            last_profile: None,
        })
        .unwrap();
    manager
        .save_profile("local", ProfileConfig::default())
        .unwrap();

    let reloaded = ConfigManager::new_with_path(path).unwrap();
    assert_eq!(
        reloaded.load().managed_indices_location.as_deref(),
        Some("from=20&size=20&showDataStreams=true")
    );
    assert!(reloaded.list_profiles().contains_key("local"));
}
