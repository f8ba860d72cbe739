//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `ISM_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Invariants:
//! - Environment variables take precedence over profile settings.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Invalid numeric values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::str::FromStr;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Parse an environment variable into `T`, reporting `message` on failure.
fn parse_env<T: FromStr>(key: &str, message: &str) -> Result<Option<T>, ConfigError> {
    env_var_or_none(key)
        .map(|raw| {
            raw.parse::<T>().map_err(|_| ConfigError::InvalidValue {
                var: key.to_string(),
                message: message.to_string(),
            })
        })
        .transpose()
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none("ISM_BASE_URL") {
        loader.set_base_url(Some(url));
    }
    if let Some(username) = env_var_or_none("ISM_USERNAME") {
        loader.set_username(Some(username));
    }
    if let Some(password) = env_var_or_none("ISM_PASSWORD") {
        loader.set_password(Some(SecretString::new(password.into())));
    }
    if let Some(token) = env_var_or_none("ISM_API_TOKEN") {
        loader.set_api_token(Some(SecretString::new(token.into())));
    }
    if let Some(skip) = parse_env::<bool>("ISM_SKIP_VERIFY", "must be true or false")? {
        loader.set_skip_verify(Some(skip));
    }
    if let Some(secs) = parse_env::<u64>("ISM_TIMEOUT", "must be a number")? {
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(retries) =
        parse_env::<usize>("ISM_MAX_RETRIES", "must be a non-negative integer")?
    {
        loader.set_max_retries(Some(retries));
    }
    if let Some(size) = parse_env::<u64>("ISM_PAGE_SIZE", "must be a positive number")? {
        loader.set_page_size(Some(size));
    }

    // Config path and profile name only apply when not already set via CLI.
    if loader.config_path().is_none()
        && let Some(config_path) = env_var_or_none("ISM_CONFIG_PATH")
    {
        loader.set_config_path(Some(std::path::PathBuf::from(config_path)));
    }
    if loader.profile_name().is_none()
        && let Some(profile) = env_var_or_none("ISM_PROFILE")
    {
        loader.set_profile_name(Some(profile));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_var_or_none_filters_empty_and_whitespace_strings() {
        let key = "_ISM_TEST_ENV_VAR";
        assert!(env_var_or_none(key).is_none());

        temp_env::with_vars([(key, Some(""))], || {
            assert!(env_var_or_none(key).is_none());
        });
        temp_env::with_vars([(key, Some("   "))], || {
            assert!(env_var_or_none(key).is_none());
        });
        temp_env::with_vars([(key, Some(" value "))], || {
            assert_eq!(env_var_or_none(key), Some("value".to_string()));
        });
    }

    #[test]
    #[serial]
    fn test_invalid_timeout_reports_variable() {
        temp_env::with_vars([("ISM_TIMEOUT", Some("soon"))], || {
            let mut loader = ConfigLoader::new();
            let err = apply_env(&mut loader).unwrap_err();
            match err {
                ConfigError::InvalidValue { var, .. } => assert_eq!(var, "ISM_TIMEOUT"),
                other => panic!("unexpected error: {other:?}"),
            }
        });
    }

    #[test]
    #[serial]
    fn test_cli_profile_is_not_overridden_by_env() {
        temp_env::with_vars([("ISM_PROFILE", Some("from-env"))], || {
            let mut loader = ConfigLoader::new().with_profile_name("from-cli".to_string());
            apply_env(&mut loader).unwrap();
            assert_eq!(loader.profile_name().map(String::as_str), Some("from-cli"));
        });
    }
}
