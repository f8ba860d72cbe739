//! Profile file loading for configuration.
//!
//! Invariants:
//! - Profile settings are applied before environment variables (env vars take precedence).
//! - Missing profiles are recorded for later error handling in build().

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::persistence::{ConfigManager, default_config_path};
use crate::types::ProfileConfig;

/// Apply profile configuration from the config file to the loader.
///
/// If the profile is not found, this records the missing profile name
/// for later error handling in `build()`.
pub fn apply_profile(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let profile_name = match loader.profile_name() {
        Some(name) => name.clone(),
        None => return Ok(()),
    };

    let config_path = match loader.config_path() {
        Some(path) => path.clone(),
        None => {
            default_config_path().map_err(|e| ConfigError::ConfigDirUnavailable(e.to_string()))?
        }
    };

    if !config_path.exists() {
        loader.set_profile_missing(Some(profile_name));
        return Ok(());
    }

    let manager = ConfigManager::new_with_path(config_path.clone())
        .map_err(|_| ConfigError::ConfigFileRead { path: config_path })?;

    match manager.list_profiles().get(&profile_name) {
        Some(profile) => apply_profile_config(loader, profile),
        None => loader.set_profile_missing(Some(profile_name)),
    }
    Ok(())
}

fn apply_profile_config(loader: &mut ConfigLoader, profile: &ProfileConfig) {
    if let Some(url) = &profile.base_url {
        loader.set_base_url(Some(url.clone()));
    }
    if let Some(username) = &profile.username {
        loader.set_username(Some(username.clone()));
    }
    if let Some(password) = &profile.password {
        loader.set_password(Some(password.clone()));
    }
    if let Some(token) = &profile.api_token {
        loader.set_api_token(Some(token.clone()));
    }
    if let Some(skip) = profile.skip_verify {
        loader.set_skip_verify(Some(skip));
    }
    if let Some(secs) = profile.timeout_seconds {
        loader.set_timeout(Some(std::time::Duration::from_secs(secs)));
    }
    if let Some(retries) = profile.max_retries {
        loader.set_max_retries(Some(retries));
    }
    if let Some(size) = profile.page_size {
        loader.set_page_size(Some(size));
    }
}
