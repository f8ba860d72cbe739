//! Profile and state management for configuration persistence.
//!
//! Responsibilities:
//! - Load the config file once and cache it.
//! - Profile CRUD operations.
//! - Atomic save operations.
//!
//! Invariants:
//! - Profile names are unique within a config file.
//! - Writes are atomic (temp file + rename).

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};

use super::create_corrupt_backup;
use super::path::default_config_path;
use super::state::{ConfigFile, ConfigFileError, PersistedState, read_config_file};
use crate::env_var_or_none;
use crate::types::ProfileConfig;

/// Manages loading and saving user configuration to disk.
#[derive(Debug)]
pub struct ConfigManager {
    /// Path to the configuration file.
    config_path: PathBuf,
    /// Cached config file data (profiles + state).
    config_file: ConfigFile,
}

impl ConfigManager {
    /// Creates a new `ConfigManager` using platform-standard config directories.
    ///
    /// If the `ISM_CONFIG_PATH` environment variable is set (and not empty/whitespace),
    /// it is used instead of the default path.
    pub fn new() -> Result<Self> {
        let config_path = match env_var_or_none("ISM_CONFIG_PATH") {
            Some(path_str) => PathBuf::from(path_str),
            None => default_config_path()?,
        };
        Self::new_with_path(config_path)
    }

    /// Creates a new `ConfigManager` with a specific config file path.
    ///
    /// If the config file exists but cannot be read or parsed, it is backed
    /// up with a `.corrupt.{timestamp}` extension and defaults are used.
    pub fn new_with_path(config_path: PathBuf) -> Result<Self> {
        let config_file = if config_path.exists() {
            match read_config_file(&config_path) {
                Ok(file) => file,
                Err(e) => {
                    let is_not_found = matches!(
                        &e,
                        ConfigFileError::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound
                    );

                    if !is_not_found {
                        match create_corrupt_backup(&config_path) {
                            Ok(backup_path) => {
                                tracing::warn!(
                                    path = %config_path.display(),
                                    backup_path = %backup_path.display(),
                                    error = %e,
                                    "Config file is corrupt, backed up and using defaults"
                                );
                            }
                            Err(backup_err) => {
                                tracing::error!(
                                    path = %config_path.display(),
                                    error = %e,
                                    backup_error = %backup_err,
                                    "Config file is corrupt and backup failed, using defaults"
                                );
                            }
                        }
                    }
                    ConfigFile::default()
                }
            }
        } else {
            ConfigFile::default()
        };

        Ok(Self {
            config_path,
            config_file,
        })
    }

    /// Returns the path to the configuration file.
    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Loads persisted state, falling back to defaults.
    pub fn load(&self) -> PersistedState {
        self.config_file.state.clone().unwrap_or_default()
    }

    /// Saves persisted state to disk, preserving profiles.
    pub fn save(&mut self, state: &PersistedState) -> Result<()> {
        self.config_file.state = Some(state.clone());
        self.atomic_save()
    }

    /// All configured profiles keyed by name.
    pub fn list_profiles(&self) -> &BTreeMap<String, ProfileConfig> {
        &self.config_file.profiles
    }

    /// Create or replace a profile.
    pub fn save_profile(&mut self, name: &str, profile: ProfileConfig) -> Result<()> {
        self.config_file.profiles.insert(name.to_string(), profile);
        self.atomic_save()
    }

    /// Delete a profile by name.
    pub fn delete_profile(&mut self, name: &str) -> Result<()> {
        if self.config_file.profiles.remove(name).is_none() {
            anyhow::bail!("Profile '{}' not found", name);
        }
        self.atomic_save()
    }

    /// Atomically saves the current configuration to disk.
    ///
    /// Writes to a temporary file first, then renames it to the target path.
    fn atomic_save(&self) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let temp_path = self.config_path.with_extension("tmp");
        let content = serde_json::to_string_pretty(&self.config_file)?;
        std::fs::write(&temp_path, content).context("Failed to write temporary config file")?;

        std::fs::rename(&temp_path, &self.config_path)
            .context("Failed to rename temporary config file")?;

        tracing::debug!(path = %self.config_path.display(), "Config saved atomically");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_reload_state() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut manager = ConfigManager::new_with_path(path.clone()).unwrap();
        let state = PersistedState {
            managed_indices_location: Some("search=logs".to_string()),
            last_profile: Some("dev".to_string()),
        };
        manager.save(&state).unwrap();

        let reloaded = ConfigManager::new_with_path(path).unwrap();
        assert_eq!(reloaded.load(), state);
    }

    #[test]
    fn test_save_preserves_profiles() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut manager = ConfigManager::new_with_path(path.clone()).unwrap();
        manager
            .save_profile(
                "prod",
                ProfileConfig {
                    base_url: Some("https://dash.example.com".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        manager.save(&PersistedState::default()).unwrap();

        let reloaded = ConfigManager::new_with_path(path).unwrap();
        assert!(reloaded.list_profiles().contains_key("prod"));
    }

    #[test]
    fn test_corrupt_file_is_backed_up() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ definitely not json").unwrap();

        let manager = ConfigManager::new_with_path(path.clone()).unwrap();
        assert_eq!(manager.load(), PersistedState::default());
        assert!(!path.exists());

        let backups: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().contains("corrupt"))
            .collect();
        assert_eq!(backups.len(), 1);
    }

    #[test]
    fn test_delete_missing_profile_errors() {
        let dir = tempdir().unwrap();
        let mut manager = ConfigManager::new_with_path(dir.path().join("config.json")).unwrap();
        assert!(manager.delete_profile("nope").is_err());
    }
}
