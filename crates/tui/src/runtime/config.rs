//! Configuration loading and persistence for the TUI.
//!
//! Responsibilities:
//! - Load configuration with CLI and environment variable overrides.
//! - Open the persisted UI state.
//! - Save persisted state on application exit.
//!
//! Invariants:
//! - Precedence: CLI args > env vars > profile config > defaults.
//! - `load_dotenv()` is called before anything reads the environment.

use std::sync::Arc;

use anyhow::{Context, Result};
use ism_config::{Config, ConfigLoader, ConfigManager, PersistedState};
use tokio::sync::Mutex;

use crate::app::App;
use crate::cli::Cli;

/// Build a loader with the CLI overrides and environment applied.
pub fn build_loader_with_cli(cli: &Cli) -> Result<ConfigLoader> {
    let mut loader = ConfigLoader::new().load_dotenv()?;

    if let Some(config_path) = &cli.config_path {
        loader = loader.with_config_path(config_path.clone());
    }
    if let Some(profile) = &cli.profile {
        loader = loader.with_profile_name(profile.clone());
    }

    Ok(loader.from_env()?)
}

/// Load the connection configuration.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let config = build_loader_with_cli(cli)?
        .from_profile()?
        .build()
        .context("failed to load configuration")?;
    tracing::info!(
        base_url = %config.connection.base_url,
        page_size = config.page_size,
        "configuration loaded"
    );
    Ok(config)
}

/// Open the persisted state file, honoring `--config-path`.
pub fn open_config_manager(cli: &Cli) -> Result<ConfigManager> {
    match &cli.config_path {
        Some(path) => ConfigManager::new_with_path(path.clone()),
        None => ConfigManager::new(),
    }
}

/// State to restore on startup; `--fresh` ignores what was saved.
pub fn initial_state(cli: &Cli, manager: &ConfigManager) -> PersistedState {
    if cli.fresh {
        tracing::info!("ignoring persisted state (--fresh)");
        return PersistedState::default();
    }
    manager.load()
}

pub async fn save_and_quit(app: &App, config_manager: &Arc<Mutex<ConfigManager>>) -> Result<()> {
    let state = app.persisted_state();
    let mut cm = config_manager.lock().await;
    cm.save(&state)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serial_test::serial;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("ism-tui").chain(args.iter().copied()))
    }

    #[test]
    #[serial]
    fn test_load_config_from_env() {
        temp_env::with_vars(
            [
                ("DOTENV_DISABLED", Some("1")),
                ("ISM_BASE_URL", Some("https://dashboards.example.com:5601/")),
                ("ISM_API_TOKEN", Some("token")),
                ("ISM_PAGE_SIZE", Some("50")),
                ("ISM_PROFILE", None),
                ("ISM_CONFIG_PATH", None),
            ],
            || {
                let config = load_config(&cli(&[])).unwrap();
                assert_eq!(
                    config.connection.base_url,
                    "https://dashboards.example.com:5601"
                );
                assert_eq!(config.page_size, 50);
            },
        );
    }

    #[test]
    #[serial]
    fn test_fresh_ignores_saved_location() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut manager = ConfigManager::new_with_path(path.clone()).unwrap();
        manager
            .save(&PersistedState {
                managed_indices_location: Some("from=0&size=50".to_string()),
                last_profile: None,
            })
            .unwrap();

        let path_arg = path.to_string_lossy().to_string();
        let manager = open_config_manager(&cli(&["--config-path", &path_arg])).unwrap();
        assert_eq!(
            initial_state(&cli(&[]), &manager)
                .managed_indices_location
                .as_deref(),
            Some("from=0&size=50")
        );
        assert_eq!(
            initial_state(&cli(&["--fresh"]), &manager),
            PersistedState::default()
        );
    }
}
