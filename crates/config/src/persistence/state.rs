//! State types and serialization for configuration persistence.
//!
//! Responsibilities:
//! - Define persisted state types (`PersistedState`).
//! - Define internal config file representation (`ConfigFile`).
//! - Read and parse config files.
//!
//! Does NOT handle:
//! - Writing config files (handled by the manager via atomic save).
//!
//! Invariants:
//! - Unknown fields are ignored so older binaries can read newer files.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::ProfileConfig;

/// User preferences that persist across application runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    /// Query string of the managed indices view when the app last quit.
    ///
    /// Mirrors the browser location of the web dashboard so search, sort,
    /// and the data stream toggle survive a restart.
    pub managed_indices_location: Option<String>,
    /// Last profile used to connect.
    pub last_profile: Option<String>,
}

/// Internal representation of the config file on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct ConfigFile {
    /// Named profiles for different Dashboards environments.
    #[serde(default)]
    pub profiles: BTreeMap<String, ProfileConfig>,
    /// Persisted UI state.
    #[serde(default)]
    pub state: Option<PersistedState>,
}

/// Errors that can occur when reading the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Reads and parses the config file from disk.
pub(crate) fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigFileError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigFileError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str::<ConfigFile>(&content).map_err(|e| ConfigFileError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}
