//! Configuration persistence for profiles and user preferences.
//!
//! Responsibilities:
//! - Resolve the platform configuration file path.
//! - Read and write user preferences (`PersistedState`) to disk.
//! - Manage named connection profiles.
//! - Backup corrupt config files before overwriting.
//!
//! Does NOT handle:
//! - Loading environment variables (see `loader`).
//! - High-level configuration merging (see `loader`).
//!
//! Invariants:
//! - Profile names are unique within a configuration file.
//! - Corrupt config files are backed up before being overwritten.

use std::path::{Path, PathBuf};

mod manager;
mod path;
mod state;

pub use manager::ConfigManager;
pub use path::default_config_path;
pub use state::{ConfigFileError, PersistedState};

/// Creates a backup of a corrupt config file before it is overwritten.
///
/// The original file is renamed to `<name>.corrupt.{timestamp}` so its
/// contents stay recoverable while no longer blocking startup.
pub(crate) fn create_corrupt_backup(path: &Path) -> Result<PathBuf, std::io::Error> {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let backup_path = path.with_extension(format!("corrupt.{}", timestamp));

    std::fs::rename(path, &backup_path)?;

    Ok(backup_path)
}
