//! Path helpers for configuration file locations.
//!
//! Uses the `directories` crate for platform-appropriate paths.

use std::path::PathBuf;

use anyhow::Context;

/// Returns the default path to the configuration file.
///
/// - Linux/macOS: `~/.config/ism-tui/config.json`
/// - Windows: `%AppData%\ism-tui\config.json`
pub fn default_config_path() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", "ism-tui")
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_path_ends_with_config_json() {
        let path = default_config_path().unwrap();
        assert!(path.ends_with("config.json"));
        assert!(path.to_string_lossy().contains("ism-tui"));
    }
}
