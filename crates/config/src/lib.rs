//! Configuration management for ISM TUI.
//!
//! This crate provides types and loaders for managing the connection to an
//! OpenSearch Dashboards ISM endpoint from environment variables and files,
//! plus the small amount of UI state persisted between runs.

pub mod constants;
mod loader;
pub mod persistence;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use persistence::{ConfigManager, PersistedState};
pub use types::{AuthConfig, AuthStrategy, Config, ConnectionConfig, ProfileConfig};
