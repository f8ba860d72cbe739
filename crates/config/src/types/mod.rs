//! Configuration types for ISM TUI.
//!
//! Responsibilities:
//! - Re-export the connection, authentication, and profile types.
//!
//! Does NOT handle:
//! - Loading configuration (see `loader`).
//! - Persisting configuration (see `persistence`).

mod auth;
mod connection;
mod profile;

pub use auth::{AuthConfig, AuthStrategy};
pub use connection::{Config, ConnectionConfig};
pub use profile::ProfileConfig;
