//! Runtime components for the TUI application.
//!
//! - Terminal management (`TerminalGuard`)
//! - Client creation
//! - Configuration loading and persistence
//! - Async side effect handlers for API calls
//!
//! Does NOT handle:
//! - UI rendering or input handling (see `ism_tui::app` and `ism_tui::ui`).
//! - ISM API details (see `ism_client`).

pub mod client;
pub mod config;
pub mod side_effects;
pub mod terminal;
