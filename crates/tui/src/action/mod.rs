//! Action protocol for async TUI event handling.
//!
//! Actions carry user input, side-effect triggers, and the results of
//! backend calls back to the app state machine.
//!
//! Does NOT handle:
//! - Applying actions to state (see `App::update`).
//! - Executing side effects (see `runtime::side_effects`).

pub mod variants;

pub use variants::Action;
