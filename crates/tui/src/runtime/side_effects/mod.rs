//! Async side effect handlers for TUI actions.
//!
//! Responsibilities:
//! - Run backend calls triggered by trigger actions.
//! - Spawn each call on a tracked tokio task so the UI loop never blocks.
//! - Send results back via the action channel for state updates.
//!
//! Does NOT handle:
//! - Application state changes (the result actions do that).
//! - Request cancellation; in-flight calls always run to completion and
//!   stale results are dropped by the controller.
//!
//! Invariants:
//! - Every spawned task sends exactly one result action.
//! - Handlers depend on the service traits, never on `IsmClient` directly.

mod dispatcher;
mod managed_indices;
mod transforms;

pub use dispatcher::handle_side_effects;
pub use tokio_util::task::TaskTracker;

use std::sync::Arc;

/// Shared backend handle for spawned tasks.
///
/// The services take `&self`, so no lock is needed around the client.
pub type SharedService<S> = Arc<S>;
