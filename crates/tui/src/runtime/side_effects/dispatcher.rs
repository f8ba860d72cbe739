//! Side effect dispatcher.
//!
//! Routes trigger actions to their handler functions under a tracing span.

use std::time::Instant;

use ism_client::{ManagedIndexService, TransformService};
use tokio::sync::mpsc::Sender;
use tracing::{Instrument, info_span};

use super::{SharedService, TaskTracker, managed_indices, transforms};
use crate::action::Action;

/// Handle side effects (async API calls) for actions.
///
/// Non-trigger actions are ignored.
pub async fn handle_side_effects<S>(
    action: Action,
    service: SharedService<S>,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
) where
    S: ManagedIndexService + TransformService + 'static,
{
    let start = Instant::now();
    let span = info_span!(
        "tui.handle_action",
        action_type = action.type_name(),
        duration_ms = tracing::field::Empty,
    );

    async move {
        handle_action(action, service, tx, task_tracker).await;
        let duration = start.elapsed().as_millis() as i64;
        tracing::Span::current().record("duration_ms", duration);
    }
    .instrument(span)
    .await;
}

async fn handle_action<S>(
    action: Action,
    service: SharedService<S>,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
) where
    S: ManagedIndexService + TransformService + 'static,
{
    match action {
        Action::LoadManagedIndices { seq, query } => {
            managed_indices::handle_load_managed_indices(service, tx, task_tracker, seq, query)
        }
        Action::LoadDataStreams => {
            managed_indices::handle_load_data_streams(service, tx, task_tracker)
        }
        Action::RemovePolicy { indices } => {
            managed_indices::handle_remove_policy(service, tx, task_tracker, indices)
        }
        Action::RetryPolicy { indices, state } => {
            managed_indices::handle_retry_policy(service, tx, task_tracker, indices, state)
        }
        Action::EditRolloverAlias { index, alias } => {
            managed_indices::handle_edit_rollover_alias(service, tx, task_tracker, index, alias)
        }
        Action::LoadSampleData {
            index,
            query,
            filter,
        } => transforms::handle_load_sample_data(service, tx, task_tracker, index, query, filter),
        other => tracing::trace!(action = other.type_name(), "no side effect"),
    }
}
