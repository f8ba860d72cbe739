//! Managed index and data stream side effect handlers.

use std::sync::Arc;

use ism_client::ManagedIndexService;
use ism_client::models::ManagedIndicesQuery;
use tokio::sync::mpsc::Sender;

use super::{SharedService, TaskTracker};
use crate::action::Action;

pub fn handle_load_managed_indices<S>(
    service: SharedService<S>,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    seq: u64,
    query: ManagedIndicesQuery,
) where
    S: ManagedIndexService + 'static,
{
    task_tracker.spawn(async move {
        let result = service.get_managed_indices(&query).await.map_err(Arc::new);
        if let Err(e) = &result {
            tracing::warn!(seq, error = %e, "managed indices request failed");
        }
        let _ = tx.send(Action::ManagedIndicesLoaded { seq, result }).await;
    });
}

pub fn handle_load_data_streams<S>(
    service: SharedService<S>,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
) where
    S: ManagedIndexService + 'static,
{
    task_tracker.spawn(async move {
        let result = service.get_data_streams().await.map_err(Arc::new);
        let _ = tx.send(Action::DataStreamsLoaded(result)).await;
    });
}

pub fn handle_remove_policy<S>(
    service: SharedService<S>,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    indices: Vec<String>,
) where
    S: ManagedIndexService + 'static,
{
    tracing::info!(count = indices.len(), "removing policy");
    task_tracker.spawn(async move {
        let result = service.remove_policy(&indices).await.map_err(Arc::new);
        let _ = tx.send(Action::PolicyRemoved(result)).await;
    });
}

pub fn handle_retry_policy<S>(
    service: SharedService<S>,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    indices: Vec<String>,
    state: Option<String>,
) where
    S: ManagedIndexService + 'static,
{
    tracing::info!(count = indices.len(), state = ?state, "retrying policy");
    task_tracker.spawn(async move {
        let result = service
            .retry_policy(&indices, state.as_deref())
            .await
            .map_err(Arc::new);
        let _ = tx.send(Action::PolicyRetried(result)).await;
    });
}

pub fn handle_edit_rollover_alias<S>(
    service: SharedService<S>,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    index: String,
    alias: String,
) where
    S: ManagedIndexService + 'static,
{
    tracing::info!(%index, %alias, "editing rollover alias");
    task_tracker.spawn(async move {
        let result = service
            .edit_rollover_alias(&index, &alias)
            .await
            .map_err(Arc::new);
        let _ = tx.send(Action::RolloverAliasEdited { index, result }).await;
    });
}
