//! Transform preview side effect handlers.

use std::sync::Arc;

use ism_client::TransformService;
use ism_client::models::SampleDataQuery;
use serde_json::Value;
use tokio::sync::mpsc::Sender;

use super::{SharedService, TaskTracker};
use crate::action::Action;

pub fn handle_load_sample_data<S>(
    service: SharedService<S>,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    index: String,
    query: SampleDataQuery,
    filter: Option<Value>,
) where
    S: TransformService + 'static,
{
    task_tracker.spawn(async move {
        let result = service
            .search_sample_data(&index, query, filter.as_ref())
            .await
            .map_err(Arc::new);
        let _ = tx.send(Action::SampleDataLoaded(result)).await;
    });
}
