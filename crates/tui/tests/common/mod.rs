//! Shared helpers for the TUI integration tests.
//!
//! Recording fakes stand in for the notification, history, and breadcrumb
//! collaborators; records are built from JSON the way the backend sends them.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use ism_client::models::{ManagedIndexItem, ManagedIndicesResponse};
use ism_client::{AuthStrategy, ClientError, IsmClient};
use ism_tui::action::Action;
use ism_tui::runtime::side_effects::{TaskTracker, handle_side_effects};
use ism_tui::{Chrome, History, Notifier, ToastLevel};
use secrecy::SecretString;
use serde_json::{Value, json};
use tokio::sync::mpsc;
use wiremock::MockServer;

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub notes: Vec<(ToastLevel, String)>,
}

impl RecordingNotifier {
    pub fn messages(&self, level: ToastLevel) -> Vec<&str> {
        self.notes
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.as_str())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, level: ToastLevel, message: String) {
        self.notes.push((level, message));
    }
}

#[derive(Debug, Default)]
pub struct RecordingHistory {
    pub replaced: Vec<String>,
    pub pushed: Vec<String>,
}

impl History for RecordingHistory {
    fn replace(&mut self, location: String) {
        self.replaced.push(location);
    }

    fn push(&mut self, location: String) {
        self.pushed.push(location);
    }
}

#[derive(Debug, Default)]
pub struct RecordingChrome {
    pub crumbs: Vec<String>,
}

impl Chrome for RecordingChrome {
    fn set_breadcrumbs(&mut self, crumbs: &[&str]) {
        self.crumbs = crumbs.iter().map(|c| c.to_string()).collect();
    }
}

/// A managed index record with optional metadata.
pub fn record(index: &str, data_stream: Option<&str>, meta: Value) -> ManagedIndexItem {
    serde_json::from_value(json!({
        "index": index,
        "dataStream": data_stream,
        "policyId": "hot-warm",
        "managedIndexMetaData": meta,
    }))
    .expect("valid record")
}

pub fn running(index: &str) -> ManagedIndexItem {
    record(index, None, json!({"state": {"name": "hot"}}))
}

pub fn failed(index: &str) -> ManagedIndexItem {
    record(
        index,
        None,
        json!({"state": {"name": "hot"}, "retryInfo": {"failed": true, "consumedRetries": 2}}),
    )
}

pub fn page(records: Vec<ManagedIndexItem>, total: u64) -> Result<ManagedIndicesResponse, Arc<ClientError>> {
    Ok(ManagedIndicesResponse {
        managed_indices: records,
        total_managed_indices: total,
    })
}

/// An [`IsmClient`] pointed at the mock server.
pub fn test_client(server: &MockServer) -> IsmClient {
    IsmClient::builder()
        .base_url(server.uri())
        .auth_strategy(AuthStrategy::ApiToken {
            token: SecretString::new("test-token".to_string().into()),
        })
        .max_retries(1)
        .build()
        .expect("client builds")
}

/// Dispatch one trigger action and wait for the first result it sends back.
pub async fn handle_and_collect(server: &MockServer, action: Action) -> Action {
    let (tx, mut rx) = mpsc::channel(8);
    let tracker = TaskTracker::new();
    handle_side_effects(action, Arc::new(test_client(server)), tx, tracker.clone()).await;
    tracker.close();
    tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("result within timeout")
        .expect("handler sent a result")
}
