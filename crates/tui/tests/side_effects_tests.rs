//! Side effect handlers against a mock Dashboards server.

mod common;

use ism_client::models::{ManagedIndicesQuery, SampleDataQuery};
use ism_client::testing::{error_envelope, load_fixture, ok_envelope};
use ism_tui::action::Action;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::handle_and_collect;

#[tokio::test]
async fn test_load_managed_indices_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/ism/managedIndices"))
        .and(query_param("from", "20"))
        .and(query_param("sortField", "index"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("managed_indices/list.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let query = ManagedIndicesQuery {
        from: 20,
        size: 20,
        ..Default::default()
    };
    let result = handle_and_collect(&server, Action::LoadManagedIndices { seq: 4, query }).await;

    match result {
        Action::ManagedIndicesLoaded { seq, result } => {
            assert_eq!(seq, 4);
            let response = result.expect("managed indices load");
            assert!(!response.managed_indices.is_empty());
        }
        other => panic!("unexpected action: {other:?}"),
    }
}

#[tokio::test]
async fn test_data_stream_permission_error_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/ism/_data_streams"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("data_streams/permission_denied.json")),
        )
        .mount(&server)
        .await;

    let result = handle_and_collect(&server, Action::LoadDataStreams).await;
    match result {
        Action::DataStreamsLoaded(Err(e)) => {
            assert!(e.to_string().starts_with("[security_exception]"));
        }
        other => panic!("unexpected action: {other:?}"),
    }
}

#[tokio::test]
async fn test_remove_policy_sends_indices() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/ism/removePolicy"))
        .and(body_json(json!({"indices": ["a", "b"]})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("managed_indices/remove_policy.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let action = Action::RemovePolicy {
        indices: vec!["a".to_string(), "b".to_string()],
    };
    match handle_and_collect(&server, action).await {
        Action::PolicyRemoved(Ok(response)) => assert_eq!(response.updated_indices, 2),
        other => panic!("unexpected action: {other:?}"),
    }
}

#[tokio::test]
async fn test_retry_policy_with_state() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/ism/retry"))
        .and(body_json(json!({"index": ["audit-000007"], "state": "warm"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("managed_indices/retry_partial.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let action = Action::RetryPolicy {
        indices: vec!["audit-000007".to_string()],
        state: Some("warm".to_string()),
    };
    match handle_and_collect(&server, action).await {
        Action::PolicyRetried(Ok(response)) => {
            assert!(response.failures);
            assert_eq!(response.failed_indices.len(), 1);
        }
        other => panic!("unexpected action: {other:?}"),
    }
}

#[tokio::test]
async fn test_edit_rollover_alias_reports_index() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/ism/editRolloverAlias"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ok_envelope(json!({"acknowledged": true}))),
        )
        .mount(&server)
        .await;

    let action = Action::EditRolloverAlias {
        index: "logs-1".to_string(),
        alias: "logs".to_string(),
    };
    match handle_and_collect(&server, action).await {
        Action::RolloverAliasEdited { index, result } => {
            assert_eq!(index, "logs-1");
            assert!(result.expect("alias edit").acknowledged);
        }
        other => panic!("unexpected action: {other:?}"),
    }
}

#[tokio::test]
async fn test_load_sample_data_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/ism/_searchSampleData/ecommerce"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(error_envelope("no such index [ecommerce]")),
        )
        .mount(&server)
        .await;

    let action = Action::LoadSampleData {
        index: "ecommerce".to_string(),
        query: SampleDataQuery { from: 0, size: 50 },
        filter: None,
    };
    match handle_and_collect(&server, action).await {
        Action::SampleDataLoaded(Err(e)) => {
            assert_eq!(e.user_message("fallback"), "no such index [ecommerce]");
        }
        other => panic!("unexpected action: {other:?}"),
    }
}
