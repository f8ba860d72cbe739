//! Rate limit (429) retry behavior tests.
//!
//! # Invariants
//! - 429 responses trigger retry with `2^attempt` second backoff
//! - Exhausting the retry budget yields `MaxRetriesExceeded`
//! - Other error statuses are returned immediately

mod common;

use common::*;
use ism_client::ClientError;
use ism_client::models::ManagedIndicesQuery;
use std::time::Duration;
use wiremock::matchers::{method, path};

#[tokio::test(start_paused = true)]
async fn test_retry_on_429_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/ism/_data_streams"))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/ism/_data_streams"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("data_streams/list.json")))
        .mount(&mock_server)
        .await;

    let server_uri = mock_server.uri();
    let handle = tokio::spawn(async move {
        endpoints::get_data_streams(&Client::new(), &server_uri, &test_auth(), 3, None).await
    });

    assert_pending(&handle, "429 retry should wait for backoff").await;
    advance_and_yield(Duration::from_secs(1)).await;
    assert_pending(&handle, "second 429 retry should wait for backoff").await;
    advance_and_yield(Duration::from_secs(2)).await;

    let result = handle.await.expect("data streams task");
    assert_eq!(result.unwrap().data_streams.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_retry_on_429_exhaustion() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/ism/managedIndices"))
        .respond_with(ResponseTemplate::new(429))
        .expect(3)
        .mount(&mock_server)
        .await;

    let server_uri = mock_server.uri();
    let handle = tokio::spawn(async move {
        endpoints::get_managed_indices(
            &Client::new(),
            &server_uri,
            &test_auth(),
            &ManagedIndicesQuery::default(),
            2,
            None,
        )
        .await
    });

    advance_and_yield(Duration::from_secs(1)).await;
    advance_and_yield(Duration::from_secs(2)).await;

    let result = handle.await.expect("managed indices task");
    assert!(matches!(result, Err(ClientError::MaxRetriesExceeded(3))));
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/ism/managedIndices"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = endpoints::get_managed_indices(
        &Client::new(),
        &mock_server.uri(),
        &test_auth(),
        &ManagedIndicesQuery::default(),
        3,
        None,
    )
    .await
    .unwrap_err();

    match err {
        ClientError::ApiError {
            status, message, ..
        } => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
