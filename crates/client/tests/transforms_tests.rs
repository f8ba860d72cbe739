//! Transform sample data endpoint tests.

mod common;

use common::*;
use ism_client::TransformService;
use ism_client::models::{SampleDataQuery, TotalRelation};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};

#[tokio::test]
async fn test_search_sample_data_pages_and_decodes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/ism/_searchSampleData/ecommerce"))
        .and(query_param("from", "10"))
        .and(query_param("size", "10"))
        .and(header("osd-xsrf", "true"))
        .and(body_json(json!({})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("transforms/sample_data.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let response = client
        .search_sample_data("ecommerce", SampleDataQuery { from: 10, size: 10 }, None)
        .await
        .unwrap();

    assert_eq!(response.total.value, 4675);
    assert_eq!(response.total.relation, Some(TotalRelation::Eq));
    assert_eq!(response.data.len(), 2);
    assert_eq!(response.data[0].source["customer"], json!("Ana"));
}

#[tokio::test]
async fn test_search_sample_data_sends_filter() {
    let mock_server = MockServer::start().await;
    let filter = json!({ "match": { "category": "shoes" } });

    Mock::given(method("POST"))
        .and(path("/api/ism/_searchSampleData/ecommerce"))
        .and(body_json(json!({ "filter": filter.clone() })))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!({
            "data": [],
            "total": { "value": 0 }
        }))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let response = TransformService::search_sample_data(
        &client,
        "ecommerce",
        SampleDataQuery { from: 0, size: 10 },
        Some(&filter),
    )
    .await
    .unwrap();
    assert!(response.data.is_empty());
    assert_eq!(response.total.value, 0);
}

#[tokio::test]
async fn test_search_sample_data_encodes_index_pattern() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/ism/_searchSampleData/logs%232024"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!({
            "data": [],
            "total": { "value": 0 }
        }))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    client
        .search_sample_data("logs#2024", SampleDataQuery { from: 0, size: 10 }, None)
        .await
        .unwrap();
}
