//! Transform preview endpoints.

use reqwest::Client;
use serde_json::Value;

use crate::auth::AuthStrategy;
use crate::endpoints::{XSRF_HEADER, decode_envelope, encode_path_segment, send_request_with_retry};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{SampleDataQuery, SampleDataResponse};

/// Fetch sample documents from `index`, optionally narrowed by a query DSL filter.
#[allow(clippy::too_many_arguments)]
pub async fn search_sample_data(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    index: &str,
    query: SampleDataQuery,
    filter: Option<&Value>,
    max_retries: usize,
    metrics: Option<&MetricsCollector>,
) -> Result<SampleDataResponse> {
    let url = format!(
        "{}/api/ism/_searchSampleData/{}",
        base_url,
        encode_path_segment(index)
    );

    let body = match filter {
        Some(filter) => serde_json::json!({ "filter": filter }),
        None => serde_json::json!({}),
    };

    let builder = auth
        .apply(client.post(&url))
        .header(XSRF_HEADER, "true")
        .query(&[("from", query.from), ("size", query.size)])
        .json(&body);
    let response = send_request_with_retry(
        builder,
        max_retries,
        "/api/ism/_searchSampleData",
        "POST",
        metrics,
    )
    .await?;

    decode_envelope(response).await
}
