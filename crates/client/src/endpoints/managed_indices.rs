//! Managed index endpoints.

use reqwest::Client;

use crate::auth::AuthStrategy;
use crate::endpoints::{XSRF_HEADER, decode_envelope, send_request_with_retry};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{
    AcknowledgedResponse, BulkActionResponse, ManagedIndicesQuery, ManagedIndicesResponse,
};

/// List one page of managed indices.
pub async fn get_managed_indices(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    query: &ManagedIndicesQuery,
    max_retries: usize,
    metrics: Option<&MetricsCollector>,
) -> Result<ManagedIndicesResponse> {
    let url = format!("{}/api/ism/managedIndices", base_url);

    let builder = auth.apply(client.get(&url)).query(&query.to_query_pairs());
    let response =
        send_request_with_retry(builder, max_retries, "/api/ism/managedIndices", "GET", metrics)
            .await?;

    decode_envelope(response).await
}

/// Detach the policy from each of `indices`.
pub async fn remove_policy(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    indices: &[String],
    max_retries: usize,
    metrics: Option<&MetricsCollector>,
) -> Result<BulkActionResponse> {
    let url = format!("{}/api/ism/removePolicy", base_url);

    let builder = auth
        .apply(client.post(&url))
        .header(XSRF_HEADER, "true")
        .json(&serde_json::json!({ "indices": indices }));
    let response =
        send_request_with_retry(builder, max_retries, "/api/ism/removePolicy", "POST", metrics)
            .await?;

    decode_envelope(response).await
}

/// Retry the failed step of each of `indices`, optionally from a named state.
pub async fn retry_policy(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    indices: &[String],
    state: Option<&str>,
    max_retries: usize,
    metrics: Option<&MetricsCollector>,
) -> Result<BulkActionResponse> {
    let url = format!("{}/api/ism/retry", base_url);

    let mut body = serde_json::json!({ "index": indices });
    if let Some(state) = state {
        body["state"] = serde_json::Value::String(state.to_string());
    }

    let builder = auth
        .apply(client.post(&url))
        .header(XSRF_HEADER, "true")
        .json(&body);
    let response =
        send_request_with_retry(builder, max_retries, "/api/ism/retry", "POST", metrics).await?;

    decode_envelope(response).await
}

/// Set the rollover alias of `index`.
pub async fn edit_rollover_alias(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    index: &str,
    alias: &str,
    max_retries: usize,
    metrics: Option<&MetricsCollector>,
) -> Result<AcknowledgedResponse> {
    let url = format!("{}/api/ism/editRolloverAlias", base_url);

    let builder = auth
        .apply(client.put(&url))
        .header(XSRF_HEADER, "true")
        .json(&serde_json::json!({ "index": index, "alias": alias }));
    let response = send_request_with_retry(
        builder,
        max_retries,
        "/api/ism/editRolloverAlias",
        "PUT",
        metrics,
    )
    .await?;

    decode_envelope(response).await
}
