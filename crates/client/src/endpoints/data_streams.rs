//! Data stream endpoints.

use reqwest::Client;

use crate::auth::AuthStrategy;
use crate::endpoints::{decode_envelope, send_request_with_retry};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::DataStreamsResponse;

/// List the data streams visible to the current user.
pub async fn get_data_streams(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    max_retries: usize,
    metrics: Option<&MetricsCollector>,
) -> Result<DataStreamsResponse> {
    let url = format!("{}/api/ism/_data_streams", base_url);

    let builder = auth.apply(client.get(&url));
    let response =
        send_request_with_retry(builder, max_retries, "/api/ism/_data_streams", "GET", metrics)
            .await?;

    decode_envelope(response).await
}
