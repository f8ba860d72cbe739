//! Retry helper for HTTP requests with exponential backoff.
//!
//! Requests answered with HTTP 429 (Too Many Requests) are retried with
//! exponential backoff. Any other non-success status becomes
//! [`ClientError::ApiError`].

use std::time::Instant;

use reqwest::{RequestBuilder, Response};
use serde::Deserialize;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

/// Retry budget used when the caller passes 0.
const DEFAULT_MAX_RETRIES: usize = 3;

/// Error bodies the Dashboards server sends alongside non-2xx statuses.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Sends an HTTP request, retrying HTTP 429 responses with exponential backoff.
///
/// Backoff is `2^attempt` seconds. When every attempt is rate limited the
/// result is [`ClientError::MaxRetriesExceeded`].
pub async fn send_request_with_retry(
    builder: RequestBuilder,
    max_retries: usize,
    endpoint: &str,
    method: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Response> {
    let max_retries = if max_retries == 0 {
        DEFAULT_MAX_RETRIES
    } else {
        max_retries
    };

    for attempt in 0..=max_retries {
        let attempt_builder = match builder.try_clone() {
            Some(cloned) => cloned,
            None if attempt == 0 => {
                debug!("Request builder cannot be cloned, single attempt only");
                return builder.send().await.map_err(ClientError::from);
            }
            None => return Err(ClientError::MaxRetriesExceeded(attempt)),
        };

        if let Some(m) = metrics {
            m.record_request(endpoint, method);
            if attempt > 0 {
                m.record_retry(endpoint, method, attempt);
            }
        }

        let started = Instant::now();
        let response = match attempt_builder.send().await {
            Ok(response) => response,
            Err(e) => {
                let err = ClientError::from(e);
                if let Some(m) = metrics {
                    m.record_request_duration(endpoint, method, started.elapsed(), None);
                    m.record_client_error(endpoint, method, &err);
                }
                return Err(err);
            }
        };

        let status = response.status().as_u16();
        if let Some(m) = metrics {
            m.record_request_duration(endpoint, method, started.elapsed(), Some(status));
        }

        if status == 429 {
            if attempt < max_retries {
                let backoff_secs = 2u64.pow(attempt as u32);
                debug!(
                    endpoint,
                    attempt = attempt + 1,
                    max_retries = max_retries + 1,
                    backoff_secs,
                    "Rate limited (HTTP 429), retrying with exponential backoff"
                );
                tokio::time::sleep(tokio::time::Duration::from_secs(backoff_secs)).await;
                continue;
            }
            debug!(endpoint, attempts = attempt + 1, "Max retries exhausted");
            let err = ClientError::MaxRetriesExceeded(max_retries + 1);
            if let Some(m) = metrics {
                m.record_client_error(endpoint, method, &err);
            }
            return Err(err);
        }

        if response.status().is_success() {
            if attempt > 0 {
                debug!(endpoint, attempt = attempt + 1, "Request succeeded after retry");
            }
            return Ok(response);
        }

        let url = response.url().to_string();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Could not read error response body".to_string());
        let message = match serde_json::from_str::<ErrorBody>(&body) {
            Ok(ErrorBody {
                message: Some(message),
                ..
            }) => message,
            Ok(ErrorBody {
                error: Some(error), ..
            }) => error,
            _ => body,
        };

        let err = ClientError::ApiError {
            status,
            url,
            message,
        };
        if let Some(m) = metrics {
            m.record_client_error(endpoint, method, &err);
        }
        return Err(err);
    }

    Err(ClientError::MaxRetriesExceeded(max_retries + 1))
}
