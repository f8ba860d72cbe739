//! Metrics collection for ISM API calls.
//!
//! Records request latency, request/retry/error counters, and data stream
//! cache hits through the `metrics` facade. Nothing is exported here; with no
//! recorder installed every call is a no-op.
//!
//! # Invariants
//! - All metrics use consistent label names: `endpoint`, `method`, `status`, `error_category`
//! - Metric recording is infallible

use crate::error::ClientError;
use std::time::Duration;

pub const METRIC_REQUEST_DURATION: &str = "ism_api_request_duration_seconds";
pub const METRIC_REQUESTS_TOTAL: &str = "ism_api_requests_total";
pub const METRIC_RETRIES_TOTAL: &str = "ism_api_retries_total";
pub const METRIC_ERRORS_TOTAL: &str = "ism_api_errors_total";
pub const METRIC_CACHE_HITS: &str = "ism_api_cache_hits_total";
pub const METRIC_CACHE_MISSES: &str = "ism_api_cache_misses_total";

/// Error categories for metrics labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Transport-level errors (connection refused, DNS, timeouts)
    Transport,
    Http4xx,
    Http5xx,
    /// `ok: false` envelopes
    Server,
    /// Response body did not decode
    Decode,
    RateLimited,
    Unknown,
}

impl ErrorCategory {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Transport => "transport",
            ErrorCategory::Http4xx => "http_4xx",
            ErrorCategory::Http5xx => "http_5xx",
            ErrorCategory::Server => "server",
            ErrorCategory::Decode => "decode",
            ErrorCategory::RateLimited => "rate_limited",
            ErrorCategory::Unknown => "unknown",
        }
    }
}

impl From<&ClientError> for ErrorCategory {
    fn from(error: &ClientError) -> Self {
        match error {
            ClientError::HttpError(_) => ErrorCategory::Transport,
            ClientError::ApiError { status, .. } if (400..500).contains(status) => {
                ErrorCategory::Http4xx
            }
            ClientError::ApiError { status, .. } if (500..600).contains(status) => {
                ErrorCategory::Http5xx
            }
            ClientError::Server(_) => ErrorCategory::Server,
            ClientError::InvalidResponse(_) => ErrorCategory::Decode,
            ClientError::MaxRetriesExceeded(_) => ErrorCategory::RateLimited,
            _ => ErrorCategory::Unknown,
        }
    }
}

/// Metrics collector for ISM API calls.
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    enabled: bool,
}

impl MetricsCollector {
    /// Create an enabled collector.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a collector that records nothing.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record the duration of an API request.
    ///
    /// `status` is `None` when the request failed before a response arrived.
    pub fn record_request_duration(
        &self,
        endpoint: &str,
        method: &str,
        duration: Duration,
        status: Option<u16>,
    ) {
        if !self.enabled {
            return;
        }

        let status_label = status.map_or("error".to_string(), |s| s.to_string());

        metrics::histogram!(METRIC_REQUEST_DURATION,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "status" => status_label,
        )
        .record(duration.as_secs_f64());
    }

    /// Record a request attempt, including retries.
    pub fn record_request(&self, endpoint: &str, method: &str) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_REQUESTS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
        )
        .increment(1);
    }

    /// Record a retry attempt (1-based).
    pub fn record_retry(&self, endpoint: &str, method: &str, attempt: usize) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_RETRIES_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "attempt" => attempt.to_string(),
        )
        .increment(1);
    }

    pub fn record_error(&self, endpoint: &str, method: &str, category: ErrorCategory) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_ERRORS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "error_category" => category.as_str(),
        )
        .increment(1);
    }

    pub fn record_client_error(&self, endpoint: &str, method: &str, error: &ClientError) {
        self.record_error(endpoint, method, ErrorCategory::from(error));
    }

    pub fn record_cache_hit(&self) {
        if !self.enabled {
            return;
        }
        metrics::counter!(METRIC_CACHE_HITS).increment(1);
    }

    pub fn record_cache_miss(&self) {
        if !self.enabled {
            return;
        }
        metrics::counter!(METRIC_CACHE_MISSES).increment(1);
    }
}
