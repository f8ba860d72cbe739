//! Main ISM REST API client.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `managed_indices`: managed index and data stream methods
//! - `transforms`: transform preview methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])

pub mod builder;
mod managed_indices;
mod transforms;

use std::time::Duration;

use moka::future::Cache;

use crate::auth::AuthStrategy;
use crate::metrics::MetricsCollector;
use crate::models::DataStreamsResponse;

/// Key of the single data stream list entry in [`IsmClient::data_streams_cache`].
const DATA_STREAMS_CACHE_KEY: &str = "data_streams";

/// Client for the Dashboards ISM plugin routes.
///
/// Use [`IsmClient::builder()`] to create one:
///
/// ```rust,ignore
/// use ism_client::{AuthStrategy, IsmClient};
/// use secrecy::SecretString;
///
/// let client = IsmClient::builder()
///     .base_url("http://localhost:5601".to_string())
///     .auth_strategy(AuthStrategy::ApiToken {
///         token: SecretString::new("my-token".to_string().into()),
///     })
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct IsmClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) auth: AuthStrategy,
    pub(crate) max_retries: usize,
    pub(crate) metrics: Option<MetricsCollector>,
    pub(crate) data_streams_cache: Cache<&'static str, DataStreamsResponse>,
}

impl IsmClient {
    pub fn builder() -> builder::IsmClientBuilder {
        builder::IsmClientBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_api_token_auth(&self) -> bool {
        matches!(self.auth, AuthStrategy::ApiToken { .. })
    }

    /// Drop the cached data stream list so the next read hits the server.
    pub async fn invalidate_data_streams(&self) {
        self.data_streams_cache
            .invalidate(DATA_STREAMS_CACHE_KEY)
            .await;
    }

    pub(crate) fn new_data_streams_cache(ttl: Duration) -> Cache<&'static str, DataStreamsResponse> {
        Cache::builder().max_capacity(1).time_to_live(ttl).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use secrecy::SecretString;

    fn token() -> AuthStrategy {
        AuthStrategy::ApiToken {
            token: SecretString::new("test-token".to_string().into()),
        }
    }

    #[test]
    fn test_builder_with_api_token() {
        let client = IsmClient::builder()
            .base_url("http://localhost:5601".to_string())
            .auth_strategy(token())
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:5601");
        assert!(client.is_api_token_auth());
    }

    #[test]
    fn test_builder_missing_base_url() {
        let result = IsmClient::builder().auth_strategy(token()).build();
        assert!(matches!(result.unwrap_err(), ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_builder_missing_auth() {
        let result = IsmClient::builder()
            .base_url("http://localhost:5601".to_string())
            .build();
        assert!(matches!(result.unwrap_err(), ClientError::AuthFailed(_)));
    }

    #[test]
    fn test_builder_normalizes_base_url() {
        let client = IsmClient::builder()
            .base_url("https://dashboards.example.com//".to_string())
            .auth_strategy(token())
            .skip_verify(true)
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://dashboards.example.com");
    }
}
