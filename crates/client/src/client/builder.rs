//! Client builder for constructing [`IsmClient`] instances.
//!
//! # Invariants
//! - `base_url` and `auth_strategy` must be provided before calling `build()`
//! - The base URL is always normalized to have no trailing slashes
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use crate::auth::AuthStrategy;
use crate::client::IsmClient;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use ism_config::{
    Config,
    constants::{
        DATA_STREAMS_CACHE_TTL_SECS, DEFAULT_MAX_REDIRECTS, DEFAULT_MAX_RETRIES,
        DEFAULT_TIMEOUT_SECS,
    },
};

/// Builder for creating a new [`IsmClient`].
pub struct IsmClientBuilder {
    base_url: Option<String>,
    auth_strategy: Option<AuthStrategy>,
    skip_verify: bool,
    timeout: Duration,
    max_retries: usize,
    data_streams_ttl: Duration,
    metrics: Option<MetricsCollector>,
}

impl Default for IsmClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            auth_strategy: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            data_streams_ttl: Duration::from_secs(DATA_STREAMS_CACHE_TTL_SECS),
            metrics: None,
        }
    }
}

impl IsmClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Base URL of the Dashboards server, e.g. `http://localhost:5601`.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    pub fn auth_strategy(mut self, strategy: AuthStrategy) -> Self {
        self.auth_strategy = Some(strategy);
        self
    }

    /// Skip TLS certificate verification. Development only.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Retry budget for rate-limited requests.
    pub fn max_retries(mut self, retries: usize) -> Self {
        self.max_retries = retries;
        self
    }

    /// How long the data stream list stays cached.
    pub fn data_streams_ttl(mut self, ttl: Duration) -> Self {
        self.data_streams_ttl = ttl;
        self
    }

    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Pre-configure the builder from loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.auth_strategy = Some(AuthStrategy::from(&config.auth.strategy));
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self.max_retries = config.connection.max_retries;
        self
    }

    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`IsmClient`].
    ///
    /// # Errors
    ///
    /// [`ClientError::InvalidUrl`] without a base URL, [`ClientError::AuthFailed`]
    /// without an auth strategy, and `HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<IsmClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let auth = self
            .auth_strategy
            .ok_or_else(|| ClientError::AuthFailed("auth_strategy is required".to_string()))?;

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(IsmClient {
            http,
            base_url,
            auth,
            max_retries: self.max_retries,
            metrics: self.metrics,
            data_streams_cache: IsmClient::new_data_streams_cache(self.data_streams_ttl),
        })
    }
}
