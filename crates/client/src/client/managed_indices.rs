//! Managed index and data stream methods for [`IsmClient`].

use crate::client::{DATA_STREAMS_CACHE_KEY, IsmClient};
use crate::endpoints;
use crate::error::Result;
use crate::models::{
    AcknowledgedResponse, BulkActionResponse, DataStreamsResponse, ManagedIndicesQuery,
    ManagedIndicesResponse,
};

impl IsmClient {
    /// Fetch one page of managed indices.
    pub async fn get_managed_indices(
        &self,
        query: &ManagedIndicesQuery,
    ) -> Result<ManagedIndicesResponse> {
        endpoints::get_managed_indices(
            &self.http,
            &self.base_url,
            &self.auth,
            query,
            self.max_retries,
            self.metrics.as_ref(),
        )
        .await
    }

    /// List data streams, served from cache while the entry is fresh.
    ///
    /// Failures are never cached.
    pub async fn get_data_streams(&self) -> Result<DataStreamsResponse> {
        if let Some(cached) = self.data_streams_cache.get(DATA_STREAMS_CACHE_KEY).await {
            if let Some(m) = &self.metrics {
                m.record_cache_hit();
            }
            tracing::trace!("Data streams served from cache");
            return Ok(cached);
        }
        if let Some(m) = &self.metrics {
            m.record_cache_miss();
        }

        let response = endpoints::get_data_streams(
            &self.http,
            &self.base_url,
            &self.auth,
            self.max_retries,
            self.metrics.as_ref(),
        )
        .await?;

        self.data_streams_cache
            .insert(DATA_STREAMS_CACHE_KEY, response.clone())
            .await;
        Ok(response)
    }

    pub async fn remove_policy(&self, indices: &[String]) -> Result<BulkActionResponse> {
        endpoints::remove_policy(
            &self.http,
            &self.base_url,
            &self.auth,
            indices,
            self.max_retries,
            self.metrics.as_ref(),
        )
        .await
    }

    /// Retry failed managed indices, from their current state unless `state` is given.
    pub async fn retry_policy(
        &self,
        indices: &[String],
        state: Option<&str>,
    ) -> Result<BulkActionResponse> {
        endpoints::retry_policy(
            &self.http,
            &self.base_url,
            &self.auth,
            indices,
            state,
            self.max_retries,
            self.metrics.as_ref(),
        )
        .await
    }

    pub async fn edit_rollover_alias(
        &self,
        index: &str,
        alias: &str,
    ) -> Result<AcknowledgedResponse> {
        endpoints::edit_rollover_alias(
            &self.http,
            &self.base_url,
            &self.auth,
            index,
            alias,
            self.max_retries,
            self.metrics.as_ref(),
        )
        .await
    }
}
