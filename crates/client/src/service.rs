//! Service seams the UI layer depends on.
//!
//! The TUI drives these traits rather than [`IsmClient`] directly so its
//! side effects can run against in-memory fakes in tests.

use std::future::Future;

use serde_json::Value;

use crate::client::IsmClient;
use crate::error::Result;
use crate::models::{
    AcknowledgedResponse, BulkActionResponse, DataStreamsResponse, ManagedIndicesQuery,
    ManagedIndicesResponse, SampleDataQuery, SampleDataResponse,
};

/// Operations on managed indices and data streams.
pub trait ManagedIndexService: Send + Sync {
    fn get_managed_indices(
        &self,
        query: &ManagedIndicesQuery,
    ) -> impl Future<Output = Result<ManagedIndicesResponse>> + Send;

    fn get_data_streams(&self) -> impl Future<Output = Result<DataStreamsResponse>> + Send;

    fn remove_policy(
        &self,
        indices: &[String],
    ) -> impl Future<Output = Result<BulkActionResponse>> + Send;

    fn retry_policy(
        &self,
        indices: &[String],
        state: Option<&str>,
    ) -> impl Future<Output = Result<BulkActionResponse>> + Send;

    fn edit_rollover_alias(
        &self,
        index: &str,
        alias: &str,
    ) -> impl Future<Output = Result<AcknowledgedResponse>> + Send;
}

/// Sample data access for the transform preview.
pub trait TransformService: Send + Sync {
    fn search_sample_data(
        &self,
        index: &str,
        query: SampleDataQuery,
        filter: Option<&Value>,
    ) -> impl Future<Output = Result<SampleDataResponse>> + Send;
}

impl ManagedIndexService for IsmClient {
    async fn get_managed_indices(
        &self,
        query: &ManagedIndicesQuery,
    ) -> Result<ManagedIndicesResponse> {
        IsmClient::get_managed_indices(self, query).await
    }

    async fn get_data_streams(&self) -> Result<DataStreamsResponse> {
        IsmClient::get_data_streams(self).await
    }

    async fn remove_policy(&self, indices: &[String]) -> Result<BulkActionResponse> {
        IsmClient::remove_policy(self, indices).await
    }

    async fn retry_policy(
        &self,
        indices: &[String],
        state: Option<&str>,
    ) -> Result<BulkActionResponse> {
        IsmClient::retry_policy(self, indices, state).await
    }

    async fn edit_rollover_alias(&self, index: &str, alias: &str) -> Result<AcknowledgedResponse> {
        IsmClient::edit_rollover_alias(self, index, alias).await
    }
}

impl TransformService for IsmClient {
    async fn search_sample_data(
        &self,
        index: &str,
        query: SampleDataQuery,
        filter: Option<&Value>,
    ) -> Result<SampleDataResponse> {
        IsmClient::search_sample_data(self, index, query, filter).await
    }
}
