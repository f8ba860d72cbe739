//! Transform preview methods for [`IsmClient`].

use serde_json::Value;

use crate::client::IsmClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{SampleDataQuery, SampleDataResponse};

impl IsmClient {
    /// Sample documents from `index` for the transform preview grid.
    pub async fn search_sample_data(
        &self,
        index: &str,
        query: SampleDataQuery,
        filter: Option<&Value>,
    ) -> Result<SampleDataResponse> {
        endpoints::search_sample_data(
            &self.http,
            &self.base_url,
            &self.auth,
            index,
            query,
            filter,
            self.max_retries,
            self.metrics.as_ref(),
        )
        .await
    }
}
