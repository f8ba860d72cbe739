//! REST endpoint implementations for the Dashboards ISM plugin routes.
//!
//! Each endpoint is a free function over a shared `reqwest::Client` so it
//! can be exercised against a mock server without building an [`IsmClient`].
//!
//! [`IsmClient`]: crate::IsmClient

mod data_streams;
mod managed_indices;
mod request;
mod transforms;
pub mod url_encoding;

pub use data_streams::get_data_streams;
pub use managed_indices::{edit_rollover_alias, get_managed_indices, remove_policy, retry_policy};
pub use request::send_request_with_retry;
pub use transforms::search_sample_data;
pub use url_encoding::encode_path_segment;

use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::models::ServerResponse;

/// Header the Dashboards server requires on mutating requests.
pub const XSRF_HEADER: &str = "osd-xsrf";

/// Read a response body as a result envelope and unwrap it.
pub(crate) async fn decode_envelope<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.text().await?;
    let envelope: ServerResponse<T> = serde_json::from_str(&body)?;
    envelope.into_result()
}
