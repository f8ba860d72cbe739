//! OpenSearch Dashboards ISM plugin client.
//!
//! Typed access to the `/api/ism/*` routes the Dashboards server exposes:
//! managed indices, data streams, policy retry/removal, rollover aliases,
//! and transform sample data. Every route answers with an
//! `{ok, response | error}` envelope; [`models::ServerResponse`] unwraps it.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod metrics;
pub mod models;
pub mod service;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use auth::AuthStrategy;
pub use client::IsmClient;
pub use client::builder::IsmClientBuilder;
pub use error::{ClientError, Result};
pub use metrics::{ErrorCategory, MetricsCollector};
pub use models::{
    AcknowledgedResponse, BulkActionResponse, DataStream, DataStreamsResponse, FailedIndex,
    JobStatus, ManagedIndexItem, ManagedIndicesQuery, ManagedIndicesResponse, SampleDataQuery,
    SampleDataResponse, SampleDocument, ServerResponse, SortDirection, SortField,
};
pub use service::{ManagedIndexService, TransformService};
