//! Data models for ISM plugin API responses.

mod data_streams;
mod envelope;
mod managed_indices;
mod policy;
pub mod policy_actions;
mod transforms;

pub use data_streams::{
    DATA_STREAM_LACK_PERMISSION_WARNING, DATA_STREAM_SECURITY_EXCEPTION_PREFIX, DataStream,
    DataStreamIndex, DataStreamsResponse, TimestampField, is_data_stream_permission_error,
};
pub use envelope::ServerResponse;
pub use managed_indices::{
    AcknowledgedResponse, ActionMetaData, BulkActionResponse, FailedIndex, JobStatus,
    ManagedIndexItem, ManagedIndexMetaData, ManagedIndicesQuery, ManagedIndicesResponse, RetryInfo,
    SortDirection, SortField, StateMetaData,
};
pub use policy::{Policy, PolicyState, Transition};
pub use policy_actions::{ActionConfig, ActionType, ActionValidationError, PolicyAction, UiAction};
pub use transforms::{
    FieldItem, HitsTotal, SampleDataQuery, SampleDataResponse, SampleDocument, TotalRelation,
};
