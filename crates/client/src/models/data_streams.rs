//! Data stream models.

use serde::{Deserialize, Serialize};

/// Prefix of the server error returned when the user may not read data streams.
pub const DATA_STREAM_SECURITY_EXCEPTION_PREFIX: &str = "[security_exception]";

/// Warning shown instead of the raw security exception.
pub const DATA_STREAM_LACK_PERMISSION_WARNING: &str = "You have no permission to read data streams, and data stream related information will not be displayed.";

/// True when `message` is the data stream permission failure.
pub fn is_data_stream_permission_error(message: &str) -> bool {
    message.starts_with(DATA_STREAM_SECURITY_EXCEPTION_PREFIX)
}

/// A data stream as returned by `/api/ism/_data_streams`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataStream {
    pub name: String,
    #[serde(default, alias = "timestamp_field")]
    pub timestamp_field: Option<TimestampField>,
    #[serde(default)]
    pub indices: Vec<DataStreamIndex>,
    #[serde(default)]
    pub generation: u64,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub template: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataStreamIndex {
    #[serde(alias = "index_name")]
    pub index_name: String,
    #[serde(default, alias = "index_uuid")]
    pub index_uuid: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimestampField {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataStreamsResponse {
    #[serde(default)]
    pub data_streams: Vec<DataStream>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_backend_field_names() {
        let response: DataStreamsResponse = serde_json::from_value(json!({
            "dataStreams": [{
                "name": "logs-nginx",
                "timestamp_field": {"name": "@timestamp"},
                "indices": [{"index_name": ".ds-logs-nginx-000001", "index_uuid": "abc"}],
                "generation": 1,
                "status": "GREEN",
                "template": "logs-template"
            }]
        }))
        .unwrap();
        let stream = &response.data_streams[0];
        assert_eq!(stream.name, "logs-nginx");
        assert_eq!(stream.indices[0].index_name, ".ds-logs-nginx-000001");
        assert_eq!(
            stream.timestamp_field.as_ref().map(|f| f.name.as_str()),
            Some("@timestamp")
        );
    }
}
