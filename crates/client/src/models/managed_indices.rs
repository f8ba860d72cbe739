//! Managed index models for the ISM plugin routes.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::policy::Policy;

/// A single index governed by an ISM policy, as listed by `/api/ism/managedIndices`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedIndexItem {
    pub index: String,
    #[serde(default)]
    pub index_uuid: Option<String>,
    #[serde(default)]
    pub data_stream: Option<String>,
    #[serde(default)]
    pub policy_id: Option<String>,
    #[serde(default)]
    pub policy_seq_no: Option<i64>,
    #[serde(default)]
    pub policy_primary_term: Option<i64>,
    #[serde(default)]
    pub policy: Option<Policy>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub managed_index_meta_data: Option<ManagedIndexMetaData>,
}

/// Runtime metadata the ISM plugin keeps per managed index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ManagedIndexMetaData {
    pub index: Option<String>,
    pub index_uuid: Option<String>,
    pub policy_id: Option<String>,
    pub policy_seq_no: Option<i64>,
    pub policy_primary_term: Option<i64>,
    pub policy_completed: Option<bool>,
    pub rolled_over: Option<bool>,
    pub transition_to: Option<String>,
    pub state: Option<StateMetaData>,
    pub action: Option<ActionMetaData>,
    pub retry_info: Option<RetryInfo>,
    pub info: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StateMetaData {
    pub name: String,
    pub start_time: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActionMetaData {
    pub name: String,
    pub start_time: Option<i64>,
    pub index: Option<i64>,
    pub failed: bool,
    pub consumed_retries: u64,
    pub last_retry_time: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RetryInfo {
    pub failed: bool,
    pub consumed_retries: u64,
}

/// Coarse lifecycle status shown in the "Job Status" column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Initializing,
    Completed,
    Failed,
    Running,
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Initializing => "Initializing",
            Self::Completed => "Completed",
            Self::Failed => "Failed",
            Self::Running => "Running",
        };
        f.write_str(label)
    }
}

impl ManagedIndexItem {
    /// True when either the retry info or the current action reports a failure.
    pub fn has_failed(&self) -> bool {
        self.managed_index_meta_data.as_ref().is_some_and(|meta| {
            meta.retry_info.as_ref().is_some_and(|r| r.failed)
                || meta.action.as_ref().is_some_and(|a| a.failed)
        })
    }

    pub fn job_status(&self) -> JobStatus {
        let Some(meta) = &self.managed_index_meta_data else {
            return JobStatus::Initializing;
        };
        if meta.policy_completed.unwrap_or(false) {
            JobStatus::Completed
        } else if self.has_failed() {
            JobStatus::Failed
        } else {
            JobStatus::Running
        }
    }

    /// The metadata's policy sequence number, if the index finished initializing.
    pub fn metadata_policy_seq_no(&self) -> Option<i64> {
        self.managed_index_meta_data
            .as_ref()
            .and_then(|meta| meta.policy_seq_no)
    }
}

/// Response payload of `GET /api/ism/managedIndices`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedIndicesResponse {
    pub managed_indices: Vec<ManagedIndexItem>,
    pub total_managed_indices: u64,
}

/// Sortable columns of the managed indices table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortField {
    #[default]
    Index,
    DataStream,
    PolicyId,
}

impl SortField {
    pub const ALL: [SortField; 3] = [Self::Index, Self::DataStream, Self::PolicyId];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::DataStream => "dataStream",
            Self::PolicyId => "policyId",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == value)
    }

    /// Next field in display order, wrapping around.
    pub fn next(&self) -> Self {
        match self {
            Self::Index => Self::DataStream,
            Self::DataStream => Self::PolicyId,
            Self::PolicyId => Self::Index,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Parameters of a managed indices page request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManagedIndicesQuery {
    pub from: u64,
    pub size: u64,
    pub search: String,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub show_data_streams: bool,
    pub terms: Vec<String>,
    pub indices: Vec<String>,
    pub data_streams: Vec<String>,
}

impl ManagedIndicesQuery {
    /// Query-string pairs; list values are sent as repeated keys.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("from".to_string(), self.from.to_string()),
            ("size".to_string(), self.size.to_string()),
            ("search".to_string(), self.search.clone()),
            ("sortField".to_string(), self.sort_field.as_str().to_string()),
            (
                "sortDirection".to_string(),
                self.sort_direction.as_str().to_string(),
            ),
            (
                "showDataStreams".to_string(),
                self.show_data_streams.to_string(),
            ),
        ];
        pairs.extend(self.terms.iter().map(|t| ("terms".to_string(), t.clone())));
        pairs.extend(
            self.indices
                .iter()
                .map(|i| ("indices".to_string(), i.clone())),
        );
        pairs.extend(
            self.data_streams
                .iter()
                .map(|d| ("dataStreams".to_string(), d.clone())),
        );
        pairs
    }
}

/// An index a bulk operation could not update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedIndex {
    pub index_name: String,
    #[serde(default)]
    pub index_uuid: Option<String>,
    pub reason: String,
}

/// Response payload shared by remove-policy and retry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BulkActionResponse {
    pub updated_indices: u64,
    pub failures: bool,
    pub failed_indices: Vec<FailedIndex>,
}

impl BulkActionResponse {
    /// `[name, reason], [name, reason]` listing of the failed indices.
    pub fn failure_summary(&self) -> String {
        self.failed_indices
            .iter()
            .map(|f| format!("[{}, {}]", f.index_name, f.reason))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Response payload of `PUT /api/ism/editRolloverAlias`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcknowledgedResponse {
    pub acknowledged: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(meta: Option<Value>) -> ManagedIndexItem {
        let mut raw = json!({"index": "logs-1", "policyId": "hot-warm"});
        if let Some(meta) = meta {
            raw["managedIndexMetaData"] = meta;
        }
        serde_json::from_value(raw).unwrap()
    }

    #[test]
    fn test_job_status() {
        assert_eq!(item(None).job_status(), JobStatus::Initializing);
        assert_eq!(
            item(Some(json!({"policyCompleted": true}))).job_status(),
            JobStatus::Completed
        );
        assert_eq!(
            item(Some(json!({"retryInfo": {"failed": true, "consumedRetries": 1}}))).job_status(),
            JobStatus::Failed
        );
        assert_eq!(
            item(Some(json!({"action": {"name": "rollover", "failed": true}}))).job_status(),
            JobStatus::Failed
        );
        assert_eq!(
            item(Some(json!({"state": {"name": "hot"}}))).job_status(),
            JobStatus::Running
        );
    }

    #[test]
    fn test_query_pairs_repeat_list_keys() {
        let query = ManagedIndicesQuery {
            size: 20,
            indices: vec!["a".to_string(), "b".to_string()],
            ..Default::default()
        };
        let pairs = query.to_query_pairs();
        let indices: Vec<_> = pairs.iter().filter(|(k, _)| k == "indices").collect();
        assert_eq!(indices.len(), 2);
        assert!(pairs.contains(&("sortField".to_string(), "index".to_string())));
        assert!(pairs.contains(&("sortDirection".to_string(), "desc".to_string())));
    }

    #[test]
    fn test_failure_summary() {
        let response: BulkActionResponse = serde_json::from_value(json!({
            "updatedIndices": 2,
            "failures": true,
            "failedIndices": [
                {"indexName": "idx1", "indexUuid": "u1", "reason": "locked"},
                {"indexName": "idx2", "reason": "missing"}
            ]
        }))
        .unwrap();
        assert_eq!(
            response.failure_summary(),
            "[idx1, locked], [idx2, missing]"
        );
    }

    #[test]
    fn test_sort_field_cycle() {
        assert_eq!(SortField::Index.next(), SortField::DataStream);
        assert_eq!(SortField::PolicyId.next(), SortField::Index);
        assert_eq!(SortField::parse("policyId"), Some(SortField::PolicyId));
        assert_eq!(SortField::parse("bogus"), None);
    }
}
