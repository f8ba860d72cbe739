//! Column set and cell text of the managed indices table.

use ism_client::models::{ManagedIndexItem, SortField};

pub const DEFAULT_EMPTY_DATA: &str = "-";

pub const EMPTY_LOADING: &str = "Loading the managed indices...";
pub const EMPTY_FILTERED: &str = "There are no managed indices matching your applied filters.";
pub const EMPTY_NONE: &str = "There are no existing managed indices.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Index,
    DataStream,
    Policy,
    State,
    Action,
    Info,
    JobStatus,
}

impl Column {
    pub const ALL: [Column; 7] = [
        Self::Index,
        Self::DataStream,
        Self::Policy,
        Self::State,
        Self::Action,
        Self::Info,
        Self::JobStatus,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            Self::Index => "Index",
            Self::DataStream => "Data stream",
            Self::Policy => "Policy",
            Self::State => "State",
            Self::Action => "Action",
            Self::Info => "Info",
            Self::JobStatus => "Job Status",
        }
    }

    /// Backend sort field, for sortable columns.
    pub fn sort_field(&self) -> Option<SortField> {
        match self {
            Self::Index => Some(SortField::Index),
            Self::DataStream => Some(SortField::DataStream),
            Self::Policy => Some(SortField::PolicyId),
            _ => None,
        }
    }

    pub fn cell(&self, item: &ManagedIndexItem) -> String {
        let meta = item.managed_index_meta_data.as_ref();
        match self {
            Self::Index => item.index.clone(),
            Self::DataStream => or_empty(item.data_stream.as_deref()),
            Self::Policy => or_empty(item.policy_id.as_deref()),
            Self::State => or_empty(
                meta.and_then(|m| m.state.as_ref())
                    .map(|s| s.name.as_str()),
            ),
            Self::Action => format_action_name(
                meta.and_then(|m| m.action.as_ref())
                    .map(|a| a.name.as_str()),
            ),
            Self::Info => info_message(item),
            Self::JobStatus => item.job_status().to_string(),
        }
    }
}

/// Columns to render; the data stream column is dropped unless visible.
pub fn visible_columns(data_stream_visible: bool) -> Vec<Column> {
    Column::ALL
        .into_iter()
        .filter(|c| data_stream_visible || *c != Column::DataStream)
        .collect()
}

fn or_empty(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => DEFAULT_EMPTY_DATA.to_string(),
    }
}

/// `force_merge` becomes `Force Merge`.
pub fn format_action_name(action: Option<&str>) -> String {
    let Some(action) = action.filter(|a| !a.is_empty()) else {
        return DEFAULT_EMPTY_DATA.to_string();
    };
    action
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// `info.message` of the metadata, or `-`.
pub fn info_message(item: &ManagedIndexItem) -> String {
    item.managed_index_meta_data
        .as_ref()
        .and_then(|m| m.info.as_ref())
        .and_then(|info| info.get("message"))
        .and_then(|message| message.as_str())
        .map_or_else(|| DEFAULT_EMPTY_DATA.to_string(), str::to_string)
}

/// Error shown in the policy modal, if the policy cannot be displayed.
pub fn policy_modal_error(item: &ManagedIndexItem) -> Option<String> {
    if item.policy.is_none() {
        return Some(format!(
            "Failed to load the policy: {}",
            item.policy_id.as_deref().unwrap_or_default()
        ));
    }
    if item.metadata_policy_seq_no().is_none() {
        return Some("Still initializing, please wait a moment".to_string());
    }
    None
}

pub fn empty_message(loading: bool, filter_applied: bool) -> &'static str {
    if loading {
        EMPTY_LOADING
    } else if filter_applied {
        EMPTY_FILTERED
    } else {
        EMPTY_NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(raw: serde_json::Value) -> ManagedIndexItem {
        serde_json::from_value(raw).unwrap()
    }

    #[test]
    fn test_action_name_formatting() {
        assert_eq!(format_action_name(Some("force_merge")), "Force Merge");
        assert_eq!(format_action_name(Some("rollover")), "Rollover");
        assert_eq!(format_action_name(None), "-");
        assert_eq!(format_action_name(Some("")), "-");
    }

    #[test]
    fn test_cells_default_to_dash() {
        let record = item(json!({"index": "a"}));
        assert_eq!(Column::DataStream.cell(&record), "-");
        assert_eq!(Column::Policy.cell(&record), "-");
        assert_eq!(Column::State.cell(&record), "-");
        assert_eq!(Column::Info.cell(&record), "-");
        assert_eq!(Column::JobStatus.cell(&record), "Initializing");
    }

    #[test]
    fn test_info_message() {
        let record = item(json!({
            "index": "a",
            "managedIndexMetaData": {"info": {"message": "Successfully initialized policy: p1"}}
        }));
        assert_eq!(
            Column::Info.cell(&record),
            "Successfully initialized policy: p1"
        );
    }

    #[test]
    fn test_policy_modal_error_precedence() {
        let missing_policy = item(json!({"index": "a", "policyId": "p1"}));
        assert_eq!(
            policy_modal_error(&missing_policy).as_deref(),
            Some("Failed to load the policy: p1")
        );

        let policy = json!({"description": "", "default_state": "hot", "states": []});
        let initializing = item(json!({"index": "a", "policyId": "p1", "policy": policy.clone()}));
        assert_eq!(
            policy_modal_error(&initializing).as_deref(),
            Some("Still initializing, please wait a moment")
        );

        let ready = item(json!({
            "index": "a",
            "policyId": "p1",
            "policy": policy,
            "managedIndexMetaData": {"policySeqNo": 3}
        }));
        assert_eq!(policy_modal_error(&ready), None);
    }

    #[test]
    fn test_visible_columns() {
        assert!(!visible_columns(false).contains(&Column::DataStream));
        assert_eq!(visible_columns(true).len(), 7);
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(empty_message(true, true), EMPTY_LOADING);
        assert_eq!(empty_message(false, true), EMPTY_FILTERED);
        assert_eq!(empty_message(false, false), EMPTY_NONE);
    }
}
