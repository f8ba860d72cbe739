//! Row selection and bulk action rules.
//!
//! Invariants:
//! - Selection holds index names and is changed only by selection events.
//! - Keys may go stale across refreshes; lookups skip records no longer listed.

use std::collections::BTreeSet;

use ism_client::models::{BulkActionResponse, ManagedIndexItem};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    keys: BTreeSet<String>,
}

impl Selection {
    /// Toggle `index`; returns whether it is now selected.
    pub fn toggle(&mut self, index: &str) -> bool {
        if self.keys.remove(index) {
            false
        } else {
            self.keys.insert(index.to_string());
            true
        }
    }

    pub fn select(&mut self, index: &str) {
        self.keys.insert(index.to_string());
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn contains(&self, index: &str) -> bool {
        self.keys.contains(index)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Selected records among `records`, in listing order.
    pub fn resolve<'a>(&self, records: &'a [ManagedIndexItem]) -> Vec<&'a ManagedIndexItem> {
        records
            .iter()
            .filter(|record| self.keys.contains(&record.index))
            .collect()
    }
}

/// Retry needs at least one selected record with a failed step.
pub fn can_retry(selected: &[&ManagedIndexItem]) -> bool {
    selected.iter().any(|record| record.has_failed())
}

pub fn can_remove_policy(selected: &[&ManagedIndexItem]) -> bool {
    !selected.is_empty()
}

/// Rollover aliases can be edited on exactly one plain (non data stream) index.
pub fn can_edit_rollover_alias(selected: &[&ManagedIndexItem]) -> bool {
    matches!(selected, [only] if only.data_stream.is_none())
}

/// `policy from <index>` or `policies from <n> indices`.
pub fn removal_subject(selected: &[&ManagedIndexItem]) -> String {
    match selected {
        [only] => format!("policy from {}", only.index),
        many => format!("policies from {} indices", many.len()),
    }
}

/// Wording of a bulk mutation's outcome notifications.
#[derive(Debug, Clone, Copy)]
pub struct BulkWording {
    /// Success prefix, followed by the updated count.
    pub success: &'static str,
    /// Failure prefix, followed by the failed index list.
    pub failure: &'static str,
    /// Shown when the request itself fails.
    pub generic_error: &'static str,
}

pub const REMOVE_POLICY_WORDING: BulkWording = BulkWording {
    success: "Removed policy from",
    failure: "Failed to remove policy from",
    generic_error: "There was a problem removing the policies",
};

pub const RETRY_POLICY_WORDING: BulkWording = BulkWording {
    success: "Retried",
    failure: "Failed to retry",
    generic_error: "There was a problem retrying managed indices",
};

/// Notifications for a bulk mutation response.
///
/// Success and failure are independent; a partial failure yields both.
pub struct BulkReport {
    pub success: Option<String>,
    pub failure: Option<String>,
}

impl BulkReport {
    pub fn from_response(response: &BulkActionResponse, wording: BulkWording) -> Self {
        let success = (response.updated_indices > 0).then(|| {
            format!(
                "{} {} managed indices",
                wording.success, response.updated_indices
            )
        });
        let failure = response
            .failures
            .then(|| format!("{} {}", wording.failure, response.failure_summary()));
        Self { success, failure }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(index: &str, data_stream: Option<&str>, meta: serde_json::Value) -> ManagedIndexItem {
        serde_json::from_value(json!({
            "index": index,
            "dataStream": data_stream,
            "policyId": "p1",
            "managedIndexMetaData": meta,
        }))
        .unwrap()
    }

    #[test]
    fn test_retry_enablement() {
        let no_meta = record("a", None, serde_json::Value::Null);
        let failed = record("b", None, json!({"action": {"name": "rollover", "failed": true}}));
        let healthy = record("c", None, json!({"retryInfo": {"failed": false}}));

        assert!(!can_retry(&[]));
        assert!(!can_retry(&[&no_meta]));
        assert!(can_retry(&[&failed]));
        assert!(can_retry(&[&healthy, &failed]));
        assert!(!can_retry(&[&healthy]));
    }

    #[test]
    fn test_edit_alias_enablement() {
        let plain = record("a", None, serde_json::Value::Null);
        let other = record("b", None, serde_json::Value::Null);
        let backing = record(".ds-m-1", Some("m"), serde_json::Value::Null);

        assert!(can_edit_rollover_alias(&[&plain]));
        assert!(!can_edit_rollover_alias(&[&plain, &other]));
        assert!(!can_edit_rollover_alias(&[&backing]));
        assert!(!can_edit_rollover_alias(&[]));
    }

    #[test]
    fn test_stale_keys_skipped() {
        let records = vec![record("a", None, serde_json::Value::Null)];
        let mut selection = Selection::default();
        selection.select("a");
        selection.select("gone");
        assert_eq!(selection.len(), 2);
        assert_eq!(selection.resolve(&records).len(), 1);
    }

    #[test]
    fn test_mixed_remove_report() {
        let response: BulkActionResponse = serde_json::from_value(json!({
            "updatedIndices": 2,
            "failures": true,
            "failedIndices": [{"indexName": "idx1", "reason": "locked"}]
        }))
        .unwrap();
        let report = BulkReport::from_response(&response, REMOVE_POLICY_WORDING);
        assert_eq!(
            report.success.as_deref(),
            Some("Removed policy from 2 managed indices")
        );
        assert_eq!(
            report.failure.as_deref(),
            Some("Failed to remove policy from [idx1, locked]")
        );
    }

    #[test]
    fn test_removal_subject() {
        let a = record("a", None, serde_json::Value::Null);
        let b = record("b", None, serde_json::Value::Null);
        assert_eq!(removal_subject(&[&a]), "policy from a");
        assert_eq!(removal_subject(&[&a, &b]), "policies from 2 indices");
    }
}
