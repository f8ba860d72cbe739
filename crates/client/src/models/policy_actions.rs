//! Registry of the action kinds an ISM policy state may contain.
//!
//! Every kind has a stable type id (its ISM JSON key), a default body, a
//! one-line summary used when listing a state's actions, and validation.
//! Action documents round-trip in the ISM shape
//! `{"<type>": {...}, "timeout": "1h", "retry": {...}}`.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

/// Action kinds understood by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionType {
    Allocation,
    Close,
    Delete,
    ForceMerge,
    IndexPriority,
    Notification,
    Open,
    ReadOnly,
    ReadWrite,
    ReplicaCount,
    Rollover,
    Rollup,
    Snapshot,
}

impl ActionType {
    pub const ALL: [ActionType; 13] = [
        Self::Allocation,
        Self::Close,
        Self::Delete,
        Self::ForceMerge,
        Self::IndexPriority,
        Self::Notification,
        Self::Open,
        Self::ReadOnly,
        Self::ReadWrite,
        Self::ReplicaCount,
        Self::Rollover,
        Self::Rollup,
        Self::Snapshot,
    ];

    /// The ISM JSON key for this action.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Allocation => "allocation",
            Self::Close => "close",
            Self::Delete => "delete",
            Self::ForceMerge => "force_merge",
            Self::IndexPriority => "index_priority",
            Self::Notification => "notification",
            Self::Open => "open",
            Self::ReadOnly => "read_only",
            Self::ReadWrite => "read_write",
            Self::ReplicaCount => "replica_count",
            Self::Rollover => "rollover",
            Self::Rollup => "rollup",
            Self::Snapshot => "snapshot",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Allocation => "Allocation",
            Self::Close => "Close",
            Self::Delete => "Delete",
            Self::ForceMerge => "Force merge",
            Self::IndexPriority => "Index priority",
            Self::Notification => "Notification",
            Self::Open => "Open",
            Self::ReadOnly => "Read only",
            Self::ReadWrite => "Read write",
            Self::ReplicaCount => "Replica count",
            Self::Rollover => "Rollover",
            Self::Rollup => "Rollup",
            Self::Snapshot => "Snapshot",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationAction {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub require: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub include: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub exclude: BTreeMap<String, String>,
    pub wait_for: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForceMergeAction {
    pub max_num_segments: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexPriorityAction {
    pub priority: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationChannel {
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageTemplate {
    pub source: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationAction {
    /// Legacy destination document (slack, chime, custom_webhook).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<NotificationChannel>,
    pub message_template: MessageTemplate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplicaCountAction {
    pub number_of_replicas: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RolloverAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_primary_shard_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_doc_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_index_age: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IsmRollup {
    pub description: String,
    pub target_index: String,
    pub page_size: u64,
    pub dimensions: Vec<Value>,
    pub metrics: Vec<Value>,
}

impl Default for IsmRollup {
    fn default() -> Self {
        Self {
            description: String::new(),
            target_index: String::new(),
            page_size: 1000,
            dimensions: Vec::new(),
            metrics: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RollupAction {
    pub ism_rollup: IsmRollup,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotAction {
    pub repository: String,
    pub snapshot: String,
}

/// The kind-specific body of an action, keyed by the ISM type id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionConfig {
    Allocation(AllocationAction),
    Close {},
    Delete {},
    ForceMerge(ForceMergeAction),
    IndexPriority(IndexPriorityAction),
    Notification(NotificationAction),
    Open {},
    ReadOnly {},
    ReadWrite {},
    ReplicaCount(ReplicaCountAction),
    Rollover(RolloverAction),
    Rollup(RollupAction),
    Snapshot(SnapshotAction),
}

impl ActionConfig {
    /// Default body used when a new action of `kind` is added to a state.
    pub fn default_for(kind: ActionType) -> Self {
        match kind {
            ActionType::Allocation => Self::Allocation(AllocationAction::default()),
            ActionType::Close => Self::Close {},
            ActionType::Delete => Self::Delete {},
            ActionType::ForceMerge => Self::ForceMerge(ForceMergeAction {
                max_num_segments: 1,
            }),
            ActionType::IndexPriority => {
                Self::IndexPriority(IndexPriorityAction { priority: 1 })
            }
            ActionType::Notification => Self::Notification(NotificationAction {
                channel: Some(NotificationChannel::default()),
                ..Default::default()
            }),
            ActionType::Open => Self::Open {},
            ActionType::ReadOnly => Self::ReadOnly {},
            ActionType::ReadWrite => Self::ReadWrite {},
            ActionType::ReplicaCount => Self::ReplicaCount(ReplicaCountAction {
                number_of_replicas: 1,
            }),
            ActionType::Rollover => Self::Rollover(RolloverAction::default()),
            ActionType::Rollup => Self::Rollup(RollupAction::default()),
            ActionType::Snapshot => Self::Snapshot(SnapshotAction::default()),
        }
    }

    pub fn kind(&self) -> ActionType {
        match self {
            Self::Allocation(_) => ActionType::Allocation,
            Self::Close {} => ActionType::Close,
            Self::Delete {} => ActionType::Delete,
            Self::ForceMerge(_) => ActionType::ForceMerge,
            Self::IndexPriority(_) => ActionType::IndexPriority,
            Self::Notification(_) => ActionType::Notification,
            Self::Open {} => ActionType::Open,
            Self::ReadOnly {} => ActionType::ReadOnly,
            Self::ReadWrite {} => ActionType::ReadWrite,
            Self::ReplicaCount(_) => ActionType::ReplicaCount,
            Self::Rollover(_) => ActionType::Rollover,
            Self::Rollup(_) => ActionType::Rollup,
            Self::Snapshot(_) => ActionType::Snapshot,
        }
    }

    /// Human-readable one-line summary.
    pub fn content(&self) -> String {
        match self {
            Self::Allocation(a) => {
                let mut parts = Vec::new();
                for (label, map) in [
                    ("require", &a.require),
                    ("include", &a.include),
                    ("exclude", &a.exclude),
                ] {
                    if !map.is_empty() {
                        let pairs = map
                            .iter()
                            .map(|(k, v)| format!("{k}={v}"))
                            .collect::<Vec<_>>()
                            .join(", ");
                        parts.push(format!("{label} {pairs}"));
                    }
                }
                if a.wait_for {
                    parts.push("wait for allocation".to_string());
                }
                format!("Allocation: {}", parts.join("; "))
            }
            Self::ForceMerge(f) => format!("Force merge to {} segments", f.max_num_segments),
            Self::IndexPriority(p) => format!("Set index priority to {}", p.priority),
            Self::Notification(n) => {
                let target = match (&n.channel, &n.destination) {
                    (Some(channel), _) if !channel.id.is_empty() => {
                        format!("channel {}", channel.id)
                    }
                    (_, Some(Value::Object(destination))) => destination
                        .keys()
                        .next()
                        .cloned()
                        .unwrap_or_else(|| "destination".to_string()),
                    _ => "-".to_string(),
                };
                format!("Notification to {target}")
            }
            Self::ReplicaCount(r) => format!("Set number of replicas to {}", r.number_of_replicas),
            Self::Rollover(r) => {
                let mut conditions = Vec::new();
                if let Some(age) = &r.min_index_age {
                    conditions.push(format!("min index age {age}"));
                }
                if let Some(docs) = r.min_doc_count {
                    conditions.push(format!("min doc count {docs}"));
                }
                if let Some(size) = &r.min_size {
                    conditions.push(format!("min size {size}"));
                }
                if let Some(size) = &r.min_primary_shard_size {
                    conditions.push(format!("min primary shard size {size}"));
                }
                if conditions.is_empty() {
                    "Rollover".to_string()
                } else {
                    format!("Rollover when {}", conditions.join(" or "))
                }
            }
            Self::Rollup(r) => format!("Rollup into {}", r.ism_rollup.target_index),
            Self::Snapshot(s) => format!(
                "Snapshot {} to repository {}",
                s.snapshot, s.repository
            ),
            other => other.kind().label().to_string(),
        }
    }

    fn validate(&self) -> Result<(), ActionValidationError> {
        let invalid = |message: &str| {
            Err(ActionValidationError::Invalid {
                kind: self.kind(),
                message: message.to_string(),
            })
        };
        match self {
            Self::Allocation(a)
                if a.require.is_empty() && a.include.is_empty() && a.exclude.is_empty() =>
            {
                invalid("at least one of require, include or exclude is needed")
            }
            Self::ForceMerge(f) if f.max_num_segments == 0 => {
                invalid("max_num_segments must be greater than 0")
            }
            Self::IndexPriority(p) if p.priority < 0 => invalid("priority must be non-negative"),
            Self::ReplicaCount(r) if r.number_of_replicas < 0 => {
                invalid("number_of_replicas must be non-negative")
            }
            Self::Notification(n) => {
                let has_channel = n.channel.as_ref().is_some_and(|c| !c.id.trim().is_empty());
                if !has_channel && n.destination.is_none() {
                    invalid("a channel or destination is required")
                } else if n.message_template.source.trim().is_empty() {
                    invalid("message is required")
                } else {
                    Ok(())
                }
            }
            Self::Rollover(r)
                if [&r.min_size, &r.min_primary_shard_size, &r.min_index_age]
                    .into_iter()
                    .flatten()
                    .any(|value| value.trim().is_empty()) =>
            {
                invalid("rollover conditions must not be blank")
            }
            Self::Rollup(r) if r.ism_rollup.target_index.trim().is_empty() => {
                invalid("target_index is required")
            }
            Self::Rollup(r) if r.ism_rollup.dimensions.is_empty() => {
                invalid("at least one dimension is required")
            }
            Self::Snapshot(s) if s.repository.trim().is_empty() => {
                invalid("repository is required")
            }
            Self::Snapshot(s) if s.snapshot.trim().is_empty() => invalid("snapshot is required"),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRetry {
    pub count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backoff: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<String>,
}

/// An action document as stored in a policy state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyAction {
    #[serde(flatten)]
    pub config: ActionConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry: Option<ActionRetry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionValidationError {
    #[error("{kind}: {message}")]
    Invalid { kind: ActionType, message: String },
}

/// An action instance being shown or edited, identified by a unique id.
#[derive(Debug, Clone, PartialEq)]
pub struct UiAction {
    id: Uuid,
    action: PolicyAction,
}

impl UiAction {
    pub fn new(action: PolicyAction) -> Self {
        Self {
            id: Uuid::new_v4(),
            action,
        }
    }

    /// A fresh action of `kind` with its default body.
    pub fn default_for(kind: ActionType) -> Self {
        Self::new(PolicyAction {
            config: ActionConfig::default_for(kind),
            timeout: None,
            retry: None,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn action(&self) -> &PolicyAction {
        &self.action
    }

    pub fn action_mut(&mut self) -> &mut PolicyAction {
        &mut self.action
    }

    pub fn kind(&self) -> ActionType {
        self.action.config.kind()
    }

    pub fn content(&self) -> String {
        self.action.config.content()
    }

    pub fn validate(&self) -> Result<(), ActionValidationError> {
        self.action.config.validate()?;
        if let Some(backoff) = self.action.retry.as_ref().and_then(|r| r.backoff.as_deref())
            && !matches!(backoff, "exponential" | "constant" | "linear")
        {
            return Err(ActionValidationError::Invalid {
                kind: self.kind(),
                message: format!("unknown retry backoff '{backoff}'"),
            });
        }
        Ok(())
    }

    /// Copy of this action under a new id.
    pub fn clone_with_new_id(&self) -> Self {
        Self::new(self.action.clone())
    }

    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(&self.action)
    }

    pub fn from_json(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value).map(Self::new)
    }
}
