//! ISM policy documents.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::policy_actions::UiAction;

/// An ISM policy as embedded in a managed index listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Policy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_id: Option<String>,
    pub description: String,
    pub default_state: String,
    pub states: Vec<PolicyState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ism_template: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyState {
    pub name: String,
    /// Raw action documents; see [`PolicyState::ui_actions`].
    pub actions: Vec<Value>,
    pub transitions: Vec<Transition>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transition {
    pub state_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Value>,
}

impl PolicyState {
    /// Decode each action document through the action registry.
    ///
    /// Unknown action kinds yield `Err` with the raw document so callers can
    /// still show something for them.
    pub fn ui_actions(&self) -> Vec<Result<UiAction, Value>> {
        self.actions
            .iter()
            .map(|raw| UiAction::from_json(raw.clone()).map_err(|_| raw.clone()))
            .collect()
    }
}

impl Transition {
    /// One-line description of the transition.
    pub fn summary(&self) -> String {
        match &self.conditions {
            Some(conditions) => format!("-> {} when {}", self.state_name, conditions),
            None => format!("-> {}", self.state_name),
        }
    }
}
