//! Single modal host for the managed indices view.
//!
//! At most one modal is open. Cancelling closes it without side effects;
//! confirming is handled by the controller, which may keep the modal open
//! (marked submitting) until the backend answers.

use ism_client::models::Policy;
use serde_json::Value;

/// Where a retry resumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryStart {
    CurrentState,
    State(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    Info {
        index: String,
        info: Option<Value>,
    },
    Policy {
        index: String,
        policy_id: Option<String>,
        policy: Option<Policy>,
        error: Option<String>,
    },
    Confirmation {
        title: String,
        body: String,
        action_label: String,
        indices: Vec<String>,
    },
    Retry {
        indices: Vec<String>,
        /// State names offered as restart points.
        states: Vec<String>,
        start: RetryStart,
    },
    RolloverAlias {
        index: String,
        alias: String,
        error: Option<String>,
    },
}

impl Modal {
    pub fn kind(&self) -> ModalKind {
        match self {
            Self::Info { .. } => ModalKind::Info,
            Self::Policy { .. } => ModalKind::Policy,
            Self::Confirmation { .. } => ModalKind::Confirmation,
            Self::Retry { .. } => ModalKind::Retry,
            Self::RolloverAlias { .. } => ModalKind::RolloverAlias,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Info,
    Policy,
    Confirmation,
    Retry,
    RolloverAlias,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ModalHost {
    #[default]
    Closed,
    Open {
        modal: Modal,
        submitting: bool,
    },
}

impl ModalHost {
    pub fn open(&mut self, modal: Modal) {
        *self = Self::Open {
            modal,
            submitting: false,
        };
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn modal(&self) -> Option<&Modal> {
        match self {
            Self::Open { modal, .. } => Some(modal),
            Self::Closed => None,
        }
    }

    pub fn modal_mut(&mut self) -> Option<&mut Modal> {
        match self {
            Self::Open { modal, .. } => Some(modal),
            Self::Closed => None,
        }
    }

    pub fn kind(&self) -> Option<ModalKind> {
        self.modal().map(Modal::kind)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(
            self,
            Self::Open {
                submitting: true,
                ..
            }
        )
    }

    pub fn set_submitting(&mut self, value: bool) {
        if let Self::Open { submitting, .. } = self {
            *submitting = value;
        }
    }

    /// Step the retry start point: current state, then each named state.
    pub fn cycle_retry_start(&mut self) {
        if let Some(Modal::Retry { states, start, .. }) = self.modal_mut() {
            let next = match start {
                RetryStart::CurrentState => states.first().cloned(),
                RetryStart::State(name) => states
                    .iter()
                    .position(|s| s == name.as_str())
                    .and_then(|i| states.get(i + 1))
                    .cloned(),
            };
            *start = next.map_or(RetryStart::CurrentState, RetryStart::State);
        }
    }

    /// Append to the rollover alias input.
    pub fn push_alias_char(&mut self, c: char) {
        if let Some(Modal::RolloverAlias { alias, error, .. }) = self.modal_mut() {
            alias.push(c);
            *error = None;
        }
    }

    pub fn pop_alias_char(&mut self) {
        if let Some(Modal::RolloverAlias { alias, .. }) = self.modal_mut() {
            alias.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close() {
        let mut host = ModalHost::default();
        assert!(!host.is_open());
        host.open(Modal::Info {
            index: "a".to_string(),
            info: None,
        });
        assert_eq!(host.kind(), Some(ModalKind::Info));
        host.set_submitting(true);
        assert!(host.is_submitting());
        host.close();
        assert_eq!(host, ModalHost::Closed);
        host.set_submitting(true);
        assert!(!host.is_submitting());
    }

    #[test]
    fn test_retry_start_cycles_through_states() {
        let mut host = ModalHost::default();
        host.open(Modal::Retry {
            indices: vec!["a".to_string()],
            states: vec!["hot".to_string(), "delete".to_string()],
            start: RetryStart::CurrentState,
        });

        let start = |host: &ModalHost| match host.modal() {
            Some(Modal::Retry { start, .. }) => start.clone(),
            _ => panic!("retry modal expected"),
        };

        host.cycle_retry_start();
        assert_eq!(start(&host), RetryStart::State("hot".to_string()));
        host.cycle_retry_start();
        assert_eq!(start(&host), RetryStart::State("delete".to_string()));
        host.cycle_retry_start();
        assert_eq!(start(&host), RetryStart::CurrentState);
    }

    #[test]
    fn test_alias_editing_clears_error() {
        let mut host = ModalHost::default();
        host.open(Modal::RolloverAlias {
            index: "a".to_string(),
            alias: String::new(),
            error: Some("Alias is required".to_string()),
        });
        host.push_alias_char('x');
        host.push_alias_char('y');
        host.pop_alias_char();
        assert_eq!(
            host.modal(),
            Some(&Modal::RolloverAlias {
                index: "a".to_string(),
                alias: "x".to_string(),
                error: None,
            })
        );
    }
}
