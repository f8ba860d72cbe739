//! Modal dialogs of the managed indices screen.

use ratatui::{
    Frame,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::managed_indices::columns::DEFAULT_EMPTY_DATA;
use crate::managed_indices::{Modal, RetryStart};
use crate::ui::centered_rect;
use crate::ui::theme::Theme;

const MODAL_WIDTH_PERCENT: u16 = 70;
const MODAL_HEIGHT_PERCENT: u16 = 70;

/// Title and body text of a modal.
pub fn modal_text(modal: &Modal) -> (String, Vec<String>) {
    match modal {
        Modal::Info { index, info } => {
            let body = match info {
                Some(info) => serde_json::to_string_pretty(info)
                    .unwrap_or_else(|_| info.to_string())
                    .lines()
                    .map(str::to_string)
                    .collect(),
                None => vec![DEFAULT_EMPTY_DATA.to_string()],
            };
            (format!("Info: {index}"), body)
        }
        Modal::Policy {
            index,
            policy_id,
            policy,
            error,
        } => {
            let title = format!("Policy: {}", policy_id.as_deref().unwrap_or(DEFAULT_EMPTY_DATA));
            let mut body = vec![format!("Index: {index}")];
            if let Some(error) = error {
                body.push(String::new());
                body.push(error.clone());
            }
            if let Some(policy) = policy {
                body.push(format!("Description: {}", policy.description));
                body.push(format!("Default state: {}", policy.default_state));
                for state in &policy.states {
                    body.push(String::new());
                    body.push(format!("State \"{}\"", state.name));
                    for action in state.ui_actions() {
                        match action {
                            Ok(action) => body.push(format!("  - {}", action.content())),
                            Err(raw) => body.push(format!("  - {raw}")),
                        }
                    }
                    for transition in &state.transitions {
                        body.push(format!("  {}", transition.summary()));
                    }
                }
            }
            body.push(String::new());
            body.push("[e] Edit  [Esc] Close".to_string());
            (title, body)
        }
        Modal::Confirmation {
            title,
            body,
            action_label,
            indices,
        } => {
            let mut lines = vec![body.clone(), String::new()];
            lines.extend(indices.iter().map(|i| format!("  {i}")));
            lines.push(String::new());
            lines.push(format!("[Enter] {action_label}  [Esc] Cancel"));
            (title.clone(), lines)
        }
        Modal::Retry {
            indices,
            states,
            start,
        } => {
            let mut lines = vec![format!("Retry {} managed indices", indices.len()), String::new()];
            let current = match start {
                RetryStart::CurrentState => "Retry policy from current state".to_string(),
                RetryStart::State(name) => format!("Retry policy from selected state: {name}"),
            };
            lines.push(current);
            if !states.is_empty() {
                lines.push(format!("States: {}", states.join(", ")));
            }
            lines.push(String::new());
            lines.push("[Tab] Change start  [Enter] Retry  [Esc] Cancel".to_string());
            ("Retry policy".to_string(), lines)
        }
        Modal::RolloverAlias {
            index,
            alias,
            error,
        } => {
            let mut lines = vec![format!("Index: {index}"), format!("Rollover alias: {alias}_")];
            if let Some(error) = error {
                lines.push(error.clone());
            }
            lines.push(String::new());
            lines.push("[Enter] Edit  [Esc] Cancel".to_string());
            ("Edit rollover alias".to_string(), lines)
        }
    }
}

pub fn render_modal(f: &mut Frame, modal: &Modal, submitting: bool, theme: &Theme) {
    let area = centered_rect(MODAL_WIDTH_PERCENT, MODAL_HEIGHT_PERCENT, f.area());
    f.render_widget(Clear, area);

    let (title, body) = modal_text(modal);
    let mut lines: Vec<Line> = body.into_iter().map(Line::from).collect();
    if submitting {
        lines.push(Line::from(Span::styled("Submitting...", theme.warning())));
    }

    let border = match modal {
        Modal::Confirmation { .. } => theme.error(),
        _ => theme.border_focused(),
    };
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(border)
                .title_style(theme.title()),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ism_client::models::Policy;
    use serde_json::json;

    #[test]
    fn test_policy_modal_lists_action_summaries() {
        let policy: Policy = serde_json::from_value(json!({
            "description": "hot delete",
            "default_state": "hot",
            "states": [
                {
                    "name": "hot",
                    "actions": [{"rollover": {"min_index_age": "1d"}}],
                    "transitions": [{"state_name": "delete"}]
                },
                {"name": "delete", "actions": [{"delete": {}}], "transitions": []}
            ]
        }))
        .unwrap();
        let (title, body) = modal_text(&Modal::Policy {
            index: "logs-1".to_string(),
            policy_id: Some("hot-delete".to_string()),
            policy: Some(policy),
            error: None,
        });
        assert_eq!(title, "Policy: hot-delete");
        assert!(body.iter().any(|l| l == "State \"hot\""));
        assert!(body.iter().any(|l| l == "  -> delete"));
        assert_eq!(body.iter().filter(|l| l.starts_with("  - ")).count(), 2);
    }

    #[test]
    fn test_policy_modal_shows_error() {
        let (_, body) = modal_text(&Modal::Policy {
            index: "logs-1".to_string(),
            policy_id: Some("gone".to_string()),
            policy: None,
            error: Some("Failed to load the policy: gone".to_string()),
        });
        assert!(body.contains(&"Failed to load the policy: gone".to_string()));
    }

    #[test]
    fn test_info_modal_without_info() {
        let (title, body) = modal_text(&Modal::Info {
            index: "logs-1".to_string(),
            info: None,
        });
        assert_eq!(title, "Info: logs-1");
        assert_eq!(body, vec!["-".to_string()]);
    }
}
