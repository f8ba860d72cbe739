//! Transient notifications stacked in the bottom-right corner.
//!
//! Each toast has a unique id, a severity, and a TTL after which it is pruned.

use std::time::{Duration, Instant};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use uuid::Uuid;

use super::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Success => "OK",
            Self::Warning => "WARN",
            Self::Error => "ERR",
        }
    }

    /// Errors stay up twice as long.
    pub fn ttl(&self) -> Duration {
        match self {
            Self::Info | Self::Success | Self::Warning => Duration::from_secs(5),
            Self::Error => Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub level: ToastLevel,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl Toast {
    pub fn new(message: String, level: ToastLevel) -> Self {
        Self {
            id: Uuid::new_v4(),
            message,
            level,
            created_at: Instant::now(),
            ttl: level.ttl(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }
}

const MAX_TOASTS: usize = 5;
const TOAST_HEIGHT: u16 = 4;
const TOAST_WIDTH: u16 = 60;

/// Render the most recent live toasts above the footer.
pub fn render_toasts(f: &mut Frame, toasts: &[Toast], footer_height: u16, theme: &Theme) {
    let active: Vec<&Toast> = toasts.iter().filter(|t| !t.is_expired()).collect();
    if active.is_empty() {
        return;
    }
    let active = &active[active.len().saturating_sub(MAX_TOASTS)..];

    let area = f.area();
    let total_height = active.len() as u16 * TOAST_HEIGHT;
    if area.height < footer_height + total_height + 2 || area.width < TOAST_WIDTH + 2 {
        return;
    }

    let toast_area = Rect {
        x: area.width.saturating_sub(TOAST_WIDTH + 2),
        y: area.height.saturating_sub(footer_height + total_height + 1),
        width: TOAST_WIDTH,
        height: total_height,
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(TOAST_HEIGHT); active.len()])
        .split(toast_area);

    for (toast, chunk) in active.iter().zip(chunks.iter()) {
        render_single_toast(f, toast, *chunk, theme);
    }
}

fn render_single_toast(f: &mut Frame, toast: &Toast, area: Rect, theme: &Theme) {
    let style = match toast.level {
        ToastLevel::Info => theme.text().fg(theme.info),
        ToastLevel::Success => theme.success(),
        ToastLevel::Warning => theme.warning(),
        ToastLevel::Error => theme.error(),
    };
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", toast.level.label()),
            style.add_modifier(Modifier::BOLD),
        ),
        Span::raw(toast.message.as_str()),
    ]);
    let paragraph = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL).border_style(style))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expiration() {
        let toast = Toast::new("fresh".to_string(), ToastLevel::Info);
        assert!(!toast.is_expired());

        let mut expired = Toast::new("old".to_string(), ToastLevel::Info);
        expired.ttl = Duration::from_millis(1);
        expired.created_at = Instant::now() - Duration::from_secs(1);
        assert!(expired.is_expired());
    }

    #[test]
    fn test_toast_level_ttl() {
        assert_eq!(ToastLevel::Success.ttl(), Duration::from_secs(5));
        assert_eq!(ToastLevel::Warning.ttl(), Duration::from_secs(5));
        assert_eq!(ToastLevel::Error.ttl(), Duration::from_secs(10));
    }

    #[test]
    fn test_toast_unique_ids() {
        let a = Toast::new("a".to_string(), ToastLevel::Info);
        let b = Toast::new("a".to_string(), ToastLevel::Info);
        assert_ne!(a.id, b.id);
    }
}
