//! Rendering for the TUI screens.
//!
//! Screens take plain render configs built from controller state; they never
//! mutate application state.

pub mod managed_indices;
pub mod modal;
pub mod preview;
pub mod theme;
pub mod toast;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub use theme::Theme;
pub use toast::{Toast, ToastLevel};

/// A rectangle centered in `area`, sized as percentages of it.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
