//! Colors and style builders shared by every screen.

use ratatui::style::{Color, Modifier, Style};

/// Braille frames for the loading spinner.
pub const SPINNER_CHARS: [char; 8] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧'];

pub fn spinner_char(frame: u8) -> char {
    SPINNER_CHARS[frame as usize % SPINNER_CHARS.len()]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub text: Color,
    pub text_dim: Color,
    pub accent: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub disabled: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text: Color::White,
            text_dim: Color::Gray,
            accent: Color::Cyan,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            highlight_fg: Color::Black,
            highlight_bg: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::Blue,
            disabled: Color::DarkGray,
        }
    }
}

impl Theme {
    pub fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn text_dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.highlight_fg)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn disabled(&self) -> Style {
        Style::default().fg(self.disabled)
    }

    pub fn table_header(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Enabled actions render normally, disabled ones dimmed.
    pub fn action(&self, enabled: bool) -> Style {
        if enabled { self.text() } else { self.disabled() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_wraps() {
        assert_eq!(spinner_char(0), spinner_char(8));
    }

    #[test]
    fn test_disabled_action_dimmed() {
        let theme = Theme::default();
        assert_eq!(theme.action(false).fg, Some(Color::DarkGray));
        assert_eq!(theme.action(true).fg, Some(Color::White));
    }
}
