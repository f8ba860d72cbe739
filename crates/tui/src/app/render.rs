//! Top-level frame layout: header, active screen, footer, toasts.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, CurrentScreen, FOOTER_HEIGHT, HEADER_HEIGHT};
use crate::ui::managed_indices::{ManagedIndicesRenderConfig, render_managed_indices};
use crate::ui::preview::{PreviewRenderConfig, render_preview};
use crate::ui::toast::render_toasts;

const MANAGED_INDICES_HINTS: &str = " / search  s sort  o order  d data streams  f filter  c reset  space select  x remove  t retry  a alias  i info  enter policy  r refresh  n/p page  +/- size  q quit";
const PREVIEW_HINTS: &str = " h/l column  space show/hide  s sort  n/p page  +/- size  r reload  tab back  q quit";

impl App {
    pub fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(f.area());

        let mut header = vec![Span::styled(
            format!(" {}", self.breadcrumbs.trail()),
            self.theme.title(),
        )];
        if let Some(location) = self.history.current() {
            header.push(Span::styled(format!("   ?{location}"), self.theme.text_dim()));
        }
        f.render_widget(Paragraph::new(Line::from(header)), chunks[0]);

        let hints = match (self.current_screen, self.preview.as_ref()) {
            (CurrentScreen::TransformPreview, Some(preview)) => {
                render_preview(
                    f,
                    chunks[1],
                    PreviewRenderConfig {
                        preview,
                        theme: &self.theme,
                        spinner_frame: self.spinner_frame,
                    },
                );
                PREVIEW_HINTS
            }
            _ => {
                render_managed_indices(
                    f,
                    chunks[1],
                    ManagedIndicesRenderConfig {
                        controller: &self.managed_indices,
                        theme: &self.theme,
                        spinner_frame: self.spinner_frame,
                    },
                );
                MANAGED_INDICES_HINTS
            }
        };
        f.render_widget(
            Paragraph::new(hints).style(self.theme.text_dim()),
            chunks[2],
        );

        render_toasts(f, self.toasts.toasts(), FOOTER_HEIGHT, &self.theme);
    }
}
