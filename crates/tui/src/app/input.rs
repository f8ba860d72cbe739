//! Keyboard handling.
//!
//! Input is routed to the innermost open surface first: modal, then the data
//! stream filter, then search editing, then the active screen.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::Action;
use crate::app::{App, CurrentScreen};
use crate::managed_indices::ModalKind;

impl App {
    /// Apply a key press. Returns `Action::Quit` when the app should exit.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        self.handle_input_at(key, Instant::now())
    }

    pub fn handle_input_at(&mut self, key: KeyEvent, now: Instant) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        if self.current_screen == CurrentScreen::ManagedIndices {
            if self.managed_indices.modal().is_open() {
                self.handle_modal_key(key);
                return None;
            }
            if self.managed_indices.data_stream_filter().open {
                self.handle_filter_key(key, now);
                return None;
            }
            if self.managed_indices.is_editing_search() {
                self.handle_search_key(key, now);
                return None;
            }
        }

        match key.code {
            KeyCode::Char('q') => return Some(Action::Quit),
            KeyCode::Tab => {
                self.switch_screen();
                return None;
            }
            _ => {}
        }

        match self.current_screen {
            CurrentScreen::ManagedIndices => self.handle_managed_indices_key(key, now),
            CurrentScreen::TransformPreview => self.handle_preview_key(key),
        }
        None
    }

    fn handle_managed_indices_key(&mut self, key: KeyEvent, now: Instant) {
        let mi = &mut self.managed_indices;
        let commands = match key.code {
            KeyCode::Char('/') => {
                mi.begin_search_edit();
                Vec::new()
            }
            KeyCode::Char('s') => mi.cycle_sort_field(now),
            KeyCode::Char('o') => mi.flip_sort_direction(now),
            KeyCode::Char('d') => mi.toggle_data_streams(now),
            KeyCode::Char('r') => mi.refresh(now),
            KeyCode::Char('n') | KeyCode::Right => mi.next_page(),
            KeyCode::Char('p') | KeyCode::Left => mi.prev_page(),
            KeyCode::Char('+') | KeyCode::Char('=') => mi.step_page_size(true),
            KeyCode::Char('-') => mi.step_page_size(false),
            KeyCode::Char('f') => mi.open_data_stream_filter(),
            KeyCode::Char('c') => mi.reset_filters(now),
            KeyCode::Down | KeyCode::Char('j') => {
                mi.move_cursor(1);
                Vec::new()
            }
            KeyCode::Up | KeyCode::Char('k') => {
                mi.move_cursor(-1);
                Vec::new()
            }
            KeyCode::Char(' ') => {
                mi.toggle_selected();
                Vec::new()
            }
            KeyCode::Char('v') => {
                mi.toggle_select_all();
                Vec::new()
            }
            KeyCode::Char('x') => {
                mi.open_remove_policy();
                Vec::new()
            }
            KeyCode::Char('t') => {
                mi.open_retry();
                Vec::new()
            }
            KeyCode::Char('a') => {
                mi.open_edit_rollover_alias();
                Vec::new()
            }
            KeyCode::Char('i') => {
                mi.open_info();
                Vec::new()
            }
            KeyCode::Enter => {
                mi.open_policy();
                Vec::new()
            }
            _ => Vec::new(),
        };
        self.queue(commands);
    }

    fn handle_search_key(&mut self, key: KeyEvent, now: Instant) {
        let mi = &mut self.managed_indices;
        let commands = match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                mi.end_search_edit();
                Vec::new()
            }
            KeyCode::Backspace => mi.pop_search_char(now),
            KeyCode::Char(c) => mi.push_search_char(c, now),
            _ => Vec::new(),
        };
        self.queue(commands);
    }

    fn handle_filter_key(&mut self, key: KeyEvent, now: Instant) {
        let mi = &mut self.managed_indices;
        let commands = match key.code {
            KeyCode::Esc | KeyCode::Char('f') => {
                mi.close_data_stream_filter();
                Vec::new()
            }
            KeyCode::Down | KeyCode::Char('j') => {
                mi.move_filter_cursor(1);
                Vec::new()
            }
            KeyCode::Up | KeyCode::Char('k') => {
                mi.move_filter_cursor(-1);
                Vec::new()
            }
            KeyCode::Enter => mi.choose_data_stream(now),
            _ => Vec::new(),
        };
        self.queue(commands);
    }

    fn handle_modal_key(&mut self, key: KeyEvent) {
        let kind = self.managed_indices.modal().kind();
        let commands = match (kind, key.code) {
            (_, KeyCode::Esc) => {
                self.managed_indices.cancel_modal();
                Vec::new()
            }
            (Some(ModalKind::Policy), KeyCode::Char('e')) => {
                self.managed_indices.confirm_modal(&mut self.history)
            }
            (Some(ModalKind::Policy), KeyCode::Enter) => {
                self.managed_indices.cancel_modal();
                Vec::new()
            }
            (Some(ModalKind::Retry), KeyCode::Tab) => {
                self.managed_indices.modal_host_mut().cycle_retry_start();
                Vec::new()
            }
            (Some(ModalKind::RolloverAlias), KeyCode::Backspace) => {
                self.managed_indices.modal_host_mut().pop_alias_char();
                Vec::new()
            }
            (Some(ModalKind::RolloverAlias), KeyCode::Char(c)) => {
                self.managed_indices.modal_host_mut().push_alias_char(c);
                Vec::new()
            }
            (_, KeyCode::Enter) => self.managed_indices.confirm_modal(&mut self.history),
            _ => Vec::new(),
        };
        self.queue(commands);
    }

    fn handle_preview_key(&mut self, key: KeyEvent) {
        let Some(preview) = self.preview.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => preview.move_column_cursor(-1),
            KeyCode::Right | KeyCode::Char('l') => preview.move_column_cursor(1),
            KeyCode::Char(' ') => preview.toggle_column(),
            KeyCode::Char('s') => preview.cycle_sort(),
            KeyCode::Char('n') => preview.next_page(),
            KeyCode::Char('p') => preview.prev_page(),
            KeyCode::Char('+') | KeyCode::Char('=') => preview.step_page_size(true),
            KeyCode::Char('-') => preview.step_page_size(false),
            KeyCode::Char('r') => {
                let command = preview.fetch_data();
                self.pending.push(command.into());
            }
            _ => {}
        }
    }
}
