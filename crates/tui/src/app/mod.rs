//! Application state machine.
//!
//! Responsibilities:
//! - Own the screens' controllers and the in-process collaborators.
//! - Fold actions into state (`update`) and map keys to state changes (`input`).
//! - Queue trigger actions for the runtime (`drain_effects`).
//!
//! Does NOT handle:
//! - Executing backend calls (see `runtime::side_effects`).

mod input;
mod render;
mod update;

use std::time::Instant;

use ism_config::PersistedState;

use crate::action::Action;
use crate::managed_indices::ManagedIndicesController;
use crate::services::{Breadcrumbs, LocationHistory, ToastQueue};
use crate::transforms::TransformPreview;
use crate::ui::Theme;

pub const HEADER_HEIGHT: u16 = 1;
pub const FOOTER_HEIGHT: u16 = 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CurrentScreen {
    #[default]
    ManagedIndices,
    TransformPreview,
}

#[derive(Debug)]
pub struct App {
    pub current_screen: CurrentScreen,
    pub managed_indices: ManagedIndicesController,
    pub preview: Option<TransformPreview>,
    pub toasts: ToastQueue,
    pub history: LocationHistory,
    pub breadcrumbs: Breadcrumbs,
    pub theme: Theme,
    pub spinner_frame: u8,
    profile: Option<String>,
    pending: Vec<Action>,
}

impl App {
    /// Restore the list view from `persisted`, falling back to `page_size`.
    pub fn new(
        persisted: &PersistedState,
        page_size: u64,
        preview: Option<TransformPreview>,
        profile: Option<String>,
    ) -> Self {
        let managed_indices = ManagedIndicesController::from_location(
            persisted.managed_indices_location.as_deref(),
            page_size,
        );
        Self {
            current_screen: CurrentScreen::default(),
            managed_indices,
            preview,
            toasts: ToastQueue::default(),
            history: LocationHistory::default(),
            breadcrumbs: Breadcrumbs::default(),
            theme: Theme::default(),
            spinner_frame: 0,
            profile,
            pending: Vec::new(),
        }
    }

    /// Queue the initial loads of every screen.
    pub fn mount(&mut self, now: Instant) {
        let commands = self
            .managed_indices
            .mount(now, &mut self.history, &mut self.breadcrumbs);
        self.queue(commands);
        if let Some(preview) = self.preview.as_mut() {
            let command = preview.fetch_data();
            self.pending.push(command.into());
        }
    }

    /// Trigger actions produced since the last call.
    pub fn drain_effects(&mut self) -> Vec<Action> {
        std::mem::take(&mut self.pending)
    }

    pub fn persisted_state(&self) -> PersistedState {
        PersistedState {
            managed_indices_location: Some(self.managed_indices.location()),
            last_profile: self.profile.clone(),
        }
    }

    fn queue<C: Into<Action>>(&mut self, commands: Vec<C>) {
        self.pending.extend(commands.into_iter().map(Into::into));
    }

    fn switch_screen(&mut self) {
        self.current_screen = match self.current_screen {
            CurrentScreen::ManagedIndices if self.preview.is_some() => {
                CurrentScreen::TransformPreview
            }
            _ => CurrentScreen::ManagedIndices,
        };
    }
}
