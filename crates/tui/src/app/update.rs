//! Folding actions into application state.

use std::time::Instant;

use crate::action::Action;
use crate::app::App;
use crate::services::Notifier;

impl App {
    pub fn update(&mut self, action: Action) {
        self.update_at(action, Instant::now());
    }

    /// `update` with an explicit clock, for debounce-sensitive callers.
    pub fn update_at(&mut self, action: Action, now: Instant) {
        match action {
            Action::Tick => {
                self.spinner_frame = self.spinner_frame.wrapping_add(1);
                self.toasts.prune_expired();
                let commands = self.managed_indices.tick(now);
                self.queue(commands);
            }
            Action::Notify(level, message) => self.toasts.notify(level, message),
            Action::ManagedIndicesLoaded { seq, result } => {
                self.managed_indices
                    .on_fetch_completed(seq, result, &mut self.toasts, &mut self.history);
            }
            Action::DataStreamsLoaded(result) => {
                self.managed_indices
                    .on_data_streams_loaded(result, &mut self.toasts);
            }
            Action::PolicyRemoved(result) => {
                let commands = self
                    .managed_indices
                    .on_remove_policy_completed(result, &mut self.toasts, now);
                self.queue(commands);
            }
            Action::PolicyRetried(result) => {
                let commands = self
                    .managed_indices
                    .on_retry_completed(result, &mut self.toasts, now);
                self.queue(commands);
            }
            Action::RolloverAliasEdited { index, result } => {
                let commands = self.managed_indices.on_rollover_alias_edited(
                    &index,
                    result,
                    &mut self.toasts,
                    now,
                );
                self.queue(commands);
            }
            Action::SampleDataLoaded(result) => {
                if let Some(preview) = self.preview.as_mut() {
                    preview.on_data_loaded(result, &mut self.toasts);
                }
            }
            Action::Input(key) => {
                if let Some(action) = self.handle_input_at(key, now) {
                    self.pending.push(action);
                }
            }
            Action::Resize(..) | Action::Quit => {}
            trigger => {
                tracing::debug!(action = trigger.type_name(), "trigger reached update");
            }
        }
    }
}
