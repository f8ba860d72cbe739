//! Side-effecting collaborators the view controllers are handed.
//!
//! Responsibilities:
//! - Define the notification, history, and breadcrumb capabilities.
//! - Provide the TUI's in-process implementations of each.
//!
//! Does NOT handle:
//! - Rendering toasts or breadcrumbs (see `ui`).
//!
//! Invariants:
//! - Controllers only reach these through the traits, so tests can record calls.

use crate::ui::toast::{Toast, ToastLevel};

/// Sink for user-facing notifications.
pub trait Notifier {
    fn notify(&mut self, level: ToastLevel, message: String);

    fn success(&mut self, message: String) {
        self.notify(ToastLevel::Success, message);
    }

    fn warning(&mut self, message: String) {
        self.notify(ToastLevel::Warning, message);
    }

    fn error(&mut self, message: String) {
        self.notify(ToastLevel::Error, message);
    }
}

/// The navigable location of the app, the terminal stand-in for a browser URL.
pub trait History {
    /// Overwrite the current entry.
    fn replace(&mut self, location: String);
    /// Navigate to a new entry.
    fn push(&mut self, location: String);
}

/// Application chrome around the active view.
pub trait Chrome {
    fn set_breadcrumbs(&mut self, crumbs: &[&str]);
}

/// Toasts waiting to be rendered.
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Drop toasts whose TTL has elapsed.
    pub fn prune_expired(&mut self) {
        self.toasts.retain(|t| !t.is_expired());
    }

    pub fn dismiss_all(&mut self) {
        self.toasts.clear();
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, level: ToastLevel, message: String) {
        match level {
            ToastLevel::Error => tracing::warn!(%message, "error notification"),
            _ => tracing::debug!(%message, ?level, "notification"),
        }
        self.toasts.push(Toast::new(message, level));
    }
}

/// In-memory location history.
///
/// `replace` rewrites the top entry; `push` appends.
#[derive(Debug, Default)]
pub struct LocationHistory {
    entries: Vec<String>,
}

impl LocationHistory {
    pub fn current(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl History for LocationHistory {
    fn replace(&mut self, location: String) {
        match self.entries.last_mut() {
            Some(top) => *top = location,
            None => self.entries.push(location),
        }
    }

    fn push(&mut self, location: String) {
        self.entries.push(location);
    }
}

/// Breadcrumb trail shown in the header.
#[derive(Debug, Default)]
pub struct Breadcrumbs {
    crumbs: Vec<String>,
}

impl Breadcrumbs {
    pub fn crumbs(&self) -> &[String] {
        &self.crumbs
    }

    /// Crumbs joined with ` / `.
    pub fn trail(&self) -> String {
        self.crumbs.join(" / ")
    }
}

impl Chrome for Breadcrumbs {
    fn set_breadcrumbs(&mut self, crumbs: &[&str]) {
        self.crumbs = crumbs.iter().map(|c| c.to_string()).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_replace_then_push() {
        let mut history = LocationHistory::default();
        history.replace("from=0".to_string());
        history.replace("from=20".to_string());
        assert_eq!(history.entries().len(), 1);
        history.push("#/edit-policy?id=p1".to_string());
        assert_eq!(history.current(), Some("#/edit-policy?id=p1"));
        assert_eq!(history.entries().len(), 2);
    }

    #[test]
    fn test_toast_queue_records_levels() {
        let mut queue = ToastQueue::default();
        queue.success("done".to_string());
        queue.error("boom".to_string());
        let levels: Vec<_> = queue.toasts().iter().map(|t| t.level).collect();
        assert_eq!(levels, vec![ToastLevel::Success, ToastLevel::Error]);
    }

    #[test]
    fn test_breadcrumb_trail() {
        let mut crumbs = Breadcrumbs::default();
        crumbs.set_breadcrumbs(&["Index Management", "Managed Indices"]);
        assert_eq!(crumbs.trail(), "Index Management / Managed Indices");
    }
}
