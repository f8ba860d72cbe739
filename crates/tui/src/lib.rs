//! ISM TUI library.
//!
//! Application state, view controllers, and rendering for the OpenSearch
//! Index State Management terminal client.
//!
//! # Example
//!
//! ```rust
//! use ism_tui::{Action, App};
//! use ism_config::PersistedState;
//! use crossterm::event::{KeyCode, KeyEvent};
//!
//! let mut app = App::new(&PersistedState::default(), 20, None, None);
//! let quit = app.handle_input(KeyEvent::from(KeyCode::Char('q')));
//! assert!(matches!(quit, Some(Action::Quit)));
//! ```

pub mod action;
pub mod app;
pub mod cli;
pub mod managed_indices;
pub mod runtime;
pub mod services;
pub mod transforms;
pub mod ui;

pub use action::Action;
pub use app::{App, CurrentScreen, FOOTER_HEIGHT, HEADER_HEIGHT};
pub use managed_indices::{Command, ManagedIndicesController};
pub use services::{Breadcrumbs, Chrome, History, LocationHistory, Notifier, ToastQueue};
pub use transforms::TransformPreview;
pub use ui::toast::{Toast, ToastLevel};
