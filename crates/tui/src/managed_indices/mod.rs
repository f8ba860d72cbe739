//! Managed indices list view: query state, fetch control, filters, selection, and modals.

pub mod columns;
pub mod controller;
pub mod debounce;
pub mod filter;
pub mod modal;
pub mod query_state;
pub mod selection;

pub use controller::{Command, DataStreamFilter, ManagedIndicesController};
pub use debounce::{Debouncer, REFRESH_DEBOUNCE, Trigger};
pub use modal::{Modal, ModalHost, ModalKind, RetryStart};
pub use query_state::{QueryState, SemanticQuery};
pub use selection::Selection;
