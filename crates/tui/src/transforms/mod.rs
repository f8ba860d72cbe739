//! Transform definition screens.

pub mod preview;

pub use preview::{PreviewColumn, PreviewCommand, SortingColumn, TransformPreview};
