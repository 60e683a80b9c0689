//! columnview - A scrollable, sortable, checkbox-selectable column view
//! widget for ratatui.
//!
//! The widget owns an ordered row store with stable row IDs and a parallel
//! selection set. Any mutation rebuilds the whole body element tree from
//! current state and the next draw shows it; there is no diffing. See
//! [`widget::ColumnView`] for the embedding API.

pub mod event;
pub mod input;
pub mod layout;
pub mod store;
pub mod style;
pub mod view;
pub mod widget;

pub use input::{Action, handle_key, handle_mouse};
pub use store::{RowId, RowSnapshot};
pub use widget::{ColumnSpec, ColumnView};
