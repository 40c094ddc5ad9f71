//! The history view controller and its parts.
//!
//! - [`query`] - search text + favorites flag, mapped to the backend's filter label
//! - [`render`] - pure record-to-item-view rendering
//! - [`preview`] - hover-delayed tooltip state machine and placement
//! - [`controller`] - gesture dispatch and fetch/replace logic tying it together

pub mod controller;
pub mod preview;
pub mod query;
pub mod render;

pub use controller::{AlreadyConfirmed, DeleteConfirmation, HistoryView};
pub use preview::{PreviewController, place_tooltip};
pub use query::QueryState;
pub use render::{ItemIcon, ItemView, render_list};
