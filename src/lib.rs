//! Clipboard History Explorer - Browse and search clipboard history
//!
//! This library provides the presentation layer for a clipboard history
//! manager. It supports:
//!
//! - Filtering history by search text, favorites, and content type
//! - Rendering records into escaped, display-ready list items
//! - Favorite/delete/paste actions with backend-authoritative refresh
//! - Delayed hover previews for long text content
//!
//! # Example
//!
//! ```no_run
//! use clipboard_history_explorer::backend::memory::MemoryBackend;
//! use clipboard_history_explorer::view::HistoryView;
//!
//! let backend = MemoryBackend::open(std::path::Path::new("history.json"))?;
//! let view = HistoryView::new(backend);
//! println!("Showing {} items", view.items().len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod backend;
pub mod cli;
pub mod clipboard;
pub mod models;
pub mod tui;
pub mod utils;
pub mod view;

// Re-export commonly used types
pub use backend::{ALL_TYPES_LABEL, FAVORITES_LABEL, HistoryBackend, filter_label};
pub use models::{DataType, HistoryRecord, Settings, merge_settings};
pub use view::{HistoryView, QueryState, render_list};
