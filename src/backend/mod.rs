//! Backend contract for history storage.
//!
//! The view layer never touches storage directly; everything goes through
//! [`HistoryBackend`]. The backend is the single authority for record state:
//! the UI never flips a favorite or removes a record locally, it asks the
//! backend and re-fetches.
//!
//! `get_history` is keyed by a *filter label* string rather than a boolean.
//! The label values are part of the wire contract and must not drift; use
//! [`filter_label`] for the mapping.

pub mod memory;

use anyhow::Result;

use crate::models::{HistoryRecord, Settings};

/// Filter label requesting only favorited records.
pub const FAVORITES_LABEL: &str = "Favorites ★";
/// Filter label requesting all records regardless of type or favorite flag.
pub const ALL_TYPES_LABEL: &str = "All Types";

/// Map the favorites-only flag to the backend's filter label.
pub fn filter_label(favorites_only: bool) -> &'static str {
    if favorites_only { FAVORITES_LABEL } else { ALL_TYPES_LABEL }
}

/// Storage operations the history view depends on.
///
/// `get_history` is a pure query: the returned order is the backend's and the
/// caller must preserve it. Mutating operations return no data; callers are
/// expected to re-fetch afterwards.
pub trait HistoryBackend {
    /// Fetch records matching `filter_label` and the substring `query`.
    fn get_history(&self, filter_label: &str, query: &str) -> Result<Vec<HistoryRecord>>;

    /// Flip the favorite flag of `id`.
    fn toggle_favorite(&mut self, id: i64) -> Result<()>;

    /// Permanently remove `id` from history.
    fn delete_item(&mut self, id: i64) -> Result<()>;

    /// Write the full content of `id` back to the OS clipboard.
    fn paste_item(&mut self, id: i64) -> Result<()>;

    /// Current settings, free-form key/value.
    fn get_settings(&self) -> Result<Settings>;

    /// Replace the stored settings. Callers must merge with the current
    /// settings first (see [`crate::models::merge_settings`]) so unrelated
    /// keys survive.
    fn save_settings(&mut self, settings: Settings) -> Result<()>;
}
