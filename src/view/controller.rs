//! History view controller.
//!
//! Owns the query state, the rendered item list, and the preview session, and
//! mediates every user gesture into backend calls. The backend is the single
//! authority: favorite toggles and deletes never mutate local state, they ask
//! the backend and re-fetch.
//!
//! Every backend failure is caught here. A failed fetch logs and leaves the
//! displayed list untouched; a failed gesture logs and records a message for
//! the status bar. The view never ends up in a state where further
//! interaction is impossible.

use std::time::Instant;

use tracing::warn;

use crate::backend::HistoryBackend;
use crate::models::{Settings, merge_settings};
use crate::view::preview::PreviewController;
use crate::view::query::QueryState;
use crate::view::render::{ItemView, render_list};

/// Explicit confirmation step consulted before any delete reaches the backend.
pub trait DeleteConfirmation {
    fn confirm_delete(&mut self) -> bool;
}

/// Confirmation that always passes, for callers that ran their own prompt
/// before dispatching (the TUI's modal does).
pub struct AlreadyConfirmed;

impl DeleteConfirmation for AlreadyConfirmed {
    fn confirm_delete(&mut self) -> bool {
        true
    }
}

pub struct HistoryView<B: HistoryBackend> {
    backend: B,
    query: QueryState,
    items: Vec<ItemView>,
    preview: PreviewController,
    /// Most recent backend failure, for the status bar. Cleared by the next
    /// successful fetch.
    last_error: Option<String>,
}

impl<B: HistoryBackend> HistoryView<B> {
    /// Create the view and perform the initial fetch.
    pub fn new(backend: B) -> Self {
        let mut view = Self {
            backend,
            query: QueryState::new(),
            items: Vec::new(),
            preview: PreviewController::new(),
            last_error: None,
        };
        view.refresh();
        view
    }

    pub fn items(&self) -> &[ItemView] {
        &self.items
    }

    pub fn item(&self, id: i64) -> Option<&ItemView> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn preview(&self) -> &PreviewController {
        &self.preview
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn take_last_error(&mut self) -> Option<String> {
        self.last_error.take()
    }

    /// Replace the search text and re-fetch.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.query.set_search_text(text);
        self.refresh();
    }

    /// Set the favorites-only flag and re-fetch.
    pub fn set_favorites_only(&mut self, favorites_only: bool) {
        self.query.set_favorites_only(favorites_only);
        self.refresh();
    }

    /// Flip the favorites-only flag and re-fetch.
    pub fn toggle_favorites_only(&mut self) {
        self.query.toggle_favorites_only();
        self.refresh();
    }

    /// Fetch the current query from the backend and fully replace the
    /// displayed list. On failure the current list stays as it is.
    ///
    /// Full replacement means a late-applied response can never corrupt a
    /// newer one: whichever fetch applies last wins wholesale.
    pub fn refresh(&mut self) {
        match self.backend.get_history(self.query.filter_label(), self.query.search_text()) {
            Ok(records) => {
                self.items = render_list(&records);
                // The hovered item may be gone; the session dies with the render.
                self.preview.reset();
                self.last_error = None;
            }
            Err(e) => {
                warn!(error = %e, "history fetch failed; keeping current list");
                self.last_error = Some(format!("Fetch failed: {e}"));
            }
        }
    }

    /// Toggle the favorite flag of `id` on the backend, then re-fetch. No
    /// optimistic local mutation.
    pub fn toggle_favorite(&mut self, id: i64) {
        if let Err(e) = self.backend.toggle_favorite(id) {
            warn!(id, error = %e, "favorite toggle failed");
            self.last_error = Some(format!("Favorite toggle failed: {e}"));
            return;
        }
        self.refresh();
    }

    /// Delete `id` after explicit confirmation. Returns true when the record
    /// was deleted. A declined confirmation is a no-op, not an error.
    pub fn delete_item(&mut self, id: i64, confirm: &mut dyn DeleteConfirmation) -> bool {
        if !confirm.confirm_delete() {
            return false;
        }
        if let Err(e) = self.backend.delete_item(id) {
            warn!(id, error = %e, "delete failed");
            self.last_error = Some(format!("Delete failed: {e}"));
            return false;
        }
        self.refresh();
        true
    }

    /// Paste `id` via the backend. Does not refresh: pasting does not change
    /// history state. Returns true on success.
    pub fn paste_item(&mut self, id: i64) -> bool {
        if let Err(e) = self.backend.paste_item(id) {
            warn!(id, error = %e, "paste failed");
            self.last_error = Some(format!("Paste failed: {e}"));
            return false;
        }
        true
    }

    /// Pointer entered the item with `id` at `now`: start a preview session.
    /// Entering an unknown id ends any current session instead.
    pub fn hover_enter(&mut self, id: i64, now: Instant) {
        match self.items.iter().find(|i| i.id == id) {
            Some(item) => {
                let item = item.clone();
                self.preview.pointer_enter(&item, now);
            }
            None => self.preview.pointer_leave(),
        }
    }

    /// Pointer left the hovered item.
    pub fn hover_leave(&mut self) {
        self.preview.pointer_leave();
    }

    /// Advance the preview timer. Returns true when a preview was newly shown.
    pub fn tick_preview(&mut self, now: Instant) -> bool {
        self.preview.tick(now)
    }

    /// Current settings from the backend.
    pub fn settings(&self) -> anyhow::Result<Settings> {
        self.backend.get_settings()
    }

    /// Merge `updates` into the current settings and save, so keys owned by
    /// other views are not clobbered.
    pub fn update_settings(&mut self, updates: Settings) -> anyhow::Result<()> {
        let current = self.backend.get_settings()?;
        self.backend.save_settings(merge_settings(current, updates))
    }
}
