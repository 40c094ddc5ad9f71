//! TUI application state and event handling.
//!
//! The `App` struct wraps the [`HistoryView`] controller with everything the
//! terminal surface needs on top of it:
//!
//! - **Selection**: keyboard cursor over the item list
//! - **Hover**: mouse position mapped to a row, driving the preview session
//! - **Delete confirmation**: a pending-delete prompt in the status bar
//! - **Double activation**: paste fires on the second activation of the same
//!   item within a short window, like a double-click
//! - **Status messages**: transient feedback with expiry
//! - **Dirty state tracking**: redraw only when state changes

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::layout::{AppLayout, RowRegion};
use super::rendering::{RenderState, render_ui};
use crate::backend::HistoryBackend;
use crate::view::{AlreadyConfirmed, HistoryView};

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;
/// Two activations of the same item within this window count as a paste.
const DOUBLE_ACTIVATE_WINDOW: Duration = Duration::from_millis(400);
/// Search input length cap.
const MAX_SEARCH_LEN: usize = 256;

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

pub struct App<B: HistoryBackend> {
    view: HistoryView<B>,
    selected_idx: usize,
    should_quit: bool,
    // Delete confirmation prompt state
    pending_delete: Option<i64>,
    // Double-activation tracking for paste
    last_activation: Option<(i64, Instant)>,
    // Mouse state
    pointer: Option<(u16, u16)>,
    hovered: Option<i64>,
    layout: Option<AppLayout>,
    // Status message (paste feedback, etc.)
    status_message: Option<StatusMessage>,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl<B: HistoryBackend> App<B> {
    pub fn new(backend: B) -> Self {
        Self {
            view: HistoryView::new(backend),
            selected_idx: 0,
            should_quit: false,
            pending_delete: None,
            last_activation: None,
            pointer: None,
            hovered: None,
            layout: None,
            status_message: None,
            needs_redraw: true, // Initial draw needed
            last_draw_time: Instant::now(),
        }
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    /// Check and clear expired status messages
    fn check_and_clear_expired_status(&mut self, now: Instant) {
        let should_clear =
            self.status_message.as_ref().map(|msg| now >= msg.expires_at).unwrap_or(false);
        if should_clear {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    pub fn run<BE: Backend>(&mut self, terminal: &mut Terminal<BE>) -> Result<()> {
        while !self.should_quit {
            let now = Instant::now();

            self.check_and_clear_expired_status(now);

            // Advance the preview timer; a newly shown tooltip needs a draw.
            if self.view.tick_preview(now) {
                self.needs_redraw = true;
            }

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                let state = RenderState {
                    items: self.view.items(),
                    selected_idx: self.selected_idx,
                    hovered: self.hovered,
                    search_text: self.view.query().search_text(),
                    favorites_only: self.view.query().favorites_only(),
                    fetch_error: self.view.last_error(),
                    status_message: self.status_message.as_ref(),
                    pending_delete: self.pending_delete,
                    preview_text: self.view.preview().shown_text(),
                    pointer: self.pointer,
                };
                let mut layout = None;
                terminal.draw(|f| {
                    layout = Some(render_ui(f, &state));
                })?;
                self.layout = layout;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            // Handle events
            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action, Instant::now());
        }

        Ok(())
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action, now: Instant) {
        // The delete prompt is modal: it captures input until answered.
        if self.pending_delete.is_some() {
            self.handle_delete_prompt(action);
            return;
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::ClearSearch => {
                if self.view.query().search_text().is_empty() {
                    self.should_quit = true;
                } else {
                    self.view.set_search_text("");
                    self.selected_idx = 0;
                    self.list_refreshed();
                }
            }
            Action::MoveUp => self.move_selection(-1),
            Action::MoveDown => self.move_selection(1),
            Action::PageUp => self.move_selection(-10),
            Action::PageDown => self.move_selection(10),
            Action::UpdateSearch(c) => self.update_search(c),
            Action::DeleteChar => self.delete_char(),
            Action::ToggleFavoritesFilter => {
                self.view.toggle_favorites_only();
                self.selected_idx = 0;
                self.list_refreshed();
            }
            Action::ToggleFavorite => {
                if let Some(id) = self.selected_id() {
                    self.view.toggle_favorite(id);
                    self.surface_view_error();
                    self.list_refreshed();
                }
            }
            Action::RequestDelete => {
                if let Some(id) = self.selected_id() {
                    self.pending_delete = Some(id);
                    self.needs_redraw = true;
                }
            }
            Action::Activate => {
                if let Some(id) = self.selected_id() {
                    self.activate(id, now);
                }
            }
            Action::Refresh => {
                self.view.refresh();
                self.clamp_selection();
                self.list_refreshed();
            }
            Action::MouseMove(x, y) => self.handle_mouse_move(x, y, now),
            Action::MouseDown(x, y) => self.handle_mouse_down(x, y, now),
            Action::None => {}
        }
    }

    fn handle_delete_prompt(&mut self, action: Action) {
        match action {
            Action::UpdateSearch('y') | Action::UpdateSearch('Y') => {
                // Confirmation happened here in the prompt.
                if let Some(id) = self.pending_delete.take() {
                    if self.view.delete_item(id, &mut AlreadyConfirmed) {
                        self.set_status(
                            "✓ Item deleted",
                            MessageType::Success,
                            STATUS_SUCCESS_DURATION_MS,
                        );
                        self.clamp_selection();
                        self.list_refreshed();
                    } else {
                        self.surface_view_error();
                    }
                }
                self.needs_redraw = true;
            }
            Action::UpdateSearch('n')
            | Action::UpdateSearch('N')
            | Action::ClearSearch => {
                // Declined: no backend call, no state change.
                self.pending_delete = None;
                self.needs_redraw = true;
            }
            Action::Quit => self.should_quit = true,
            _ => {}
        }
    }

    /// Paste fires on the second activation of the same item inside the
    /// double-activation window; the first activation only arms it.
    fn activate(&mut self, id: i64, now: Instant) {
        let is_double = self
            .last_activation
            .is_some_and(|(last_id, at)| last_id == id && now.duration_since(at) <= DOUBLE_ACTIVATE_WINDOW);

        if is_double {
            self.last_activation = None;
            if self.view.paste_item(id) {
                self.set_status("✓ Pasted", MessageType::Success, STATUS_SUCCESS_DURATION_MS);
            } else {
                self.surface_view_error();
            }
        } else {
            self.last_activation = Some((id, now));
        }
    }

    fn handle_mouse_move(&mut self, x: u16, y: u16, now: Instant) {
        self.pointer = Some((x, y));

        let hovered_id = self.row_item_at(x, y);
        if hovered_id != self.hovered {
            // Leaving the old row cancels its session before the new one starts.
            self.view.hover_leave();
            if let Some(id) = hovered_id {
                self.view.hover_enter(id, now);
            }
            self.hovered = hovered_id;
            self.needs_redraw = true;
        } else if self.view.preview().shown_text().is_some() {
            // Continuous movement repositions the visible tooltip.
            self.needs_redraw = true;
        }
    }

    fn handle_mouse_down(&mut self, x: u16, y: u16, now: Instant) {
        let Some(layout) = &self.layout else { return };
        let Some(idx) = layout.row_at(x, y) else { return };
        let Some(id) = self.view.items().get(idx).map(|i| i.id) else { return };

        self.selected_idx = idx;
        self.needs_redraw = true;

        // A click resolves to exactly one gesture: the affordance columns
        // never double as an activation.
        match layout.region_at(x) {
            RowRegion::Favorite => {
                self.view.toggle_favorite(id);
                self.surface_view_error();
                self.list_refreshed();
            }
            RowRegion::Delete => {
                self.pending_delete = Some(id);
            }
            RowRegion::Body => {
                self.activate(id, now);
            }
        }
    }

    fn row_item_at(&self, x: u16, y: u16) -> Option<i64> {
        let layout = self.layout.as_ref()?;
        let idx = layout.row_at(x, y)?;
        self.view.items().get(idx).map(|i| i.id)
    }

    fn selected_id(&self) -> Option<i64> {
        self.view.items().get(self.selected_idx).map(|i| i.id)
    }

    fn surface_view_error(&mut self) {
        if let Some(error) = self.view.take_last_error() {
            self.set_status(format!("✗ {error}"), MessageType::Error, STATUS_ERROR_DURATION_MS);
        }
    }

    /// The item list was rebuilt and the preview session reset with it. Hover
    /// state must be dropped too, or a pointer resting on the same row would
    /// never re-enter it and no new session could start.
    fn list_refreshed(&mut self) {
        self.hovered = None;
        self.needs_redraw = true;
    }

    fn move_selection(&mut self, delta: isize) {
        let total = self.view.items().len();
        if total == 0 {
            self.selected_idx = 0;
            return;
        }

        let old_idx = self.selected_idx;
        let new_idx = (self.selected_idx as isize + delta).max(0) as usize;
        self.selected_idx = new_idx.min(total - 1);

        if old_idx != self.selected_idx {
            self.needs_redraw = true;
        }
    }

    fn clamp_selection(&mut self) {
        let total = self.view.items().len();
        if total == 0 {
            self.selected_idx = 0;
        } else if self.selected_idx >= total {
            self.selected_idx = total - 1;
        }
    }

    fn update_search(&mut self, c: char) {
        let current = self.view.query().search_text();
        // Limit search query length to prevent DoS
        if current.len() < MAX_SEARCH_LEN {
            let mut text = current.to_string();
            text.push(c);
            self.view.set_search_text(text);
            self.selected_idx = 0; // Reset selection on search change
            self.list_refreshed();
        }
    }

    fn delete_char(&mut self) {
        let mut text = self.view.query().search_text().to_string();
        if text.pop().is_some() {
            self.view.set_search_text(text);
            self.selected_idx = 0;
            self.list_refreshed();
        }
    }
}
