//! Hover-delayed preview tooltip.
//!
//! State machine: `Idle -> Pending -> Shown`, with `Idle` reachable directly
//! from both. A session is created on pointer-enter, promoted to shown only
//! if the hover persists past [`PREVIEW_DELAY`], and destroyed immediately on
//! pointer-leave whether or not it was promoted. At most one session exists;
//! entering a new item cancels the previous session first, so a stale timer
//! can never reveal a preview for an item the pointer already left.
//!
//! Time is injected: every transition that depends on the clock takes `now`
//! as an argument, so tests advance time by constructing instants instead of
//! sleeping (the same pattern the status-message expiry uses).

use std::time::{Duration, Instant};

use crate::models::DataType;
use crate::view::render::ItemView;

/// Hover delay before a preview is shown.
pub const PREVIEW_DELAY: Duration = Duration::from_millis(800);
/// Content shorter than this is not worth a tooltip.
pub const MIN_PREVIEW_CHARS: usize = 50;
/// Shown previews are truncated to this many characters.
pub const MAX_PREVIEW_CHARS: usize = 1000;
/// Marker appended when a preview was truncated.
pub const ELLIPSIS: &str = "...";

/// Assumed tooltip width for viewport-aware placement.
pub const TOOLTIP_WIDTH: i32 = 300;
/// Assumed tooltip height for viewport-aware placement.
pub const TOOLTIP_HEIGHT: i32 = 200;
/// Offset from the pointer in both axes.
pub const POINTER_OFFSET: i32 = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
enum PreviewState {
    Idle,
    Pending { id: i64, text: String, deadline: Instant },
    Shown { id: i64, text: String },
}

/// Owns the single preview session.
#[derive(Debug)]
pub struct PreviewController {
    state: PreviewState,
}

impl PreviewController {
    pub fn new() -> Self {
        Self { state: PreviewState::Idle }
    }

    /// Pointer entered `item` at `now`: cancel any prior session and schedule
    /// activation after the hover delay.
    pub fn pointer_enter(&mut self, item: &ItemView, now: Instant) {
        self.state = PreviewState::Pending {
            id: item.id,
            text: preview_text(item),
            deadline: now + PREVIEW_DELAY,
        };
    }

    /// Pointer left the item: cancel the timer and hide unconditionally.
    pub fn pointer_leave(&mut self) {
        self.state = PreviewState::Idle;
    }

    /// Destroy the session on re-render; the hovered item may no longer exist.
    pub fn reset(&mut self) {
        self.state = PreviewState::Idle;
    }

    /// Advance the state machine to `now`. Returns true when the preview was
    /// promoted to shown by this call.
    pub fn tick(&mut self, now: Instant) -> bool {
        let PreviewState::Pending { id, text, deadline } = &self.state else {
            return false;
        };
        if now < *deadline {
            return false;
        }

        // Short content is not worth a tooltip; drop the session entirely.
        if text.chars().count() < MIN_PREVIEW_CHARS {
            self.state = PreviewState::Idle;
            return false;
        }

        let truncated = truncate_preview(text);
        self.state = PreviewState::Shown { id: *id, text: truncated };
        true
    }

    /// The shown preview text, if any.
    pub fn shown_text(&self) -> Option<&str> {
        match &self.state {
            PreviewState::Shown { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Which record's preview is currently shown.
    pub fn active_item(&self) -> Option<i64> {
        match &self.state {
            PreviewState::Shown { id, .. } => Some(*id),
            _ => None,
        }
    }

    /// Which record has a session (pending or shown).
    pub fn session_item(&self) -> Option<i64> {
        match &self.state {
            PreviewState::Pending { id, .. } | PreviewState::Shown { id, .. } => Some(*id),
            PreviewState::Idle => None,
        }
    }
}

impl Default for PreviewController {
    fn default() -> Self {
        Self::new()
    }
}

/// Preview string for an item: file lists and text show the full content,
/// images a synthesized label around the content descriptor.
fn preview_text(item: &ItemView) -> String {
    match item.data_type {
        DataType::Image => format!("Image: {}", item.content),
        DataType::Files | DataType::Text => item.content.clone(),
    }
}

fn truncate_preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(MAX_PREVIEW_CHARS).collect();
    if chars.next().is_some() { format!("{head}{ELLIPSIS}") } else { head }
}

/// Position the tooltip near the pointer, flipped per axis to stay inside the
/// viewport. Uses the assumed [`TOOLTIP_WIDTH`]/[`TOOLTIP_HEIGHT`].
pub fn place_tooltip(pointer: (i32, i32), viewport: (i32, i32)) -> (i32, i32) {
    place_tooltip_sized(pointer, viewport, (TOOLTIP_WIDTH, TOOLTIP_HEIGHT), POINTER_OFFSET)
}

/// Placement with explicit tooltip dimensions, for display surfaces whose
/// units differ (terminal cells instead of pixels). Each axis flips
/// independently when the tooltip would cross the viewport edge.
pub fn place_tooltip_sized(
    pointer: (i32, i32),
    viewport: (i32, i32),
    size: (i32, i32),
    offset: i32,
) -> (i32, i32) {
    let (px, py) = pointer;
    let (vw, vh) = viewport;
    let (w, h) = size;

    let x = px + offset;
    let x = if x + w > vw { x - w - offset } else { x };

    let y = py + offset;
    let y = if y + h > vh { y - h } else { y };

    (x, y)
}
