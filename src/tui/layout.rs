use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Regions of a single clicked/hovered list row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowRegion {
    /// The favorite toggle column.
    Favorite,
    /// The delete column.
    Delete,
    /// The rest of the row.
    Body,
}

/// Main screen layout: search bar on top, history list, status bar.
pub struct AppLayout {
    pub search_area: Rect,
    pub list_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar (bordered)
                Constraint::Min(3),    // History list
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self { search_area: chunks[0], list_area: chunks[1], status_area: chunks[2] }
    }

    /// The list row index under terminal position `(x, y)`, if it is inside
    /// the list body (inside the borders).
    pub fn row_at(&self, x: u16, y: u16) -> Option<usize> {
        let inner = inner_rect(self.list_area);
        if x < inner.x || x >= inner.x + inner.width || y < inner.y || y >= inner.y + inner.height
        {
            return None;
        }
        Some((y - inner.y) as usize)
    }

    /// Which region of a row the column `x` falls on. Regions are disjoint by
    /// construction, so a click resolves to exactly one gesture.
    pub fn region_at(&self, x: u16) -> RowRegion {
        let inner = inner_rect(self.list_area);
        match x.saturating_sub(inner.x) {
            0 => RowRegion::Favorite,
            2 => RowRegion::Delete,
            _ => RowRegion::Body,
        }
    }
}

fn inner_rect(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}
