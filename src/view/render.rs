//! History renderer: records in, item views out.
//!
//! `render_list` is pure and display-agnostic: it picks the visual treatment
//! per record (icon, display text, thumbnail reference, affordance
//! visibility) without touching any real display surface. Gesture wiring
//! lives in the controller; the TUI layer only draws what comes out of here.
//!
//! Escaping policy: all user-supplied text is HTML-escaped before it lands in
//! an `ItemView`; the only unescaped field is the thumbnail reference, which
//! is backend-constructed and goes through URL/local-path disambiguation
//! instead.

use crate::models::{DataType, HistoryRecord};
use crate::utils::{escape_html, resolve_thumbnail};

/// Fixed display text for image records; raw image content never shows.
pub const IMAGE_PLACEHOLDER: &str = "[Image Content]";
/// Fallback label for file-list records without a preview.
pub const FILES_FALLBACK: &str = "Files";
/// Placeholder rendered instead of items when the list is empty.
pub const NO_ITEMS_PLACEHOLDER: &str = "No items found";
/// Hint line under the empty-state placeholder.
pub const NO_ITEMS_HINT: &str = "Try adjusting your search or filters.";

/// Icon selected for an item by its data type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemIcon {
    Document,
    Image,
    Folder,
}

/// One rendered history item, ready for a display surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub id: i64,
    pub icon: ItemIcon,
    /// Escaped display text; safe to insert into markup as-is.
    pub display_text: String,
    /// Resolved resource reference, only set for image records with a thumbnail.
    pub thumbnail: Option<String>,
    pub is_favorite: bool,
    pub data_type: DataType,
    /// Raw content, kept for the hover preview (which escapes nothing because
    /// it renders as plain text).
    pub content: String,
}

impl ItemView {
    /// Whether the favorite affordance stays visible without pointer hover.
    ///
    /// Visibility policy only: the toggle action is wired either way.
    pub fn favorite_affordance_pinned(&self) -> bool {
        self.is_favorite
    }
}

/// Turn an ordered record sequence into item views, preserving order.
///
/// An empty input yields an empty output; displaying the
/// [`NO_ITEMS_PLACEHOLDER`] instead of item nodes is the display layer's job.
pub fn render_list(records: &[HistoryRecord]) -> Vec<ItemView> {
    records.iter().map(render_item).collect()
}

fn render_item(record: &HistoryRecord) -> ItemView {
    let (icon, display_text, thumbnail) = match record.data_type {
        DataType::Image => {
            let thumbnail = record.thumbnail_path.as_deref().map(resolve_thumbnail);
            (ItemIcon::Image, IMAGE_PLACEHOLDER.to_string(), thumbnail)
        }
        DataType::Files => {
            let label = record.preview.as_deref().unwrap_or(FILES_FALLBACK);
            (ItemIcon::Folder, escape_html(label), None)
        }
        DataType::Text => {
            let label = record.preview.as_deref().unwrap_or(&record.content);
            (ItemIcon::Document, escape_html(label), None)
        }
    };

    ItemView {
        id: record.id,
        icon,
        display_text,
        thumbnail,
        is_favorite: record.is_favorite,
        data_type: record.data_type,
        content: record.content.clone(),
    }
}
