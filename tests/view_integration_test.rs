/// End-to-end tests driving the view controller over the persistent backend
mod common;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Result;
use clipboard_history_explorer::backend::memory::MemoryBackend;
use clipboard_history_explorer::clipboard::ClipboardProvider;
use clipboard_history_explorer::models::DataType;
use clipboard_history_explorer::view::{AlreadyConfirmed, HistoryView};
use common::{HistoryFileBuilder, RecordBuilder, long_text};

/// Clipboard stub that records everything written to it.
#[derive(Default, Clone)]
struct RecordingClipboard {
    written: Rc<RefCell<Vec<String>>>,
}

impl ClipboardProvider for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.written.borrow_mut().push(text.to_string());
        Ok(())
    }
}

#[test]
fn test_search_narrows_and_clearing_restores() {
    let backend = MemoryBackend::with_records(vec![
        RecordBuilder::new(1).content("cargo build").build(),
        RecordBuilder::new(2).content("git status").build(),
        RecordBuilder::new(3).content("cargo test").build(),
    ]);
    let mut view = HistoryView::new(backend);
    assert_eq!(view.items().len(), 3);

    view.set_search_text("cargo");
    let ids: Vec<i64> = view.items().iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![3, 1]);

    view.set_search_text("");
    assert_eq!(view.items().len(), 3);
}

#[test]
fn test_favorites_filter_composes_with_search() {
    let backend = MemoryBackend::with_records(vec![
        RecordBuilder::new(1).content("cargo build").favorite().build(),
        RecordBuilder::new(2).content("cargo test").build(),
        RecordBuilder::new(3).content("git log").favorite().build(),
    ]);
    let mut view = HistoryView::new(backend);

    view.set_favorites_only(true);
    view.set_search_text("cargo");

    let ids: Vec<i64> = view.items().iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn test_rendered_items_are_display_ready() {
    let backend = MemoryBackend::with_records(vec![
        RecordBuilder::new(1).content("<b>bold</b>").build(),
        RecordBuilder::new(2)
            .data_type(DataType::Image)
            .content("ignored")
            .thumbnail(r"C:\thumbs\2.png")
            .build(),
    ]);
    let view = HistoryView::new(backend);

    let image = view.item(2).expect("image item present");
    assert_eq!(image.display_text, "[Image Content]");
    assert_eq!(image.thumbnail.as_deref(), Some("file:///C:/thumbs/2.png"));

    let text = view.item(1).expect("text item present");
    assert!(text.display_text.contains("&lt;b&gt;"));
    assert!(!text.display_text.contains('<'));
}

#[test]
fn test_hover_preview_full_lifecycle() {
    let long = long_text();
    let backend =
        MemoryBackend::with_records(vec![RecordBuilder::new(1).content(&long).build()]);
    let mut view = HistoryView::new(backend);
    let t0 = Instant::now();

    view.hover_enter(1, t0);
    // Not shown before the delay elapses.
    assert!(!view.tick_preview(t0 + Duration::from_millis(500)));
    assert!(view.preview().shown_text().is_none());

    assert!(view.tick_preview(t0 + Duration::from_millis(800)));
    assert_eq!(view.preview().shown_text(), Some(long.as_str()));

    view.hover_leave();
    assert!(view.preview().shown_text().is_none());
}

#[test]
fn test_delete_persists_across_reopen() {
    let (dir, path) = HistoryFileBuilder::new()
        .with_record(RecordBuilder::new(1).content("keep").build())
        .with_record(RecordBuilder::new(2).content("drop").build())
        .build();

    {
        let backend = MemoryBackend::open(&path).unwrap();
        let mut view = HistoryView::new(backend);
        assert!(view.delete_item(2, &mut AlreadyConfirmed));
    }

    let backend = MemoryBackend::open(&path).unwrap();
    let view = HistoryView::new(backend);
    let ids: Vec<i64> = view.items().iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![1]);
    drop(dir);
}

#[test]
fn test_favorite_toggle_persists_across_reopen() {
    let (dir, path) = HistoryFileBuilder::new()
        .with_record(RecordBuilder::new(1).content("star me").build())
        .build();

    {
        let backend = MemoryBackend::open(&path).unwrap();
        let mut view = HistoryView::new(backend);
        view.toggle_favorite(1);
        assert!(view.items()[0].is_favorite);
    }

    let backend = MemoryBackend::open(&path).unwrap();
    let view = HistoryView::new(backend);
    assert!(view.items()[0].is_favorite);
    drop(dir);
}

#[test]
fn test_paste_writes_raw_content_not_escaped_text() {
    let clipboard = RecordingClipboard::default();
    let backend =
        MemoryBackend::with_records(vec![RecordBuilder::new(1).content("<raw & text>").build()])
            .with_clipboard(Box::new(clipboard.clone()));
    let mut view = HistoryView::new(backend);

    assert!(view.paste_item(1));

    let written = clipboard.written.borrow();
    assert_eq!(written.as_slice(), ["<raw & text>"]);
}

#[test]
fn test_settings_merge_preserves_foreign_keys_on_disk() {
    let (dir, path) = HistoryFileBuilder::new()
        .with_setting("theme", serde_json::json!("dark"))
        .with_setting("max_items", serde_json::json!(500))
        .build();

    {
        let backend = MemoryBackend::open(&path).unwrap();
        let mut view = HistoryView::new(backend);
        let mut updates = clipboard_history_explorer::models::Settings::new();
        updates.insert("max_items".to_string(), serde_json::json!(200));
        view.update_settings(updates).unwrap();
    }

    let backend = MemoryBackend::open(&path).unwrap();
    let view = HistoryView::new(backend);
    let settings = view.settings().unwrap();
    assert_eq!(settings.get("theme"), Some(&serde_json::json!("dark")));
    assert_eq!(settings.get("max_items"), Some(&serde_json::json!(200)));
    drop(dir);
}
