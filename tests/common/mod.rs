//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use clipboard_history_explorer::models::{DataType, HistoryRecord};
use tempfile::TempDir;

/// Builder for clipboard history records
pub struct RecordBuilder {
    id: i64,
    data_type: DataType,
    content: String,
    preview: Option<String>,
    thumbnail_path: Option<String>,
    is_favorite: bool,
}

impl RecordBuilder {
    /// Create a new text record with default values
    pub fn new(id: i64) -> Self {
        Self {
            id,
            data_type: DataType::Text,
            content: format!("item {}", id),
            preview: None,
            thumbnail_path: None,
            is_favorite: false,
        }
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = content.to_string();
        self
    }

    pub fn data_type(mut self, data_type: DataType) -> Self {
        self.data_type = data_type;
        self
    }

    pub fn preview(mut self, preview: &str) -> Self {
        self.preview = Some(preview.to_string());
        self
    }

    pub fn thumbnail(mut self, path: &str) -> Self {
        self.thumbnail_path = Some(path.to_string());
        self
    }

    pub fn favorite(mut self) -> Self {
        self.is_favorite = true;
        self
    }

    pub fn build(self) -> HistoryRecord {
        HistoryRecord {
            id: self.id,
            data_type: self.data_type,
            content: self.content,
            preview: self.preview,
            thumbnail_path: self.thumbnail_path,
            is_favorite: self.is_favorite,
        }
    }
}

/// Builder for on-disk history files used by CLI and persistence tests
pub struct HistoryFileBuilder {
    temp_dir: TempDir,
    records: Vec<HistoryRecord>,
    settings: serde_json::Map<String, serde_json::Value>,
}

impl HistoryFileBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, records: Vec::new(), settings: serde_json::Map::new() }
    }

    pub fn with_record(mut self, record: HistoryRecord) -> Self {
        self.records.push(record);
        self
    }

    pub fn with_setting(mut self, key: &str, value: serde_json::Value) -> Self {
        self.settings.insert(key.to_string(), value);
        self
    }

    /// Write the history file and return (directory guard, file path).
    ///
    /// The TempDir must be kept alive for the duration of the test or the
    /// file disappears under the binary.
    pub fn build(self) -> (TempDir, PathBuf) {
        let path = self.temp_dir.path().join("history.json");
        let file = serde_json::json!({
            "records": self.records,
            "settings": self.settings,
        });
        fs::write(&path, serde_json::to_string_pretty(&file).expect("serialize history"))
            .expect("Failed to write history file");
        (self.temp_dir, path)
    }
}

impl Default for HistoryFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A string just over the hover-preview length threshold.
pub fn long_text() -> String {
    "x".repeat(60)
}
