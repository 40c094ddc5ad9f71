//! Reference backend: an in-memory store with optional JSON persistence.
//!
//! This exists so the binary is runnable end to end and the trait has a
//! conformant in-tree implementation. It mirrors the observable behavior of a
//! real capture engine's store: case-insensitive substring search over content
//! and preview, label-based filtering, newest-first ordering, and paste via
//! the OS clipboard.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::{FAVORITES_LABEL, HistoryBackend};
use crate::clipboard::{ClipboardProvider, SystemClipboard};
use crate::models::{DataType, HistoryRecord, Settings};

/// On-disk shape of the history file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct HistoryFile {
    #[serde(default)]
    records: Vec<HistoryRecord>,
    #[serde(default)]
    settings: Settings,
}

pub struct MemoryBackend {
    records: Vec<HistoryRecord>,
    settings: Settings,
    data_path: Option<PathBuf>,
    clipboard: Box<dyn ClipboardProvider>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            settings: Settings::new(),
            data_path: None,
            clipboard: Box::new(SystemClipboard),
        }
    }

    /// Seed with records, newest last (ids are expected to grow over time).
    pub fn with_records(records: Vec<HistoryRecord>) -> Self {
        let mut backend = Self::new();
        backend.records = records;
        backend
    }

    /// Load from a JSON history file, creating an empty store if the file
    /// does not exist yet. Mutations are written back to the same file.
    pub fn open(path: &Path) -> Result<Self> {
        let file = if path.exists() {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Failed to read history file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Invalid history file {}", path.display()))?
        } else {
            HistoryFile::default()
        };

        let mut backend = Self::new();
        backend.records = file.records;
        backend.settings = file.settings;
        backend.data_path = Some(path.to_path_buf());
        Ok(backend)
    }

    /// Replace the clipboard destination (tests use a mock here).
    pub fn with_clipboard(mut self, clipboard: Box<dyn ClipboardProvider>) -> Self {
        self.clipboard = clipboard;
        self
    }

    fn persist(&self) -> Result<()> {
        let Some(path) = &self.data_path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let file =
            HistoryFile { records: self.records.clone(), settings: self.settings.clone() };
        let raw = serde_json::to_string_pretty(&file)?;
        fs::write(path, raw)
            .with_context(|| format!("Failed to write history file {}", path.display()))?;
        Ok(())
    }

    fn find(&self, id: i64) -> Result<usize> {
        self.records
            .iter()
            .position(|r| r.id == id)
            .with_context(|| format!("No history record with id {}", id))
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn matches_label(record: &HistoryRecord, label: &str) -> bool {
    match label {
        FAVORITES_LABEL => record.is_favorite,
        "TEXT" => record.data_type == DataType::Text,
        "IMAGE" => record.data_type == DataType::Image,
        "FILES" => record.data_type == DataType::Files,
        // "All Types" and anything unrecognized: no restriction.
        _ => true,
    }
}

fn matches_query(record: &HistoryRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    record.content.to_lowercase().contains(&needle)
        || record.preview.as_ref().is_some_and(|p| p.to_lowercase().contains(&needle))
}

impl HistoryBackend for MemoryBackend {
    fn get_history(&self, filter_label: &str, query: &str) -> Result<Vec<HistoryRecord>> {
        let mut matched: Vec<HistoryRecord> = self
            .records
            .iter()
            .filter(|r| matches_label(r, filter_label) && matches_query(r, query))
            .cloned()
            .collect();
        // Newest first; ids grow with capture time.
        matched.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(matched)
    }

    fn toggle_favorite(&mut self, id: i64) -> Result<()> {
        let idx = self.find(id)?;
        self.records[idx].is_favorite = !self.records[idx].is_favorite;
        self.persist()
    }

    fn delete_item(&mut self, id: i64) -> Result<()> {
        let idx = self.find(id)?;
        self.records.remove(idx);
        self.persist()
    }

    fn paste_item(&mut self, id: i64) -> Result<()> {
        let idx = self.find(id)?;
        let content = self.records[idx].content.clone();
        self.clipboard.set_text(&content)
    }

    fn get_settings(&self) -> Result<Settings> {
        Ok(self.settings.clone())
    }

    fn save_settings(&mut self, settings: Settings) -> Result<()> {
        self.settings = settings;
        self.persist()
    }
}
