//! Data models for clipboard history.
//!
//! - [`HistoryRecord`] - One capture entry as the backend reports it
//! - [`DataType`] - Payload kind with graceful fallback for unknown values
//! - [`Settings`] - Free-form key/value settings with merge semantics
//!
//! These models use serde so the file-backed reference backend and any
//! out-of-process backend share the same JSON shape.

pub mod record;
pub mod settings;

pub use record::{DataType, HistoryRecord};
pub use settings::{Settings, merge_settings};
