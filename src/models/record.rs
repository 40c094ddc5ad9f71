use serde::{Deserialize, Serialize};

/// Payload kind of a clipboard capture.
///
/// The wire values are a closed set, but backends may grow new kinds before
/// the UI learns about them. Anything unrecognized deserializes as [`DataType::Text`]
/// so it takes the plain-text rendering path instead of failing the whole fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DataType {
    Image,
    Files,
    // serde requires the catch-all variant to come last.
    #[default]
    #[serde(other)]
    Text,
}

/// One clipboard capture entry, owned by the backend and read-only here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: i64,
    #[serde(default)]
    pub data_type: DataType,
    pub content: String,
    #[serde(default)]
    pub preview: Option<String>,
    /// Only meaningful when `data_type` is `IMAGE`.
    #[serde(default)]
    pub thumbnail_path: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
}
