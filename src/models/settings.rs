use serde_json::{Map, Value};

/// Free-form application settings, keyed by setting name.
///
/// The backend owns the full set; individual views only know about the keys
/// they edit, so updates must go through [`merge_settings`] to avoid clobbering
/// keys written by other views.
pub type Settings = Map<String, Value>;

/// Merge `updates` into `current`, returning the merged settings.
///
/// Keys present in `updates` overwrite `current`; all other keys are preserved.
pub fn merge_settings(current: Settings, updates: Settings) -> Settings {
    let mut merged = current;
    for (key, value) in updates {
        merged.insert(key, value);
    }
    merged
}
