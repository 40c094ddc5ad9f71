use std::path::PathBuf;

use anyhow::{Context, Result};

/// Get the default history file path (<data dir>/clipboard-history/history.json)
pub fn default_data_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().context("could not determine user data directory")?;
    Ok(data_dir.join("clipboard-history").join("history.json"))
}

/// Format a path for display, replacing the home directory with ~
pub fn format_path_with_tilde(path: &std::path::Path) -> String {
    if let Some(home) = dirs::home_dir()
        && let Ok(stripped) = path.strip_prefix(&home)
    {
        return format!("~/{}", stripped.display());
    }
    path.display().to_string()
}
