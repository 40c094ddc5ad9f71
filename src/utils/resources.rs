//! Thumbnail path to displayable resource reference.

/// Resolve a backend-provided thumbnail path to something a display surface
/// can load directly.
///
/// Backslashes are normalized first (the capture engine may hand out Windows
/// paths). Strings that already look like a URL or remote resource pass
/// through unchanged; everything else is treated as a local-file reference.
pub fn resolve_thumbnail(path: &str) -> String {
    let normalized = path.replace('\\', "/");
    if normalized.starts_with("http") || normalized.starts_with("file") {
        normalized
    } else {
        format!("file:///{}", normalized)
    }
}
