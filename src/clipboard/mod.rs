//! OS clipboard writes for the paste gesture.
//!
//! Pasting a record means writing its full content back to the system
//! clipboard; whatever the OS does with it afterwards is out of band. The
//! [`ClipboardProvider`] trait keeps the backend testable in headless
//! environments where no real clipboard exists.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Maximum clipboard write size (10MB); larger payloads are refused.
const MAX_CLIPBOARD_SIZE: usize = 10 * 1024 * 1024;

/// Destination for paste operations (allows mocking in tests).
pub trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Real clipboard backed by arboard.
///
/// Initialization is deferred to the first write so constructing a backend
/// never fails just because the environment is headless.
#[derive(Default)]
pub struct SystemClipboard;

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        validate_clipboard_text(text)?;
        let mut clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        clipboard.set_text(text).context("Failed to set clipboard contents")?;
        Ok(())
    }
}

/// Validates clipboard text without touching the system clipboard.
fn validate_clipboard_text(text: &str) -> Result<()> {
    if text.is_empty() {
        anyhow::bail!("Cannot write empty text to clipboard");
    }

    if text.len() > MAX_CLIPBOARD_SIZE {
        anyhow::bail!(
            "Text too large for clipboard ({} bytes, max {})",
            text.len(),
            MAX_CLIPBOARD_SIZE
        );
    }

    Ok(())
}
