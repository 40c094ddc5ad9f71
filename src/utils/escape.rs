//! Markup escaping for user-supplied clipboard text.
//!
//! Clipboard content is arbitrary user data and the item views it flows into
//! may be rendered by markup-based surfaces. Escape it once, at render time,
//! so a captured `<script>` tag is inert text everywhere downstream. Only
//! backend-constructed resource references (thumbnail paths) bypass this.

/// HTML-escape `text` for safe insertion into markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
