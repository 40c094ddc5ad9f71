use crate::backend::filter_label;

/// Current search text and favorites-only flag.
///
/// Leaf state for the history view: every fetch is a pure function of these
/// two fields, so there is never a cached list to invalidate — mutating either
/// field must be followed by a fresh fetch that replaces the displayed list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    search_text: String,
    favorites_only: bool,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn favorites_only(&self) -> bool {
        self.favorites_only
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn set_favorites_only(&mut self, favorites_only: bool) {
        self.favorites_only = favorites_only;
    }

    pub fn toggle_favorites_only(&mut self) {
        self.favorites_only = !self.favorites_only;
    }

    /// The backend filter label for the current favorites flag.
    pub fn filter_label(&self) -> &'static str {
        filter_label(self.favorites_only)
    }
}
