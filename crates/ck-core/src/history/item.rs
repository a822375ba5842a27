use serde::{Deserialize, Serialize};

/// A single clipboard history entry.
///
/// `text` is always normalized (see [`normalize_text`](super::normalize_text))
/// before an item is created by the history list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub text: String,
    pub is_pinned: bool,
}

impl HistoryItem {
    pub fn unpinned(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_pinned: false,
        }
    }

    pub fn pinned(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_pinned: true,
        }
    }

    /// First line of the text, cut to `max_chars` characters.
    pub fn preview(&self, max_chars: usize) -> String {
        let first_line = self.text.lines().next().unwrap_or("");
        if first_line.chars().count() <= max_chars {
            return first_line.to_string();
        }
        let mut preview: String = first_line.chars().take(max_chars.saturating_sub(3)).collect();
        preview.push_str("...");
        preview
    }
}
