//! # Configuration data
//!
//! Plain data structures read from `config.toml`. Loading lives in the
//! binary's bootstrap; this module only names the knobs and their defaults.

use serde::{Deserialize, Serialize};

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 250;
pub const DEFAULT_MAX_ITEMS: usize = 100;
pub const DEFAULT_MAX_TEXT_CHARS: usize = 50_000;

/// Application configuration.
///
/// Every key is optional in the file; missing keys take the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Clipboard poll period in milliseconds
    pub poll_interval_ms: u64,

    /// Maximum number of history entries kept
    pub max_items: usize,

    /// Maximum stored length of one entry, in characters
    pub max_text_chars: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            max_items: DEFAULT_MAX_ITEMS,
            max_text_chars: DEFAULT_MAX_TEXT_CHARS,
        }
    }
}

impl AppConfig {
    pub fn history_limits(&self) -> HistoryLimits {
        HistoryLimits {
            max_items: self.max_items,
            max_text_chars: self.max_text_chars,
        }
    }
}

/// Size bounds applied by the history list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryLimits {
    pub max_items: usize,
    pub max_text_chars: usize,
}

impl Default for HistoryLimits {
    fn default() -> Self {
        AppConfig::default().history_limits()
    }
}
