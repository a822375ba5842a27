use async_trait::async_trait;
use thiserror::Error;

use crate::history::HistoryItem;

/// On-disk schema a history was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryFormat {
    /// No history file yet.
    Missing,
    /// Array of `{ "Text", "IsPinned" }` records.
    Current,
    /// Array of plain strings; must be rewritten in the current schema.
    Legacy,
    /// Neither schema parsed; treated as an empty history.
    Unreadable,
}

/// Raw items as found on disk, before any repair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredHistory {
    pub items: Vec<HistoryItem>,
    pub format: HistoryFormat,
}

impl StoredHistory {
    pub fn empty(format: HistoryFormat) -> Self {
        Self {
            items: Vec::new(),
            format,
        }
    }

    pub fn is_migrated(&self) -> bool {
        self.format == HistoryFormat::Legacy
    }
}

#[derive(Debug, Error)]
pub enum HistoryStoreError {
    #[error("history file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("history serialization failed: {0}")]
    Serialize(String),
}

/// Durable storage for the ordered history list.
#[async_trait]
pub trait HistoryStorePort: Send + Sync {
    /// Read the persisted items in file order.
    ///
    /// A missing or unparseable file is not an error; see [`HistoryFormat`].
    async fn load(&self) -> Result<StoredHistory, HistoryStoreError>;

    /// Overwrite the persisted snapshot with `items`.
    async fn save(&self, items: &[HistoryItem]) -> Result<(), HistoryStoreError>;
}
