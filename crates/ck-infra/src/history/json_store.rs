use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use ck_core::history::HistoryItem;
use ck_core::ports::{HistoryFormat, HistoryStoreError, HistoryStorePort, StoredHistory};

use super::format::{decode_history, encode_history};

/// History persisted as a single JSON document.
///
/// Every save rewrites the whole file; there is no append log.
pub struct JsonHistoryStore {
    path: PathBuf,
}

impl JsonHistoryStore {
    /// Creates a store backed by the file at `path`.
    ///
    /// Nothing is touched on disk until the first `load` or `save`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ck_infra::JsonHistoryStore;
    ///
    /// let store = JsonHistoryStore::new("/tmp/ClipKeep/history.json");
    /// assert!(store.path().ends_with("history.json"));
    /// ```
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_parent_dir(&self) -> Result<(), HistoryStoreError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).await?;
        }
        Ok(())
    }

    /// Write `content` next to the target, then rename it over the target.
    ///
    /// A crash mid-write leaves either the previous snapshot or the new one,
    /// never a truncated file.
    async fn atomic_write(&self, content: &str) -> Result<(), HistoryStoreError> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content).await?;
        fs::rename(&tmp_path, &self.path).await?;

        Ok(())
    }
}

#[async_trait]
impl HistoryStorePort for JsonHistoryStore {
    async fn load(&self) -> Result<StoredHistory, HistoryStoreError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no history file yet");
                return Ok(StoredHistory::empty(HistoryFormat::Missing));
            }
            Err(e) => return Err(e.into()),
        };

        let stored = decode_history(&content);
        tracing::debug!(
            path = %self.path.display(),
            format = ?stored.format,
            items = stored.items.len(),
            "history file read"
        );
        Ok(stored)
    }

    async fn save(&self, items: &[HistoryItem]) -> Result<(), HistoryStoreError> {
        let content =
            encode_history(items).map_err(|e| HistoryStoreError::Serialize(e.to_string()))?;

        self.atomic_write(&content).await
    }
}
