//! History engine
//!
//! Owns the ordered history list, the `last_seen_text` watermark and the
//! durable snapshot. Every mutating method takes `&mut self`; callers that
//! share the engine go through [`HistoryService`](crate::HistoryService),
//! which holds it behind one lock so mutations and their saves happen in
//! order.

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

use ck_core::config::HistoryLimits;
use ck_core::history::{HistoryItem, HistoryList};
use ck_core::ports::{HistoryFormat, HistoryStorePort, StoredHistory, SystemClipboardPort};

use crate::event::HistoryEvent;

const EVENT_CHANNEL_CAPACITY: usize = 64;

pub struct HistoryEngine {
    list: HistoryList,
    last_seen_text: Option<String>,
    store: Arc<dyn HistoryStorePort>,
    clipboard: Arc<dyn SystemClipboardPort>,
    events: broadcast::Sender<HistoryEvent>,
}

impl HistoryEngine {
    /// Build the engine from whatever the store holds.
    ///
    /// Never fails: an unreadable store starts an empty history. Legacy
    /// files and files that broke a list invariant are rewritten at once in
    /// the current schema.
    pub async fn load(
        limits: HistoryLimits,
        store: Arc<dyn HistoryStorePort>,
        clipboard: Arc<dyn SystemClipboardPort>,
    ) -> Self {
        let stored = match store.load().await {
            Ok(stored) => stored,
            Err(e) => {
                error!(error = %e, "Failed to read history, starting empty");
                StoredHistory::empty(HistoryFormat::Unreadable)
            }
        };
        let migrated = stored.is_migrated();

        let (list, outcome) = HistoryList::restore(limits, stored.items);
        let last_seen_text = list.get(0).map(|item| item.text.clone());
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        info!(
            items = list.len(),
            pinned = list.pinned_count(),
            format = ?stored.format,
            "History loaded"
        );

        let engine = Self {
            list,
            last_seen_text,
            store,
            clipboard,
            events,
        };

        if migrated || outcome.needs_rewrite() {
            info!(
                migrated,
                dropped_duplicates = outcome.dropped_duplicates,
                forced_unpinned = outcome.forced_unpinned,
                "Rewriting history file in current format"
            );
            engine.persist().await;
        }

        engine
    }

    pub fn items(&self) -> &[HistoryItem] {
        self.list.items()
    }

    pub fn limits(&self) -> HistoryLimits {
        self.list.limits()
    }

    pub fn last_seen_text(&self) -> Option<&str> {
        self.last_seen_text.as_deref()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<HistoryEvent> {
        self.events.subscribe()
    }

    pub fn event_sender(&self) -> broadcast::Sender<HistoryEvent> {
        self.events.clone()
    }

    pub fn index_of(&self, text: &str) -> Option<usize> {
        self.list.index_of(text)
    }

    /// Handle text the poller found on the clipboard.
    ///
    /// Text equal to the watermark is dropped so that a source re-asserting
    /// the same content does not reshuffle the MRU order.
    ///
    /// The watermark holds the normalized form, the same text the list
    /// stores, so removing that entry clears it.
    pub async fn observe(&mut self, text: String) {
        let normalized = self.list.normalize(&text);
        if self.last_seen_text.as_deref() == Some(normalized.as_str()) {
            debug!("Clipboard text matches last seen text, skipping");
            return;
        }

        self.ingest(&normalized).await;
        self.last_seen_text = Some(normalized);
    }

    /// Record `text` as the most recent clipboard value.
    ///
    /// Returns `true` when the list changed; the change is saved and a
    /// [`HistoryEvent::NewText`] is broadcast.
    pub async fn ingest(&mut self, text: &str) -> bool {
        let placement = self.list.place_at_top(text);
        if !placement.is_structural() {
            return false;
        }

        debug!(?placement, items = self.list.len(), "History ingested text");
        self.persist().await;
        self.emit(HistoryEvent::NewText(self.list.normalize(text)));
        true
    }

    /// Put `text` back on the clipboard and move it to the top.
    ///
    /// Returns `false` only when the clipboard write fails, in which case
    /// the list and the watermark are left untouched.
    pub async fn activate(&mut self, text: &str) -> bool {
        if let Err(e) = self.clipboard.write_text(text) {
            error!(error = %e, "Failed to write history text to clipboard");
            return false;
        }
        self.last_seen_text = Some(self.list.normalize(text));

        let placement = self.list.place_at_top(text);
        if placement.is_structural() {
            debug!(?placement, "Activated text reordered history");
            self.persist().await;
            self.emit(HistoryEvent::Updated);
        }
        true
    }

    pub async fn remove_at(&mut self, index: usize) -> bool {
        let Some(removed) = self.list.remove_at(index) else {
            warn!(index, len = self.list.len(), "remove_at index out of range");
            return false;
        };

        if self.last_seen_text.as_deref() == Some(removed.text.as_str()) {
            // Lets the same text be ingested fresh the next time it is copied.
            self.last_seen_text = None;
        }

        self.persist().await;
        self.emit(HistoryEvent::Updated);
        true
    }

    pub async fn toggle_pinned_at(&mut self, index: usize) -> bool {
        if !self.list.toggle_pinned_at(index) {
            warn!(index, len = self.list.len(), "toggle_pinned_at index out of range");
            return false;
        }

        self.persist().await;
        self.emit(HistoryEvent::Updated);
        true
    }

    /// Best-effort save; the in-memory list stays authoritative on failure.
    async fn persist(&self) {
        if let Err(e) = self.store.save(self.list.items()).await {
            error!(error = %e, "Failed to save history");
        }
    }

    fn emit(&self, event: HistoryEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }
}
