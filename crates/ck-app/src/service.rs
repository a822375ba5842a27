//! UI-facing history service
//!
//! Wraps the [`HistoryEngine`] in a single `tokio::sync::Mutex`. The poller
//! (through [`ClipboardChangeHandler`]) and every UI call take the same
//! lock, and each mutation awaits its save before releasing it, so saved
//! snapshots land on disk in the order the mutations happened.

use async_trait::async_trait;
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, info, info_span, Instrument};

use ck_core::history::HistoryItem;
use ck_core::ports::ClipboardChangeHandler;

use crate::engine::HistoryEngine;
use crate::event::HistoryEvent;

pub struct HistoryService {
    engine: Mutex<HistoryEngine>,
    events: broadcast::Sender<HistoryEvent>,
}

impl HistoryService {
    pub fn new(engine: HistoryEngine) -> Self {
        let events = engine.event_sender();
        Self {
            engine: Mutex::new(engine),
            events,
        }
    }

    /// Copy of the current list, pinned prefix first.
    pub async fn snapshot(&self) -> Vec<HistoryItem> {
        self.engine.lock().await.items().to_vec()
    }

    pub async fn index_of(&self, text: &str) -> Option<usize> {
        self.engine.lock().await.index_of(text)
    }

    /// Subscribe to [`HistoryEvent`]s. Does not take the engine lock.
    pub fn subscribe(&self) -> broadcast::Receiver<HistoryEvent> {
        self.events.subscribe()
    }

    /// Put `text` on the system clipboard and make it the most recent entry.
    #[tracing::instrument(name = "history.activate", skip_all, fields(chars = text.chars().count()))]
    pub async fn activate(&self, text: &str) -> bool {
        let activated = self.engine.lock().await.activate(text).await;
        info!(activated, "Activate requested");
        activated
    }

    #[tracing::instrument(name = "history.remove_at", skip(self))]
    pub async fn remove_at(&self, index: usize) -> bool {
        self.engine.lock().await.remove_at(index).await
    }

    #[tracing::instrument(name = "history.toggle_pinned_at", skip(self))]
    pub async fn toggle_pinned_at(&self, index: usize) -> bool {
        self.engine.lock().await.toggle_pinned_at(index).await
    }
}

#[async_trait]
impl ClipboardChangeHandler for HistoryService {
    async fn on_clipboard_text(&self, text: String) {
        let span = info_span!("history.on_clipboard_text", chars = text.chars().count());

        async {
            debug!("Clipboard text observed");
            self.engine.lock().await.observe(text).await;
        }
        .instrument(span)
        .await
    }
}
