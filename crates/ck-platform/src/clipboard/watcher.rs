use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use anyhow::{Context, Result};
use clipboard_rs::{ClipboardHandler, ClipboardWatcher, ClipboardWatcherContext, WatcherShutdown};
use tracing::{debug, info, warn};

use ck_core::ports::ChangeToken;

/// Monotonic clipboard change counter.
///
/// Bumped once per OS change notification. The value itself carries no
/// meaning; only whether it moved since the last read does.
#[derive(Debug, Clone, Default)]
pub struct ChangeCounter(Arc<AtomicU64>);

impl ChangeCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> ChangeToken {
        self.0.load(Ordering::Acquire)
    }

    pub fn bump(&self) -> ChangeToken {
        self.0.fetch_add(1, Ordering::AcqRel) + 1
    }
}

impl ClipboardHandler for ChangeCounter {
    fn on_clipboard_change(&mut self) {
        let token = self.bump();
        debug!(token, "Clipboard change notification");
    }
}

/// Native clipboard watcher thread feeding a [`ChangeCounter`].
///
/// The watch loop blocks, so it gets its own OS thread. Dropping the
/// watcher stops the loop.
pub struct NativeChangeWatcher {
    shutdown: Mutex<Option<WatcherShutdown>>,
    join: Option<JoinHandle<()>>,
}

impl NativeChangeWatcher {
    pub fn spawn(counter: ChangeCounter) -> Result<Self> {
        let mut watcher_ctx = ClipboardWatcherContext::new()
            .map_err(|e| anyhow::anyhow!("Failed to create watcher context: {}", e))?;

        let shutdown = watcher_ctx.add_handler(counter).get_shutdown_channel();

        let join = std::thread::Builder::new()
            .name("clipboard-watch".into())
            .spawn(move || {
                info!("start clipboard watch");
                watcher_ctx.start_watch();
                info!("clipboard watch stopped");
            })
            .context("Failed to spawn clipboard watch thread")?;

        Ok(Self {
            shutdown: Mutex::new(Some(shutdown)),
            join: Some(join),
        })
    }
}

impl Drop for NativeChangeWatcher {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.get_mut().ok().and_then(Option::take) {
            shutdown.stop();
        }
        if let Some(join) = self.join.take() {
            if join.join().is_err() {
                warn!("clipboard watch thread panicked");
            }
        }
    }
}
