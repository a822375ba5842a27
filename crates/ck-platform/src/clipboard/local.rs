use std::sync::{Mutex, MutexGuard};

use anyhow::Result;
use clipboard_rs::{Clipboard, ClipboardContext, ContentFormat};
use tracing::{debug, debug_span, warn};

use ck_core::ports::{ChangeToken, ClipboardError, SystemClipboardPort};

use super::watcher::{ChangeCounter, NativeChangeWatcher};

/// Text-only system clipboard.
///
/// The change token comes from a native watcher thread. When the watcher
/// cannot be started (e.g. no display server), `change_token` reports
/// [`ClipboardError::Unavailable`] and the poller falls back to reading the
/// text on every tick.
pub struct LocalClipboard {
    inner: Mutex<ClipboardContext>,
    counter: ChangeCounter,
    watcher: Option<NativeChangeWatcher>,
}

impl LocalClipboard {
    pub fn new() -> Result<Self> {
        let context = ClipboardContext::new()
            .map_err(|e| anyhow::anyhow!("Failed to create clipboard context: {}", e))?;

        let counter = ChangeCounter::new();
        let watcher = match NativeChangeWatcher::spawn(counter.clone()) {
            Ok(watcher) => Some(watcher),
            Err(e) => {
                warn!(error = %e, "Clipboard change notifications unavailable, reading every tick");
                None
            }
        };

        Ok(Self {
            inner: Mutex::new(context),
            counter,
            watcher,
        })
    }

    fn context(&self) -> Result<MutexGuard<'_, ClipboardContext>, ClipboardError> {
        self.inner
            .lock()
            .map_err(|_| ClipboardError::Unavailable("clipboard context lock poisoned".into()))
    }
}

impl SystemClipboardPort for LocalClipboard {
    fn change_token(&self) -> Result<ChangeToken, ClipboardError> {
        if self.watcher.is_none() {
            return Err(ClipboardError::Unavailable(
                "no clipboard change watcher".into(),
            ));
        }
        Ok(self.counter.current())
    }

    fn read_text(&self) -> Result<Option<String>, ClipboardError> {
        let span = debug_span!("platform.read_clipboard_text");
        span.in_scope(|| {
            let ctx = self.context()?;
            if !ctx.has(ContentFormat::Text) {
                debug!("Clipboard holds no text");
                return Ok(None);
            }
            let text = ctx
                .get_text()
                .map_err(|e| ClipboardError::Read(e.to_string()))?;
            Ok(Some(text))
        })
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let span = debug_span!("platform.write_clipboard_text", chars = text.chars().count());
        span.in_scope(|| {
            let ctx = self.context()?;
            ctx.set_text(text.to_string())
                .map_err(|e| ClipboardError::Write(e.to_string()))?;

            debug!("Wrote text to system clipboard");
            Ok(())
        })
    }
}
