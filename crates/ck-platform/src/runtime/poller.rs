//! Clipboard change poller
//!
//! Turns the clipboard's opaque change token into "new text" signals.
//!
//! ```text
//! change_token()  ── unchanged ──→ nothing (cheap path)
//!       │
//!    changed
//!       ↓
//! read_text()  ── None / "" ──→ nothing (token still advanced)
//!       │
//!     text ──→ caller (engine decides whether it is new)
//! ```
//!
//! The poller keeps no copy of the text. Suppressing a repeat of the last
//! ingested text is the engine's job, since removals and activations also
//! move that watermark.

use std::sync::Arc;

use tracing::{debug, trace, warn};

use ck_core::ports::{ChangeToken, SystemClipboardPort};

pub struct ClipboardPoller {
    clipboard: Arc<dyn SystemClipboardPort>,
    last_token: Option<ChangeToken>,
}

impl ClipboardPoller {
    pub fn new(clipboard: Arc<dyn SystemClipboardPort>) -> Self {
        Self {
            clipboard,
            last_token: None,
        }
    }

    pub fn last_token(&self) -> Option<ChangeToken> {
        self.last_token
    }

    /// Check the clipboard once.
    ///
    /// Returns the clipboard text when the change token moved and the
    /// payload is non-empty text. When the token cannot be read the text is
    /// read on every tick instead.
    pub fn tick(&mut self) -> Option<String> {
        match self.clipboard.change_token() {
            Ok(token) if self.last_token == Some(token) => {
                trace!(token, "Clipboard unchanged");
                return None;
            }
            Ok(token) => {
                debug!(token, previous = ?self.last_token, "Clipboard change token moved");
                self.last_token = Some(token);
            }
            Err(e) => {
                trace!(error = %e, "Change token unavailable, reading clipboard");
            }
        }

        match self.clipboard.read_text() {
            Ok(Some(text)) if !text.is_empty() => Some(text),
            Ok(_) => {
                debug!("Clipboard payload is not text, skipping");
                None
            }
            Err(e) => {
                warn!(error = %e, "Failed to read clipboard text");
                None
            }
        }
    }
}
