//! Clipboard port - abstracts system clipboard access
//!
//! The history engine only ever deals with plain text. Anything else on the
//! clipboard (images, files, rich text without a text flavour) reads as
//! `None`.

use thiserror::Error;

/// Opaque clipboard change token.
///
/// Only equality is meaningful: a different value means the clipboard
/// content changed at least once since the token was taken.
pub type ChangeToken = u64;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("clipboard read failed: {0}")]
    Read(String),

    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Clipboard port - abstracts local clipboard access
///
/// Implementations must make `change_token` cheap; it is called on every
/// poll tick, while `read_text` is only called once a change is seen.
pub trait SystemClipboardPort: Send + Sync {
    /// Current change token.
    fn change_token(&self) -> Result<ChangeToken, ClipboardError>;

    /// Current text payload, or `None` when the clipboard holds no text.
    fn read_text(&self) -> Result<Option<String>, ClipboardError>;

    /// Replace the clipboard content with `text`.
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
