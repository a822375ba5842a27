//! Clipboard change handler port
//!
//! This port defines the callback interface for handling clipboard change events
//! from the platform layer. It follows the Dependency Inversion Principle:
//! - Platform layer (low-level) depends on this abstraction
//! - App layer (high-level) implements this interface

/// Callback handler for clipboard text changes.
///
/// The platform layer calls this when the clipboard change token moved and
/// the new payload is non-empty text. The text is passed as read, before
/// normalization.
#[async_trait::async_trait]
pub trait ClipboardChangeHandler: Send + Sync {
    async fn on_clipboard_text(&self, text: String);
}
