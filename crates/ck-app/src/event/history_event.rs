/// Notifications raised by the history engine.
///
/// Delivered over a `tokio::sync::broadcast` channel; the UI layer is
/// responsible for moving them onto its own rendering thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryEvent {
    /// Clipboard text was ingested and changed the list. Carries the stored
    /// (normalized) text, which is now the most recent unpinned entry.
    NewText(String),

    /// The list changed because of a user action (activate, remove, pin).
    Updated,
}
