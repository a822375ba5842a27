use async_trait::async_trait;

/// Port for pausing and resuming clipboard polling.
///
/// # Behavior
/// - `start_watcher()` should be idempotent.
/// - `stop_watcher()` should be idempotent.
#[async_trait]
pub trait WatcherControlPort: Send + Sync {
    /// Request the clipboard poller to start.
    async fn start_watcher(&self) -> Result<(), WatcherControlError>;

    /// Request the clipboard poller to stop.
    async fn stop_watcher(&self) -> Result<(), WatcherControlError>;
}

#[derive(Debug, thiserror::Error)]
pub enum WatcherControlError {
    #[error("Failed to send start command: {0}")]
    StartFailed(String),

    #[error("Failed to send stop command: {0}")]
    StopFailed(String),

    #[error("Watcher channel closed")]
    ChannelClosed,
}
