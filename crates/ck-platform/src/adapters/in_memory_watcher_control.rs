use tokio::sync::mpsc::{self, error::SendError};
use tracing::debug;

use ck_core::ports::{WatcherControlError, WatcherControlPort};

use crate::ipc::PlatformCommand;

/// Pauses and resumes clipboard polling by sending commands to the
/// platform runtime over its in-process channel.
///
/// Idempotence is the runtime's concern: a repeated start or stop is a
/// logged no-op there.
pub struct InMemoryWatcherControl {
    cmd_tx: mpsc::Sender<PlatformCommand>,
}

impl InMemoryWatcherControl {
    pub fn new(cmd_tx: mpsc::Sender<PlatformCommand>) -> Self {
        Self { cmd_tx }
    }

    async fn send(
        &self,
        command: PlatformCommand,
        on_error: fn(String) -> WatcherControlError,
    ) -> Result<(), WatcherControlError> {
        debug!(?command, "Sending watcher command");
        self.cmd_tx
            .send(command)
            .await
            .map_err(|e: SendError<PlatformCommand>| {
                if self.cmd_tx.is_closed() {
                    WatcherControlError::ChannelClosed
                } else {
                    on_error(e.to_string())
                }
            })
    }
}

#[async_trait::async_trait]
impl WatcherControlPort for InMemoryWatcherControl {
    async fn start_watcher(&self) -> Result<(), WatcherControlError> {
        self.send(
            PlatformCommand::StartClipboardWatcher,
            WatcherControlError::StartFailed,
        )
        .await
    }

    async fn stop_watcher(&self) -> Result<(), WatcherControlError> {
        self.send(
            PlatformCommand::StopClipboardWatcher,
            WatcherControlError::StopFailed,
        )
        .await
    }
}
