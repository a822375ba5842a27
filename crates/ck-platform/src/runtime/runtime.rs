use std::sync::Arc;
use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

use ck_core::ports::{ClipboardChangeHandler, SystemClipboardPort};

use super::event_bus::PlatformCommandReceiver;
use super::poller::ClipboardPoller;
use crate::ipc::PlatformCommand;

/// Single task driving clipboard polling.
///
/// One `select!` loop owns the poller, so ticks never overlap. Commands are
/// checked before the next tick. Polling is idle until a
/// [`PlatformCommand::StartClipboardWatcher`] arrives.
pub struct PlatformRuntime {
    poller: ClipboardPoller,
    command_rx: PlatformCommandReceiver,
    clipboard_handler: Arc<dyn ClipboardChangeHandler>,
    poll_interval: Duration,
    polling: bool,
    shutting_down: bool,
}

impl PlatformRuntime {
    pub fn new(
        clipboard: Arc<dyn SystemClipboardPort>,
        command_rx: PlatformCommandReceiver,
        clipboard_handler: Arc<dyn ClipboardChangeHandler>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            poller: ClipboardPoller::new(clipboard),
            command_rx,
            clipboard_handler,
            poll_interval,
            polling: false,
            shutting_down: false,
        }
    }

    pub async fn start(mut self) {
        let mut ticker = interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(poll_interval_ms = self.poll_interval.as_millis() as u64, "Platform runtime started");

        while !self.shutting_down {
            tokio::select! {
                biased;

                cmd = self.command_rx.recv() => match cmd {
                    Some(cmd) => self.handle_command(cmd),
                    None => {
                        info!("Command channel closed");
                        self.shutting_down = true;
                    }
                },
                _ = ticker.tick(), if self.polling => {
                    self.poll_once().await;
                }
            }
        }

        info!("Platform runtime stopped");
    }

    async fn poll_once(&mut self) {
        if let Some(text) = self.poller.tick() {
            self.clipboard_handler.on_clipboard_text(text).await;
        }
    }

    fn handle_command(&mut self, command: PlatformCommand) {
        match command {
            PlatformCommand::Shutdown => {
                self.shutting_down = true;
                info!("Platform runtime shutting down");
            }
            PlatformCommand::StartClipboardWatcher => {
                if self.polling {
                    debug!("Clipboard polling already running, skipping start");
                } else {
                    self.polling = true;
                    info!("Clipboard polling resumed");
                }
            }
            PlatformCommand::StopClipboardWatcher => {
                if self.polling {
                    self.polling = false;
                    info!("Clipboard polling paused");
                } else {
                    debug!("Clipboard polling already stopped");
                }
            }
        }
    }
}
