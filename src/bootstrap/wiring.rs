//! # Dependency wiring
//!
//! The only place that depends on `ck-app`, `ck-infra` and `ck-platform`
//! at once. It assembles; it does not decide.

use std::sync::Arc;
use std::time::Duration;

use ck_app::{HistoryEngine, HistoryService};
use ck_core::app_dirs::AppDirs;
use ck_core::config::AppConfig;
use ck_core::ports::{ClipboardChangeHandler, SystemClipboardPort, WatcherControlPort};
use ck_infra::JsonHistoryStore;
use ck_platform::adapters::InMemoryWatcherControl;
use ck_platform::clipboard::LocalClipboard;
use ck_platform::runtime::{command_channel, PlatformCommandSender, PlatformRuntime};

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Clipboard initialization failed: {0}")]
    ClipboardInit(String),
}

/// Everything the `run` command needs, fully assembled.
pub struct AppDeps {
    pub service: Arc<HistoryService>,
    pub watcher_control: Arc<dyn WatcherControlPort>,
    pub command_tx: PlatformCommandSender,
    /// Not yet started; the caller spawns [`PlatformRuntime::start`].
    pub platform: PlatformRuntime,
}

pub fn history_store(app_dirs: &AppDirs) -> Arc<JsonHistoryStore> {
    Arc::new(JsonHistoryStore::new(app_dirs.history_path()))
}

/// Wire the application against the real system clipboard.
pub async fn wire_dependencies(config: &AppConfig, app_dirs: &AppDirs) -> WiringResult<AppDeps> {
    let clipboard = LocalClipboard::new().map_err(|e| WiringError::ClipboardInit(e.to_string()))?;
    Ok(wire_with_clipboard(config, app_dirs, Arc::new(clipboard)).await)
}

pub async fn wire_with_clipboard(
    config: &AppConfig,
    app_dirs: &AppDirs,
    clipboard: Arc<dyn SystemClipboardPort>,
) -> AppDeps {
    let engine = HistoryEngine::load(
        config.history_limits(),
        history_store(app_dirs),
        clipboard.clone(),
    )
    .await;
    let service = Arc::new(HistoryService::new(engine));

    let (command_tx, command_rx) = command_channel();
    let handler: Arc<dyn ClipboardChangeHandler> = service.clone();
    let platform = PlatformRuntime::new(
        clipboard,
        command_rx,
        handler,
        Duration::from_millis(config.poll_interval_ms),
    );
    let watcher_control = Arc::new(InMemoryWatcherControl::new(command_tx.clone()));

    AppDeps {
        service,
        watcher_control,
        command_tx,
        platform,
    }
}
