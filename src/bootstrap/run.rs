use std::io;

use anyhow::Context;
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{debug, info, warn};

use ck_app::HistoryEvent;
use ck_core::app_dirs::AppDirs;
use ck_core::config::AppConfig;
use ck_core::history::HistoryList;
use ck_core::ports::{AppDirsPort, HistoryStorePort};
use ck_platform::app_dirs::DirsAppDirsAdapter;
use ck_platform::ipc::PlatformCommand;

use super::config::load_config_or_default;
use super::tracing::init_tracing_subscriber;
use super::wiring::{history_store, wire_dependencies, AppDeps};
use crate::cli::{render_history, Cli, Command};

/// Resolve directories, set up logging and config, then run `cli`'s command.
pub async fn run_app(cli: Cli) -> anyhow::Result<()> {
    let app_dirs = DirsAppDirsAdapter::new()
        .get_app_dirs()
        .context("Failed to resolve app data directory")?;
    let command = cli.command();

    if let Err(e) = init_tracing_subscriber(&app_dirs.logs_dir(), command == Command::Run) {
        eprintln!("Failed to initialize tracing: {e}");
    }

    let config_path = cli.config.unwrap_or_else(|| app_dirs.config_path());
    let config = load_config_or_default(&config_path);

    match command {
        Command::Run => run_monitor(&config, &app_dirs).await,
        Command::List => list_history(&config, &app_dirs).await,
    }
}

async fn run_monitor(config: &AppConfig, app_dirs: &AppDirs) -> anyhow::Result<()> {
    let AppDeps {
        service,
        watcher_control,
        command_tx,
        platform,
    } = wire_dependencies(config, app_dirs)
        .await
        .context("Failed to wire dependencies")?;

    let platform_task = tokio::spawn(platform.start());
    let events_task = tokio::spawn(log_history_events(service.subscribe()));

    watcher_control
        .start_watcher()
        .await
        .context("Failed to start clipboard watcher")?;

    info!(
        items = service.snapshot().await.len(),
        history = %app_dirs.history_path().display(),
        "ClipKeep running, press Ctrl-C to stop"
    );

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for Ctrl-C")?;

    info!("Shutting down");
    if let Err(e) = command_tx.send(PlatformCommand::Shutdown).await {
        warn!(error = %e, "Platform runtime already stopped");
    }
    platform_task
        .await
        .context("Platform runtime task failed")?;
    events_task.abort();

    Ok(())
}

/// Print the saved history without touching the file.
async fn list_history(config: &AppConfig, app_dirs: &AppDirs) -> anyhow::Result<()> {
    let stored = history_store(app_dirs)
        .load()
        .await
        .context("Failed to read history")?;
    let (list, outcome) = HistoryList::restore(config.history_limits(), stored.items);
    debug!(?outcome, format = ?stored.format, "History read for listing");

    render_history(list.items(), &mut io::stdout().lock()).context("Failed to print history")?;
    Ok(())
}

/// Stand-in for a UI: report history changes in the log.
async fn log_history_events(mut events: broadcast::Receiver<HistoryEvent>) {
    loop {
        match events.recv().await {
            Ok(HistoryEvent::NewText(text)) => {
                info!(chars = text.chars().count(), "New clipboard text recorded");
            }
            Ok(HistoryEvent::Updated) => debug!("History updated"),
            Err(RecvError::Lagged(skipped)) => warn!(skipped, "History event listener lagged"),
            Err(RecvError::Closed) => break,
        }
    }
}
