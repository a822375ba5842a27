//! Tracing configuration for ClipKeep
//!
//! Installs one global `tracing-subscriber` registry:
//!
//! - an `EnvFilter` (`RUST_LOG` wins, otherwise debug in dev builds and
//!   info in release);
//! - an optional console layer;
//! - a file layer at `<app-data>/logs/clipkeep.log` written through a
//!   non-blocking `tracing-appender` worker.
//!
//! If the log directory cannot be created, logging continues on the console
//! only.

use std::{fs, io, path::Path, sync::OnceLock};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

const LOG_FILE_NAME: &str = "clipkeep.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Default filter directives, used when `RUST_LOG` is unset.
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    vec![
        level.to_string(),
        format!("ck_core={level}"),
        format!("ck_app={level}"),
        format!("ck_infra={level}"),
        format!("ck_platform={level}"),
        format!("clipkeep_lib={level}"),
    ]
}

/// Initialize the global tracing subscriber.
///
/// `console` controls the stdout layer; commands that print their own
/// output (such as `list`) turn it off and log to the file only.
///
/// # Errors
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber(logs_dir: &Path, console: bool) -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    let file_writer = match build_file_writer(logs_dir) {
        Ok(writer) => Some(writer),
        Err(err) => {
            eprintln!("Failed to initialize file logging, falling back to stdout: {err}");
            None
        }
    };

    // Without a file there must still be somewhere to log.
    let stdout_layer = (console || file_writer.is_none()).then(|| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
            .with_level(true)
            .with_target(true)
            .with_ansi(cfg!(not(test)))
            .with_writer(BoxMakeWriter::new(io::stdout))
    });

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn build_file_writer(logs_dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(logs_dir)?;

    let file_appender = tracing_appender::rolling::never(logs_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
