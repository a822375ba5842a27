//! # Configuration loader
//!
//! Reads `config.toml` into [`AppConfig`]. Keys missing from the file take
//! their defaults through `#[serde(default)]`; a missing or broken file is
//! never fatal at startup.

use std::path::Path;

use anyhow::Context;
use tracing::{debug, info, warn};

use ck_core::config::AppConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not a valid config.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;
    Ok(sanitize(config))
}

/// Like [`load_config`], but falls back to defaults instead of failing.
pub fn load_config_or_default(config_path: &Path) -> AppConfig {
    if !config_path.exists() {
        debug!(path = %config_path.display(), "No config file, using defaults");
        return AppConfig::default();
    }

    match load_config(config_path) {
        Ok(config) => {
            info!(
                path = %config_path.display(),
                poll_interval_ms = config.poll_interval_ms,
                max_items = config.max_items,
                max_text_chars = config.max_text_chars,
                "Loaded config"
            );
            config
        }
        Err(e) => {
            let error = format!("{e:#}");
            warn!(%error, "Invalid config file, using defaults");
            AppConfig::default()
        }
    }
}

/// Zero is never a usable value for any knob; replace it with the default.
fn sanitize(mut config: AppConfig) -> AppConfig {
    let defaults = AppConfig::default();
    if config.poll_interval_ms == 0 {
        warn!("poll_interval_ms must be positive, using default");
        config.poll_interval_ms = defaults.poll_interval_ms;
    }
    if config.max_items == 0 {
        warn!("max_items must be positive, using default");
        config.max_items = defaults.max_items;
    }
    if config.max_text_chars == 0 {
        warn!("max_text_chars must be positive, using default");
        config.max_text_chars = defaults.max_text_chars;
    }
    config
}
