//! # ck-core
//!
//! Core domain models and business logic for ClipKeep.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod app_dirs;
pub mod config;
pub mod history;
pub mod ports;

// Re-export commonly used types at the crate root
pub use config::{AppConfig, HistoryLimits};
pub use history::{HistoryItem, HistoryList, RestoreOutcome};
