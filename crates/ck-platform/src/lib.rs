//! # ck-platform
//!
//! Platform-specific implementations for ClipKeep.
//!
//! This crate contains the adapters that touch the operating system: the
//! system clipboard, the polling runtime that watches it, and resolution of
//! the per-user application directory.

pub mod adapters;
pub mod app_dirs;
pub mod clipboard;
pub mod ipc;
pub mod runtime;
