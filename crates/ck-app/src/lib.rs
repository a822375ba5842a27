//! ClipKeep application layer
//!
//! This crate contains the history engine and the service that serializes
//! every access to it.
//!
//! ```text
//! ClipboardPoller (platform)        UI layer
//!         ↓                            ↓
//!   ClipboardChangeHandler       HistoryService API
//!         ↘                          ↙
//!              HistoryService (one lock)
//!                      ↓
//!               HistoryEngine ──→ HistoryStorePort / SystemClipboardPort
//!                      ↓
//!               HistoryEvent broadcast
//! ```

pub mod engine;
pub mod event;
pub mod service;

pub use engine::HistoryEngine;
pub use event::HistoryEvent;
pub use service::HistoryService;
