//! Port interfaces for the application layer
//!
//! Ports define the contract between the history engine and infrastructure
//! implementations (system clipboard, history file, app directories). This
//! follows Hexagonal Architecture principles, allowing the core business
//! logic to remain independent of external dependencies.

pub mod app_dirs;
pub mod clipboard;
mod clipboard_change_handler;
pub mod errors;
pub mod history_store;
pub mod watcher_control;

pub use app_dirs::AppDirsPort;
pub use clipboard::{ChangeToken, ClipboardError, SystemClipboardPort};
pub use clipboard_change_handler::ClipboardChangeHandler;
pub use errors::AppDirsError;
pub use history_store::{HistoryFormat, HistoryStoreError, HistoryStorePort, StoredHistory};
pub use watcher_control::{WatcherControlError, WatcherControlPort};
