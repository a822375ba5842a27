//! System clipboard adapter backed by `clipboard-rs`.

mod local;
mod watcher;

pub use local::LocalClipboard;
pub use watcher::{ChangeCounter, NativeChangeWatcher};
