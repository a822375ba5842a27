//! # ck-infra
//!
//! Infrastructure adapters for ClipKeep: the JSON history file and its
//! versioned schemas.

pub mod history;

pub use history::JsonHistoryStore;
