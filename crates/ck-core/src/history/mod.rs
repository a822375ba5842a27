//! Clipboard history domain.
//!
//! The history is a single ordered list split into two partitions:
//!
//! ```text
//! [ pinned prefix (oldest pin .. newest pin) | unpinned suffix (MRU first) ]
//!                                            ^
//!                                            pinned_count()
//! ```
//!
//! The boundary is never stored; it is the number of leading pinned items
//! and is recomputed whenever an operation needs it.

mod item;
mod list;
mod restore;
mod text;

pub use item::HistoryItem;
pub use list::{HistoryList, Placement};
pub use restore::RestoreOutcome;
pub use text::{is_blank, normalize_text};
