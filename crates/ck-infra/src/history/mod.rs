mod format;
mod json_store;

pub use format::{decode_history, encode_history, HistoryFileV1, HistoryFileV2, HistoryRecordV2};
pub use json_store::JsonHistoryStore;
