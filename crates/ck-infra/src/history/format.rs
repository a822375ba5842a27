//! On-disk history schemas.
//!
//! Two versions exist and both are JSON arrays:
//!
//! - **V2 (current)**: `[ { "Text": "...", "IsPinned": false }, ... ]`
//! - **V1 (legacy, read-only)**: `[ "...", ... ]`, every entry unpinned
//!
//! Decoding tries V2 first and falls back to V1. When neither parses the
//! file is reported as [`HistoryFormat::Unreadable`] with no items.

use ck_core::history::HistoryItem;
use ck_core::ports::{HistoryFormat, StoredHistory};
use serde::{Deserialize, Serialize};

/// One record of the current schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HistoryRecordV2 {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub is_pinned: bool,
}

pub type HistoryFileV2 = Vec<HistoryRecordV2>;

pub type HistoryFileV1 = Vec<String>;

impl From<HistoryRecordV2> for HistoryItem {
    fn from(record: HistoryRecordV2) -> Self {
        HistoryItem {
            text: record.text,
            is_pinned: record.is_pinned,
        }
    }
}

impl From<&HistoryItem> for HistoryRecordV2 {
    fn from(item: &HistoryItem) -> Self {
        HistoryRecordV2 {
            text: item.text.clone(),
            is_pinned: item.is_pinned,
        }
    }
}

/// Two-stage decode: current schema, then legacy, then nothing.
pub fn decode_history(content: &str) -> StoredHistory {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    match serde_json::from_str::<HistoryFileV2>(content) {
        Ok(records) => {
            return StoredHistory {
                items: records.into_iter().map(HistoryItem::from).collect(),
                format: HistoryFormat::Current,
            }
        }
        Err(e) => tracing::debug!(error = %e, "history is not in the current schema"),
    }

    match serde_json::from_str::<HistoryFileV1>(content) {
        Ok(texts) => StoredHistory {
            items: texts.into_iter().map(HistoryItem::unpinned).collect(),
            format: HistoryFormat::Legacy,
        },
        Err(e) => {
            tracing::warn!(error = %e, "history file matches no known schema, ignoring it");
            StoredHistory::empty(HistoryFormat::Unreadable)
        }
    }
}

/// Serialize `items` in the current schema, pretty-printed.
pub fn encode_history(items: &[HistoryItem]) -> Result<String, serde_json::Error> {
    let records: HistoryFileV2 = items.iter().map(HistoryRecordV2::from).collect();
    serde_json::to_string_pretty(&records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_current_schema() {
        let stored = decode_history(
            r#"[{"Text":"p","IsPinned":true},{"Text":"a","IsPinned":false}]"#,
        );

        assert_eq!(stored.format, HistoryFormat::Current);
        assert_eq!(
            stored.items,
            vec![HistoryItem::pinned("p"), HistoryItem::unpinned("a")]
        );
    }

    #[test]
    fn missing_pin_flag_defaults_to_unpinned() {
        let stored = decode_history(r#"[{"Text":"a"}]"#);

        assert_eq!(stored.format, HistoryFormat::Current);
        assert_eq!(stored.items, vec![HistoryItem::unpinned("a")]);
    }

    #[test]
    fn falls_back_to_legacy_strings() {
        let stored = decode_history(r#"["a","b"]"#);

        assert_eq!(stored.format, HistoryFormat::Legacy);
        assert!(stored.is_migrated());
        assert_eq!(
            stored.items,
            vec![HistoryItem::unpinned("a"), HistoryItem::unpinned("b")]
        );
    }

    #[test]
    fn empty_array_is_current_schema() {
        let stored = decode_history("[]");

        assert_eq!(stored.format, HistoryFormat::Current);
        assert!(stored.items.is_empty());
    }

    #[test]
    fn garbage_is_unreadable_and_empty() {
        for content in ["", "{not json", r#"{"Text":"a"}"#, "[1,2,3]"] {
            let stored = decode_history(content);
            assert_eq!(stored.format, HistoryFormat::Unreadable, "{content:?}");
            assert!(stored.items.is_empty());
        }
    }

    #[test]
    fn leading_byte_order_mark_is_ignored() {
        let stored = decode_history("\u{feff}[\"a\"]");

        assert_eq!(stored.format, HistoryFormat::Legacy);
        assert_eq!(stored.items.len(), 1);
    }

    #[test]
    fn encodes_pascal_case_fields() {
        let json = encode_history(&[HistoryItem::pinned("x")]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value, serde_json::json!([{ "Text": "x", "IsPinned": true }]));
    }
}
