use std::collections::HashSet;

use crate::config::HistoryLimits;

use super::item::HistoryItem;
use super::list::HistoryList;
use super::text::is_blank;

/// What happened while replaying persisted items into a [`HistoryList`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestoreOutcome {
    pub accepted: usize,
    pub skipped_blank: usize,
    pub dropped_duplicates: usize,
    pub forced_unpinned: usize,
    pub dropped_over_capacity: usize,
}

impl RestoreOutcome {
    /// The persisted data broke a list invariant and should be rewritten.
    pub fn needs_rewrite(&self) -> bool {
        self.dropped_duplicates > 0 || self.forced_unpinned > 0
    }
}

impl HistoryList {
    /// Rebuild a list from persisted items, repairing what the file got wrong.
    ///
    /// Items are replayed in file order. Blank texts are skipped, later
    /// duplicates are dropped and the pinned section is closed at the first
    /// unpinned item; any pinned claim after that is cleared. Replay stops
    /// once `max_items` have been accepted.
    pub fn restore<I>(limits: HistoryLimits, persisted: I) -> (Self, RestoreOutcome)
    where
        I: IntoIterator<Item = HistoryItem>,
    {
        let mut list = HistoryList::new(limits);
        let mut outcome = RestoreOutcome::default();
        let mut seen = HashSet::new();
        let mut pinned_section_open = true;
        let mut persisted = persisted.into_iter();

        for stored in persisted.by_ref() {
            if list.items.len() >= limits.max_items {
                outcome.dropped_over_capacity += 1;
                break;
            }

            let text = list.normalize(&stored.text);
            if is_blank(&text) {
                outcome.skipped_blank += 1;
                continue;
            }
            if !seen.insert(text.clone()) {
                outcome.dropped_duplicates += 1;
                continue;
            }

            let mut is_pinned = stored.is_pinned;
            if is_pinned && !pinned_section_open {
                is_pinned = false;
                outcome.forced_unpinned += 1;
            }
            if !is_pinned {
                pinned_section_open = false;
            }

            list.items.push(HistoryItem { text, is_pinned });
            outcome.accepted += 1;
        }
        outcome.dropped_over_capacity += persisted.count();

        (list, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits(max_items: usize) -> HistoryLimits {
        HistoryLimits {
            max_items,
            max_text_chars: 10,
        }
    }

    #[test]
    fn clean_items_restore_unchanged() {
        let stored = vec![
            HistoryItem::pinned("p"),
            HistoryItem::unpinned("a"),
            HistoryItem::unpinned("b"),
        ];

        let (list, outcome) = HistoryList::restore(limits(100), stored.clone());

        assert_eq!(list.items(), stored.as_slice());
        assert!(!outcome.needs_rewrite());
        assert_eq!(outcome.accepted, 3);
    }

    #[test]
    fn duplicates_are_dropped_and_flagged() {
        let stored = vec![
            HistoryItem::unpinned("a"),
            HistoryItem::unpinned("b"),
            HistoryItem::unpinned("a"),
        ];

        let (list, outcome) = HistoryList::restore(limits(100), stored);

        assert_eq!(list.len(), 2);
        assert_eq!(outcome.dropped_duplicates, 1);
        assert!(outcome.needs_rewrite());
    }

    #[test]
    fn pins_after_first_unpinned_are_cleared() {
        let stored = vec![
            HistoryItem::pinned("p"),
            HistoryItem::unpinned("a"),
            HistoryItem::pinned("late"),
        ];

        let (list, outcome) = HistoryList::restore(limits(100), stored);

        assert_eq!(list.pinned_count(), 1);
        assert_eq!(list.get(2), Some(&HistoryItem::unpinned("late")));
        assert_eq!(outcome.forced_unpinned, 1);
        assert!(outcome.needs_rewrite());
    }

    #[test]
    fn blank_entries_are_skipped_without_rewrite() {
        let stored = vec![
            HistoryItem::unpinned("   "),
            HistoryItem::unpinned("a"),
            HistoryItem::unpinned(""),
        ];

        let (list, outcome) = HistoryList::restore(limits(100), stored);

        assert_eq!(list.items(), &[HistoryItem::unpinned("a")]);
        assert_eq!(outcome.skipped_blank, 2);
        assert!(!outcome.needs_rewrite());
    }

    #[test]
    fn replay_stops_at_capacity() {
        let stored = (0..5).map(|i| HistoryItem::unpinned(format!("t{i}")));

        let (list, outcome) = HistoryList::restore(limits(3), stored);

        assert_eq!(list.len(), 3);
        assert_eq!(list.get(2).map(|item| item.text.as_str()), Some("t2"));
        assert_eq!(outcome.dropped_over_capacity, 2);
    }

    #[test]
    fn texts_are_normalized_before_dedup() {
        let stored = vec![
            HistoryItem::unpinned("0123456789-first"),
            HistoryItem::unpinned("0123456789-second"),
        ];

        let (list, outcome) = HistoryList::restore(limits(100), stored);

        assert_eq!(list.items(), &[HistoryItem::unpinned("0123456789")]);
        assert_eq!(outcome.dropped_duplicates, 1);
    }
}
