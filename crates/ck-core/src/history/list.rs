use crate::config::HistoryLimits;

use super::item::HistoryItem;
use super::text::normalize_text;

/// Result of moving a text to the top of the unpinned suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Text is pinned, or already the most recent unpinned item.
    Unchanged,
    /// Existing unpinned item moved to the top of the suffix.
    Promoted,
    /// New unpinned item inserted (and the tail possibly evicted).
    Inserted,
}

impl Placement {
    pub fn is_structural(self) -> bool {
        !matches!(self, Placement::Unchanged)
    }
}

/// Ordered, capacity-bounded, pin-aware clipboard history.
///
/// Invariants held after every public mutation:
/// - texts are unique;
/// - pinned items form a contiguous prefix;
/// - `len() <= limits.max_items`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryList {
    pub(super) items: Vec<HistoryItem>,
    pub(super) limits: HistoryLimits,
}

impl HistoryList {
    pub fn new(limits: HistoryLimits) -> Self {
        Self {
            items: Vec::with_capacity(limits.max_items.min(1024)),
            limits,
        }
    }

    pub fn limits(&self) -> HistoryLimits {
        self.limits
    }

    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&HistoryItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of leading pinned items, i.e. the index of the first unpinned slot.
    pub fn pinned_count(&self) -> usize {
        self.items.iter().take_while(|item| item.is_pinned).count()
    }

    pub fn normalize(&self, text: &str) -> String {
        normalize_text(text, self.limits.max_text_chars)
    }

    /// Position of the item whose text equals the normalized `text`.
    pub fn index_of(&self, text: &str) -> Option<usize> {
        let normalized = self.normalize(text);
        self.position(&normalized)
    }

    fn position(&self, normalized: &str) -> Option<usize> {
        self.items.iter().position(|item| item.text == normalized)
    }

    /// Make `text` the most recently used unpinned item.
    ///
    /// Pinned items keep their slot. A new text is inserted at the head of
    /// the unpinned suffix and the tail is trimmed back to capacity.
    pub fn place_at_top(&mut self, text: &str) -> Placement {
        let normalized = self.normalize(text);
        let top = self.pinned_count();

        match self.position(&normalized) {
            Some(index) if self.items[index].is_pinned => Placement::Unchanged,
            Some(index) if index == top => Placement::Unchanged,
            Some(index) => {
                let item = self.items.remove(index);
                // `index > top` here, so removing it does not move the boundary.
                self.items.insert(top, item);
                Placement::Promoted
            }
            None => {
                self.items.insert(top, HistoryItem::unpinned(normalized));
                self.evict_overflow();
                Placement::Inserted
            }
        }
    }

    pub fn remove_at(&mut self, index: usize) -> Option<HistoryItem> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Pin or unpin the item at `index`, moving it across the boundary.
    ///
    /// Unpinning makes the item the head of the unpinned suffix; pinning
    /// makes it the tail of the pinned prefix. Returns `false` when `index`
    /// is out of range.
    pub fn toggle_pinned_at(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }

        // Counted before removal: includes the item when it is pinned,
        // excludes it otherwise.
        let boundary = self.pinned_count();
        let mut item = self.items.remove(index);
        if item.is_pinned {
            item.is_pinned = false;
            self.items.insert(boundary - 1, item);
        } else {
            item.is_pinned = true;
            self.items.insert(boundary, item);
        }
        true
    }

    /// Trim from the tail by position until the list fits.
    ///
    /// Pin status is not consulted: when the pinned prefix alone reaches the
    /// cap, the overflow (including pinned items) is dropped.
    fn evict_overflow(&mut self) {
        if self.items.len() > self.limits.max_items {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                evicted = self.items.len() - self.limits.max_items,
                "history over capacity, trimming tail"
            );
            self.items.truncate(self.limits.max_items);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits(max_items: usize) -> HistoryLimits {
        HistoryLimits {
            max_items,
            max_text_chars: 50_000,
        }
    }

    fn list_of(entries: &[(&str, bool)]) -> HistoryList {
        let mut list = HistoryList::new(limits(100));
        list.items = entries
            .iter()
            .map(|(text, pinned)| HistoryItem {
                text: text.to_string(),
                is_pinned: *pinned,
            })
            .collect();
        list
    }

    fn texts(list: &HistoryList) -> Vec<&str> {
        list.items().iter().map(|item| item.text.as_str()).collect()
    }

    fn assert_invariants(list: &HistoryList) {
        let mut seen = std::collections::HashSet::new();
        for item in list.items() {
            assert!(seen.insert(item.text.clone()), "duplicate text {:?}", item.text);
        }
        let boundary = list.pinned_count();
        assert!(list.items()[boundary..].iter().all(|item| !item.is_pinned));
        assert!(list.len() <= list.limits().max_items);
    }

    #[test]
    fn new_text_goes_to_top_of_unpinned_suffix() {
        let mut list = list_of(&[("p", true), ("a", false)]);

        assert_eq!(list.place_at_top("b"), Placement::Inserted);

        assert_eq!(texts(&list), vec!["p", "b", "a"]);
        assert!(!list.get(1).unwrap().is_pinned);
        assert_invariants(&list);
    }

    #[test]
    fn recopied_text_is_promoted_not_duplicated() {
        let mut list = HistoryList::new(limits(100));
        list.place_at_top("x");
        list.place_at_top("y");

        assert_eq!(list.place_at_top("x"), Placement::Promoted);

        assert_eq!(texts(&list), vec!["x", "y"]);
        assert_invariants(&list);
    }

    #[test]
    fn top_item_is_left_alone() {
        let mut list = list_of(&[("p", true), ("a", false), ("b", false)]);

        assert_eq!(list.place_at_top("a"), Placement::Unchanged);
        assert_eq!(texts(&list), vec!["p", "a", "b"]);
    }

    #[test]
    fn pinned_item_is_not_reordered() {
        let mut list = list_of(&[("p", true), ("q", true), ("a", false)]);

        assert_eq!(list.place_at_top("p"), Placement::Unchanged);
        assert_eq!(texts(&list), vec!["p", "q", "a"]);
    }

    #[test]
    fn placing_same_text_twice_is_idempotent() {
        let mut list = list_of(&[("a", false), ("b", false)]);
        list.place_at_top("c");
        let once = list.clone();

        assert_eq!(list.place_at_top("c"), Placement::Unchanged);
        assert_eq!(list, once);
    }

    #[test]
    fn insert_evicts_oldest_unpinned_from_tail() {
        let mut list = HistoryList::new(limits(3));
        for text in ["a", "b", "c", "d"] {
            list.place_at_top(text);
        }

        assert_eq!(texts(&list), vec!["d", "c", "b"]);
        assert_invariants(&list);
    }

    #[test]
    fn eviction_ignores_pin_status_when_pins_fill_capacity() {
        let mut list = HistoryList::new(limits(3));
        list.items = vec![
            HistoryItem::pinned("p1"),
            HistoryItem::pinned("p2"),
            HistoryItem::pinned("p3"),
        ];

        // The newcomer lands after the pinned prefix and is the tail, so it is
        // trimmed straight away.
        assert_eq!(list.place_at_top("new"), Placement::Inserted);

        assert_eq!(texts(&list), vec!["p1", "p2", "p3"]);
        assert_eq!(list.index_of("new"), None);
    }

    #[test]
    fn eviction_can_drop_pinned_items_beyond_capacity() {
        let mut list = HistoryList::new(limits(2));
        list.items = vec![
            HistoryItem::pinned("p1"),
            HistoryItem::pinned("p2"),
            HistoryItem::pinned("p3"),
        ];

        list.place_at_top("new");

        assert_eq!(texts(&list), vec!["p1", "p2"]);
        assert!(list.items().iter().all(|item| item.is_pinned));
    }

    #[test]
    fn over_length_text_is_truncated_and_matched_again() {
        let mut list = HistoryList::new(HistoryLimits {
            max_items: 100,
            max_text_chars: 8,
        });
        let long = "abcdefghijklmnop";

        assert_eq!(list.place_at_top(long), Placement::Inserted);
        assert_eq!(list.get(0).unwrap().text, "abcdefgh");

        assert_eq!(list.place_at_top(long), Placement::Unchanged);
        assert_eq!(list.len(), 1);
        assert_eq!(list.index_of(long), Some(0));
    }

    #[test]
    fn pin_moves_item_to_tail_of_pinned_prefix() {
        let mut list = list_of(&[("a", false), ("b", false), ("c", false)]);

        assert!(list.toggle_pinned_at(1));

        assert_eq!(texts(&list), vec!["b", "a", "c"]);
        assert!(list.get(0).unwrap().is_pinned);
        assert!(!list.get(1).unwrap().is_pinned);
        assert_invariants(&list);
    }

    #[test]
    fn newest_pin_sits_last_in_prefix() {
        let mut list = list_of(&[("p", true), ("a", false), ("b", false)]);

        assert!(list.toggle_pinned_at(2));

        assert_eq!(texts(&list), vec!["p", "b", "a"]);
        assert_eq!(list.pinned_count(), 2);
    }

    #[test]
    fn unpin_lone_pinned_item_keeps_position() {
        let mut list = list_of(&[("p", true), ("a", false), ("b", false)]);

        assert!(list.toggle_pinned_at(0));

        assert_eq!(texts(&list), vec!["p", "a", "b"]);
        assert!(!list.get(0).unwrap().is_pinned);
        assert_eq!(list.pinned_count(), 0);
    }

    #[test]
    fn unpin_moves_item_to_head_of_unpinned_suffix() {
        let mut list = list_of(&[("p", true), ("q", true), ("r", true), ("a", false)]);

        assert!(list.toggle_pinned_at(0));

        assert_eq!(texts(&list), vec!["q", "r", "p", "a"]);
        assert_eq!(list.pinned_count(), 2);
        assert_invariants(&list);
    }

    #[test]
    fn toggle_out_of_range_is_rejected() {
        let mut list = list_of(&[("a", false)]);
        let before = list.clone();

        assert!(!list.toggle_pinned_at(1));
        assert_eq!(list, before);
    }

    #[test]
    fn remove_at_length_fails_without_mutation() {
        let mut list = list_of(&[("a", false), ("b", false)]);
        let before = list.clone();

        assert!(list.remove_at(2).is_none());
        assert_eq!(list, before);

        assert_eq!(list.remove_at(0).map(|item| item.text), Some("a".to_string()));
        assert_eq!(texts(&list), vec!["b"]);
    }

    #[test]
    fn index_of_is_exact_match() {
        let list = list_of(&[("Hello", false), ("hello ", false)]);

        assert_eq!(list.index_of("Hello"), Some(0));
        assert_eq!(list.index_of("hello "), Some(1));
        assert_eq!(list.index_of("hello"), None);
    }

    #[test]
    fn mixed_operations_keep_invariants() {
        let mut list = HistoryList::new(limits(5));
        for round in 0..40 {
            let text = format!("t{}", round % 9);
            list.place_at_top(&text);
            if round % 4 == 0 {
                list.toggle_pinned_at(round % (list.len() + 1));
            }
            if round % 7 == 0 {
                list.remove_at(round % 3);
            }
            assert_invariants(&list);
        }
    }
}
