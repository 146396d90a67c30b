use crate::history::store::HistoryStore;
use crate::text::{index_of, last_index_of};

/// Where a search matched: the entry index and the character offset within
/// that entry's visible text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit {
    pub index: usize,
    pub offset: usize,
}

impl HistoryStore {
    /// Searches from the cursor toward older entries.
    ///
    /// In the cursor's own entry only the first `start` characters are
    /// searched, i.e. the text left of the caret. Within an entry the match
    /// closest to the cutoff wins. A new search widens the window by the
    /// pattern length so the match under the caret is found again.
    ///
    /// The store is not modified; move the cursor with
    /// [`HistoryStore::move_to`].
    pub fn find_backward(
        &self,
        is_new_search: bool,
        pattern: &str,
        start: usize,
    ) -> Option<SearchHit> {
        let cursor = self.cursor?;
        let needle: Vec<char> = pattern.chars().collect();
        let fold = self.config.search_fold;
        let mut start = start;

        for index in (0..=cursor).rev() {
            let mut item: Vec<char> = self.entries[index].visible(self.version).chars().collect();
            if is_new_search {
                start = start.saturating_add(needle.len());
            }
            if index == cursor && item.len() >= start {
                item.truncate(start);
            }
            if let Some(offset) = last_index_of(&item, &needle, fold) {
                return Some(SearchHit { index, offset });
            }
        }

        None
    }

    /// Searches from the cursor toward newer entries.
    ///
    /// In the cursor's own entry the text before `start` is skipped, and the
    /// entry is passed over entirely when nothing remains. Offsets are always
    /// relative to the full entry text.
    pub fn find_forward(
        &self,
        is_new_search: bool,
        pattern: &str,
        start: usize,
    ) -> Option<SearchHit> {
        let cursor = self.cursor?;
        let needle: Vec<char> = pattern.chars().collect();
        let fold = self.config.search_fold;
        let mut start = start;

        for index in cursor..self.entries.len() {
            let item: Vec<char> = self.entries[index].visible(self.version).chars().collect();
            if is_new_search {
                start = start.saturating_sub(needle.len());
            }

            let (haystack, base) = if index == cursor {
                if item.len() <= start {
                    continue;
                }
                (&item[start..], start)
            } else {
                (&item[..], 0)
            };

            if let Some(offset) = index_of(haystack, &needle, fold) {
                return Some(SearchHit {
                    index,
                    offset: offset + base,
                });
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::SearchHit;
    use crate::config::HistoryConfig;
    use crate::history::store::HistoryStore;

    fn store_with(lines: &[&str], fold: bool) -> HistoryStore {
        let mut store = HistoryStore::new(HistoryConfig::default().with_search_fold(fold));
        store.init().expect("memory-only init cannot fail");
        for line in lines {
            store.new_line(line).expect("memory-only commit cannot fail");
        }
        store
    }

    #[test]
    fn backward_searches_left_of_caret_in_cursor_entry() {
        let mut store = store_with(&["cat a"], false);
        store.update("cat b cat c", false).unwrap();

        // Caret after "cat b ": only "cat b " is searched in the current line.
        let hit = store.find_backward(false, "cat", 6);
        assert_eq!(hit, Some(SearchHit { index: 1, offset: 0 }));

        let hit = store.find_backward(false, "cat", 11);
        assert_eq!(hit, Some(SearchHit { index: 1, offset: 6 }));
    }

    #[test]
    fn backward_new_search_refinds_match_under_caret() {
        let mut store = store_with(&[], false);
        store.update("grep foo", false).unwrap();

        assert_eq!(store.find_backward(false, "foo", 5), None);
        assert_eq!(
            store.find_backward(true, "foo", 5),
            Some(SearchHit { index: 0, offset: 5 })
        );
    }

    #[test]
    fn forward_offsets_are_relative_to_full_text() {
        let mut store = store_with(&["ab ab", "zz ab"], false);
        store.move_to(0);

        assert_eq!(
            store.find_forward(false, "ab", 1),
            Some(SearchHit { index: 0, offset: 3 })
        );
        assert_eq!(
            store.find_forward(false, "ab", 5),
            Some(SearchHit { index: 1, offset: 3 })
        );
    }

    #[test]
    fn forward_new_search_shrinks_window() {
        let mut store = store_with(&["xy xy"], false);
        store.move_to(0);

        assert_eq!(
            store.find_forward(true, "xy", 5),
            Some(SearchHit { index: 0, offset: 3 })
        );
        assert_eq!(
            store.find_forward(true, "xy", 1),
            Some(SearchHit { index: 0, offset: 0 })
        );
    }

    #[test]
    fn search_sees_fresh_drafts_not_stale_ones() {
        let mut store = store_with(&["alpha"], false);
        store.prev();
        store.update("beta", false).unwrap();
        store.next();

        assert_eq!(
            store.find_backward(false, "beta", 0),
            Some(SearchHit { index: 0, offset: 0 })
        );
        assert_eq!(store.find_backward(false, "alpha", 0), None);

        store.revert();
        assert_eq!(
            store.find_backward(false, "alpha", 0),
            Some(SearchHit { index: 0, offset: 0 })
        );
    }

    #[test]
    fn new_search_with_huge_caret_does_not_overflow() {
        let store = store_with(&["needle"], false);

        assert_eq!(
            store.find_backward(true, "needle", usize::MAX),
            Some(SearchHit { index: 0, offset: 0 })
        );
        assert_eq!(store.find_forward(true, "needle", usize::MAX), None);
    }

    #[test]
    fn search_without_cursor_finds_nothing() {
        let store = HistoryStore::new(HistoryConfig::default());
        assert_eq!(store.find_backward(true, "a", 0), None);
        assert_eq!(store.find_forward(true, "a", 0), None);
    }

    #[test]
    fn search_does_not_move_cursor() {
        let store = store_with(&["one", "two"], true);
        let before = store.cursor();
        let _ = store.find_backward(true, "o", 0);
        let _ = store.find_forward(true, "o", 0);
        assert_eq!(store.cursor(), before);
    }
}
