//! Character-level substring matching used by history search.
//!
//! Offsets are character indices, not byte indices, so they line up with the
//! caret position an editor tracks.

/// Simple case fold of a single character.
fn fold(ch: char) -> char {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => ch,
    }
}

pub fn chars_equal(a: char, b: char, fold_case: bool) -> bool {
    a == b || (fold_case && fold(a) == fold(b))
}

fn matches_at(haystack: &[char], needle: &[char], at: usize, fold_case: bool) -> bool {
    needle
        .iter()
        .zip(&haystack[at..])
        .all(|(n, h)| chars_equal(*h, *n, fold_case))
}

/// First offset where `needle` occurs in `haystack`.
pub fn index_of(haystack: &[char], needle: &[char], fold_case: bool) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    (0..=haystack.len() - needle.len()).find(|&at| matches_at(haystack, needle, at, fold_case))
}

/// Last offset where `needle` occurs in `haystack`.
pub fn last_index_of(haystack: &[char], needle: &[char], fold_case: bool) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    (0..=haystack.len() - needle.len())
        .rev()
        .find(|&at| matches_at(haystack, needle, at, fold_case))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn forward_and_backward_pick_opposite_ends() {
        let hay = chars("foo bar foo");
        assert_eq!(index_of(&hay, &chars("foo"), false), Some(0));
        assert_eq!(last_index_of(&hay, &chars("foo"), false), Some(8));
    }

    #[test]
    fn fold_is_opt_in() {
        let hay = chars("git Commit");
        assert_eq!(index_of(&hay, &chars("commit"), false), None);
        assert_eq!(index_of(&hay, &chars("COMMIT"), true), Some(4));
        assert_eq!(last_index_of(&hay, &chars("GIT"), true), Some(0));
    }

    #[test]
    fn offsets_count_characters() {
        let hay = chars("échø ö");
        assert_eq!(index_of(&hay, &chars("Ö"), true), Some(5));
        assert_eq!(last_index_of(&hay, &chars("HØ"), true), Some(2));
    }

    #[test]
    fn empty_needle_matches_at_both_ends() {
        let hay = chars("abc");
        assert_eq!(index_of(&hay, &[], false), Some(0));
        assert_eq!(last_index_of(&hay, &[], false), Some(3));
    }

    #[test]
    fn needle_longer_than_haystack() {
        assert_eq!(index_of(&chars("ab"), &chars("abc"), true), None);
        assert_eq!(last_index_of(&[], &chars("a"), true), None);
    }
}
