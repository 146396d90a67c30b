mod support;

use tape_history::{HistoryConfig, SearchHit};

use support::memory_store;

#[test]
fn backward_search_walks_toward_older_matches() {
    let (mut store, _log) = memory_store(&["foo1", "bar", "foo2"], HistoryConfig::default());
    let typed = store.visible_text(store.cursor().unwrap()).unwrap();

    let first = store
        .find_backward(true, "foo", typed.chars().count())
        .expect("foo2 should match");
    assert_eq!(first, SearchHit { index: 2, offset: 0 });
    assert_eq!(store.move_to(first.index).as_deref(), Some("foo2"));

    let second = store
        .find_backward(false, "foo", first.offset)
        .expect("foo1 should match");
    assert_eq!(second, SearchHit { index: 0, offset: 0 });
    assert_eq!(store.move_to(second.index).as_deref(), Some("foo1"));

    assert_eq!(store.find_backward(false, "foo", second.offset), None);
}

#[test]
fn forward_search_walks_toward_newer_matches() {
    let (mut store, _log) = memory_store(&["foo1", "bar", "foo2"], HistoryConfig::default());
    store.move_to(0);

    let first = store.find_forward(false, "foo", 0).expect("foo1 should match");
    assert_eq!(first, SearchHit { index: 0, offset: 0 });

    let next = store
        .find_forward(false, "foo", first.offset + 1)
        .expect("foo2 should match");
    assert_eq!(next, SearchHit { index: 2, offset: 0 });
}

#[test]
fn fold_setting_controls_case_sensitivity() {
    let (folded, _log) = memory_store(&["foo2"], HistoryConfig::default().with_search_fold(true));
    assert_eq!(
        folded.find_backward(true, "FOO", 0),
        Some(SearchHit { index: 0, offset: 0 })
    );

    let (exact, _log) = memory_store(&["foo2"], HistoryConfig::default().with_search_fold(false));
    assert_eq!(exact.find_backward(true, "FOO", 0), None);

    let mut exact = exact;
    exact.move_to(0);
    assert_eq!(exact.find_forward(true, "FOO", 0), None);
    assert_eq!(
        exact.find_forward(true, "foo", 0),
        Some(SearchHit { index: 0, offset: 0 })
    );
}

#[test]
fn backward_match_is_rightmost_before_cutoff() {
    let (store, _log) = memory_store(&["git add && git push"], HistoryConfig::default());

    assert_eq!(
        store.find_backward(false, "git", 0),
        Some(SearchHit { index: 0, offset: 11 })
    );
}
