use parking_lot::Mutex;
use playtree_store::{RootStore, SelectionSnapshot};
use playtree_test_utils::default_tree;
use std::sync::Arc;

#[test]
fn set_selection_replaces_both_coordinates() {
    let mut root = RootStore::from_snapshot(default_tree());

    root.set_selection(1, 2);

    assert_eq!(root.selection().list(), 1);
    assert_eq!(root.selection().item(), 2);
}

#[test]
fn set_selection_clears_a_staged_pending_id() {
    let mut root = RootStore::from_snapshot(default_tree());
    root.set_pending_id("1-2");
    assert_eq!(root.selection().pending_id(), Some("1-2"));

    root.set_selection(1, 0);

    assert_eq!(root.selection().pending_id(), None);
}

#[test]
fn set_selection_clears_pending_id_even_when_the_cursor_does_not_move() {
    let mut root = RootStore::from_snapshot(default_tree());
    root.set_pending_id("0-0");

    root.set_selection(0, 0);

    assert_eq!(root.selection().pending_id(), None);
}

#[test]
fn pending_id_can_be_staged_and_cleared_without_moving_the_cursor() {
    let mut root = RootStore::from_snapshot(default_tree());

    root.set_pending_id("0-2");
    assert_eq!(root.selection().pending_id(), Some("0-2"));
    assert_eq!(root.selection().list(), 0);
    assert_eq!(root.selection().item(), 0);

    root.clear_pending_id();
    assert_eq!(root.selection().pending_id(), None);
}

#[test]
fn observers_see_each_cursor_change_synchronously() {
    let mut root = RootStore::from_snapshot(default_tree());
    let seen: Arc<Mutex<Vec<SelectionSnapshot>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    root.on_selection_change(move |snapshot| sink.lock().push(snapshot.clone()));

    root.set_selection(1, 0);
    root.set_selection(1, 2);

    let seen = seen.lock();
    assert_eq!(seen.len(), 2);
    assert_eq!((seen[0].list, seen[0].item), (1, 0));
    assert_eq!((seen[1].list, seen[1].item), (1, 2));
    // Observers always see the cursor change as a single atomic update
    assert!(seen.iter().all(|s| s.pending_id.is_none()));
}

#[test]
fn pending_id_changes_do_not_fire_observers() {
    let mut root = RootStore::from_snapshot(default_tree());
    let count = Arc::new(Mutex::new(0usize));
    let sink = count.clone();
    root.on_selection_change(move |_| *sink.lock() += 1);

    root.set_pending_id("0-1");
    root.clear_pending_id();

    assert_eq!(*count.lock(), 0);
}

#[test]
fn every_registered_observer_is_notified() {
    let mut root = RootStore::from_snapshot(default_tree());
    let first = Arc::new(Mutex::new(0usize));
    let second = Arc::new(Mutex::new(0usize));
    let a = first.clone();
    let b = second.clone();
    root.on_selection_change(move |_| *a.lock() += 1);
    root.on_selection_change(move |_| *b.lock() += 1);

    root.set_selection(0, 1);

    assert_eq!(*first.lock(), 1);
    assert_eq!(*second.lock(), 1);
}
