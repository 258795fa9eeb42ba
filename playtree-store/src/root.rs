// Copyright 2026 Playtree Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Root store: the selection tree and its navigation queries.
//!
//! A [`RootStore`] owns an ordered sequence of lists and one selection
//! cursor. Navigation queries ([`active_item`](RootStore::active_item),
//! [`next_playable_item`](RootStore::next_playable_item)) treat any
//! out-of-bounds cursor as a recoverable "no result", never a failure.
//! Cursor mutations notify registered observers synchronously before the
//! mutating call returns.
//!
//! ## Example
//!
//! ```
//! use playtree_store::{RootSnapshot, RootStore};
//!
//! let snapshot = RootSnapshot::from_json(
//!     r#"{"lists":[{"id":"0","items":[{"id":"0-0","autoplay":true}]}]}"#,
//! ).unwrap();
//! let root = RootStore::from_snapshot(snapshot);
//!
//! assert_eq!(root.active_item().unwrap().id, "0-0");
//! assert!(root.next_playable_item().is_none());
//! ```

use crate::selection::SelectionState;
use crate::snapshot::{ItemSnapshot, RootSnapshot, SelectionSnapshot};
use crate::tree::ListNode;
use tracing::debug;

/// Callback invoked synchronously after each applied cursor change.
pub type SelectionObserver = Box<dyn FnMut(&SelectionSnapshot) + Send>;

/// Owns the lists and the selection cursor.
pub struct RootStore {
    lists: Vec<ListNode>,
    selection: SelectionState,
    observers: Vec<SelectionObserver>,
}

impl RootStore {
    /// Builds the live tree from a plain snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: RootSnapshot) -> Self {
        Self {
            lists: snapshot
                .lists
                .into_iter()
                .map(ListNode::from_snapshot)
                .collect(),
            selection: SelectionState::from_snapshot(snapshot.selection),
            observers: Vec::new(),
        }
    }

    /// The lists of the tree, in order.
    #[must_use]
    pub fn lists(&self) -> &[ListNode] {
        &self.lists
    }

    /// The current selection state.
    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// The item at the current cursor, or `None` if either index is out of
    /// range for the current tree shape (including an empty tree).
    ///
    /// An invalid cursor is a normal, expected state for this read-only
    /// query; it is logged at debug level and never surfaced as an error.
    #[must_use]
    pub fn active_item(&self) -> Option<ItemSnapshot> {
        let list = self.selection.list();
        let item = self.selection.item();

        match self.lists.get(list).and_then(|l| l.items().get(item)) {
            Some(node) => Some(node.snapshot()),
            None => {
                debug!(list, item, "cursor out of bounds, no active item");
                None
            }
        }
    }

    /// Forward scan for the next item with the autoplay flag set.
    ///
    /// Within the current list only items strictly after the current item
    /// index are examined; every subsequent list is examined from index 0.
    /// The scan never wraps back to earlier lists or earlier items. Returns
    /// `None` when no playable item exists through the end of the last list.
    #[must_use]
    pub fn next_playable_item(&self) -> Option<ItemSnapshot> {
        let current_list = self.selection.list();
        let current_item = self.selection.item();

        for (li, list) in self.lists.iter().enumerate().skip(current_list) {
            let start = if li > current_list {
                0
            } else {
                // An out-of-range item index must stay "no result", not wrap
                current_item.saturating_add(1)
            };
            for node in list.items().iter().skip(start) {
                if node.autoplay() {
                    return Some(node.snapshot());
                }
            }
        }

        debug!(
            list = current_list,
            item = current_item,
            "no playable item after cursor"
        );
        None
    }

    /// Replaces the cursor atomically.
    ///
    /// Both coordinates are updated together; any staged pending marker is
    /// cleared as a reaction to the cursor change, regardless of its prior
    /// value. Registered observers are then notified synchronously, before
    /// this call returns.
    pub fn set_selection(&mut self, list: usize, item: usize) {
        self.selection.set_cursor(list, item);
        self.selection.clear_pending_id();

        let snapshot = self.selection.snapshot();
        for observer in &mut self.observers {
            observer(&snapshot);
        }
    }

    /// Stages a pending marker without touching the cursor.
    ///
    /// Does not fire selection observers.
    pub fn set_pending_id(&mut self, id: impl Into<String>) {
        self.selection.set_pending_id(id.into());
    }

    /// Clears the pending marker without touching the cursor.
    pub fn clear_pending_id(&mut self) {
        self.selection.clear_pending_id();
    }

    /// Registers a callback invoked synchronously after each applied cursor
    /// change with the new selection snapshot.
    ///
    /// Observers form a fixed list; there is no deregistration and no
    /// reentrancy guarantee.
    pub fn on_selection_change<F>(&mut self, observer: F)
    where
        F: FnMut(&SelectionSnapshot) + Send + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Reads the whole tree back as a plain snapshot.
    #[must_use]
    pub fn snapshot(&self) -> RootSnapshot {
        RootSnapshot {
            lists: self.lists.iter().map(ListNode::snapshot).collect(),
            selection: self.selection.snapshot(),
        }
    }
}

impl std::fmt::Debug for RootStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RootStore")
            .field("lists", &self.lists)
            .field("selection", &self.selection)
            .field("observers", &self.observers.len())
            .finish()
    }
}
