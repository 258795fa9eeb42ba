// Copyright 2026 Playtree Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Canonical carousel fixtures.
//!
//! The default tree has two lists of three items each; item `1-1` is the only
//! one with `autoplay` off. The cursor starts at `(0, 0)`.

use playtree_store::{ItemSnapshot, ListSnapshot, RootSnapshot, SelectionSnapshot};

/// The default two-list carousel tree with the cursor at `(0, 0)`.
#[must_use]
pub fn default_tree() -> RootSnapshot {
    RootSnapshot {
        lists: vec![
            ListSnapshot {
                id: "0".to_string(),
                items: vec![
                    ItemSnapshot::new("0-0", true),
                    ItemSnapshot::new("0-1", true),
                    ItemSnapshot::new("0-2", true),
                ],
            },
            ListSnapshot {
                id: "1".to_string(),
                items: vec![
                    ItemSnapshot::new("1-0", true),
                    ItemSnapshot::new("1-1", false),
                    ItemSnapshot::new("1-2", true),
                ],
            },
        ],
        selection: SelectionSnapshot::default(),
    }
}

/// The default tree with the cursor moved to `(list, item)`.
#[must_use]
pub fn default_tree_with_selection(list: usize, item: usize) -> RootSnapshot {
    RootSnapshot {
        selection: SelectionSnapshot {
            list,
            item,
            pending_id: None,
        },
        ..default_tree()
    }
}

/// A tree with no lists at all.
#[must_use]
pub fn empty_tree() -> RootSnapshot {
    RootSnapshot::default()
}
