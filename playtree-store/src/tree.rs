// Copyright 2026 Playtree Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Live nodes of the selection tree.
//!
//! Nodes are built once from snapshots and are immutable afterwards; all
//! mutable state lives in the selection cursor on the root store.

use crate::snapshot::{ItemSnapshot, ListSnapshot};

/// Leaf node: one selectable item, immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemNode {
    id: String,
    autoplay: bool,
}

impl ItemNode {
    #[must_use]
    pub fn from_snapshot(snapshot: ItemSnapshot) -> Self {
        Self {
            id: snapshot.id,
            autoplay: snapshot.autoplay,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub const fn autoplay(&self) -> bool {
        self.autoplay
    }

    #[must_use]
    pub fn snapshot(&self) -> ItemSnapshot {
        ItemSnapshot {
            id: self.id.clone(),
            autoplay: self.autoplay,
        }
    }
}

/// A named ordered group of [`ItemNode`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListNode {
    id: String,
    items: Vec<ItemNode>,
}

impl ListNode {
    #[must_use]
    pub fn from_snapshot(snapshot: ListSnapshot) -> Self {
        Self {
            id: snapshot.id,
            items: snapshot
                .items
                .into_iter()
                .map(ItemNode::from_snapshot)
                .collect(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn items(&self) -> &[ItemNode] {
        &self.items
    }

    #[must_use]
    pub fn snapshot(&self) -> ListSnapshot {
        ListSnapshot {
            id: self.id.clone(),
            items: self.items.iter().map(ItemNode::snapshot).collect(),
        }
    }
}
