// Copyright 2026 Playtree Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Plain-data snapshots of the selection tree.
//!
//! Snapshots are the construction input and read-back output of every store:
//! a tree is built once from a [`RootSnapshot`] and can be read back as one at
//! any time. Snapshots are structural and lossless; queries return owned
//! copies decoupled from the live tree.

use playtree_core::Result;
use serde::{Deserialize, Serialize};

/// Leaf of the tree: one selectable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSnapshot {
    pub id: String,
    /// Marks the item eligible for automatic advancement.
    pub autoplay: bool,
}

impl ItemSnapshot {
    #[must_use]
    pub fn new(id: impl Into<String>, autoplay: bool) -> Self {
        Self {
            id: id.into(),
            autoplay,
        }
    }
}

/// A named ordered group of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSnapshot {
    pub id: String,
    #[serde(default)]
    pub items: Vec<ItemSnapshot>,
}

/// Cursor into the list-of-lists plus the transient pending marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SelectionSnapshot {
    #[serde(default)]
    pub list: usize,
    #[serde(default)]
    pub item: usize,
    /// Selection awaiting confirmation; cleared on any real cursor change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_id: Option<String>,
}

/// Full tree state: the lists and the current selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RootSnapshot {
    #[serde(default)]
    pub lists: Vec<ListSnapshot>,
    #[serde(default)]
    pub selection: SelectionSnapshot,
}

impl RootSnapshot {
    /// Parse a snapshot from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns [`PlaytreeError::SnapshotError`](playtree_core::PlaytreeError::SnapshotError)
    /// if the payload is not a valid tree snapshot.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the snapshot to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`PlaytreeError::SnapshotError`](playtree_core::PlaytreeError::SnapshotError)
    /// if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
