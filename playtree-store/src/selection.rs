// Copyright 2026 Playtree Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Selection cursor state.

use crate::snapshot::SelectionSnapshot;

/// Cursor over the list-of-lists plus the transient pending marker.
///
/// Both coordinates are replaced together by
/// [`RootStore::set_selection`](crate::RootStore::set_selection); the pending
/// marker is cleared as a reaction to every cursor change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    list: usize,
    item: usize,
    pending_id: Option<String>,
}

impl SelectionState {
    #[must_use]
    pub fn from_snapshot(snapshot: SelectionSnapshot) -> Self {
        Self {
            list: snapshot.list,
            item: snapshot.item,
            pending_id: snapshot.pending_id,
        }
    }

    /// Index of the currently selected list.
    #[must_use]
    pub const fn list(&self) -> usize {
        self.list
    }

    /// Index of the currently selected item within the selected list.
    #[must_use]
    pub const fn item(&self) -> usize {
        self.item
    }

    /// The staged pending marker, if any.
    #[must_use]
    pub fn pending_id(&self) -> Option<&str> {
        self.pending_id.as_deref()
    }

    pub(crate) fn set_cursor(&mut self, list: usize, item: usize) {
        self.list = list;
        self.item = item;
    }

    pub(crate) fn set_pending_id(&mut self, id: String) {
        self.pending_id = Some(id);
    }

    pub(crate) fn clear_pending_id(&mut self) {
        self.pending_id = None;
    }

    #[must_use]
    pub fn snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            list: self.list,
            item: self.item,
            pending_id: self.pending_id.clone(),
        }
    }
}
