// Copyright 2026 Playtree Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Playtree
//!
//! A reactive selection-tree and service-event library for carousel-style
//! UI state.
//!
//! ## Overview
//!
//! Playtree models two decoupled concerns:
//!
//! - **Service events**: asynchronous services report each operation as a
//!   `pending` event followed by exactly one terminal event on a hot,
//!   multicast [`Subject`]. Consumers subscribe with a predicate and react
//!   independently of the caller awaiting the operation itself.
//! - **Selection tree**: an ordered list-of-lists of playable items with a
//!   single cursor. Navigation queries treat an out-of-bounds cursor as a
//!   recoverable "no result"; cursor mutations notify registered observers
//!   synchronously.
//!
//! ## Quick Start
//!
//! ```
//! use playtree::prelude::*;
//!
//! let snapshot = RootSnapshot::from_json(
//!     r#"{
//!         "lists": [
//!             {"id": "0", "items": [
//!                 {"id": "0-0", "autoplay": true},
//!                 {"id": "0-1", "autoplay": true}
//!             ]}
//!         ]
//!     }"#,
//! ).unwrap();
//!
//! let mut root = RootStore::from_snapshot(snapshot);
//! assert_eq!(root.active_item().unwrap().id, "0-0");
//! assert_eq!(root.next_playable_item().unwrap().id, "0-1");
//!
//! root.set_selection(0, 1);
//! assert!(root.next_playable_item().is_none());
//! ```

// Re-export core types
pub use playtree_core::{
    EventReporter, EventStatus, PlaytreeError, Result, ServiceEvent, Subject, SubjectStream,
};

// Re-export the stores
pub use playtree_store::{
    notify_on_terminal, ItemNode, ItemSnapshot, ListNode, ListSnapshot, Notification,
    NotificationStore, Reminder, RemindersService, RemindersStore, RootSnapshot, RootStore,
    SelectionObserver, SelectionSnapshot, SelectionState, SharedNotificationStore,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use playtree_core::{
        EventReporter, EventStatus, PlaytreeError, Result, ServiceEvent, Subject,
    };
    pub use playtree_store::{
        notify_on_terminal, ItemSnapshot, ListSnapshot, NotificationStore, Reminder,
        RemindersService, RemindersStore, RootSnapshot, RootStore, SelectionSnapshot,
        SharedNotificationStore,
    };
}
