// Copyright 2026 Playtree Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod notifications;
pub mod reminders;
pub mod root;
pub mod selection;
pub mod snapshot;
pub mod tree;

pub use self::notifications::{
    notify_on_terminal, Notification, NotificationStore, SharedNotificationStore,
};
pub use self::reminders::{Reminder, RemindersService, RemindersStore};
pub use self::root::{RootStore, SelectionObserver};
pub use self::selection::SelectionState;
pub use self::snapshot::{ItemSnapshot, ListSnapshot, RootSnapshot, SelectionSnapshot};
pub use self::tree::{ItemNode, ListNode};
