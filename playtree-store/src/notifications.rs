// Copyright 2026 Playtree Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Notification store and the event-to-notification bridge.
//!
//! The notification store knows nothing about services; it only appends
//! whatever it is shown. [`notify_on_terminal`] is the decoupling glue: it
//! subscribes to a service's event stream with a terminal-status filter and
//! forwards each matching event into a shared store from a spawned task.

use futures::StreamExt;
use parking_lot::Mutex;
use playtree_core::{EventStatus, Result, ServiceEvent, Subject};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Record appended to the notification list when a matching event arrives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub message_key: String,
    pub status: EventStatus,
    pub date: u64,
}

impl From<ServiceEvent> for Notification {
    fn from(event: ServiceEvent) -> Self {
        Self {
            message_key: event.message_key,
            status: event.status,
            date: event.date,
        }
    }
}

/// Append-only list of notifications.
#[derive(Debug, Default)]
pub struct NotificationStore {
    notifications: Vec<Notification>,
}

impl NotificationStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a notification to the list.
    pub fn show_notification(&mut self, notification: Notification) {
        debug!(message_key = %notification.message_key, "showing notification");
        self.notifications.push(notification);
    }

    /// The notifications shown so far, in arrival order.
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }
}

/// A notification store shared between the owner and the event bridge task.
pub type SharedNotificationStore = Arc<Mutex<NotificationStore>>;

/// Connects a service's event stream to a notification store.
///
/// Subscribes with a terminal-status filter and spawns a task that appends a
/// [`Notification`] for every `success` or `error` event. The task ends when
/// the subject is closed.
///
/// # Errors
///
/// Returns [`PlaytreeError::SubjectClosed`](playtree_core::PlaytreeError::SubjectClosed)
/// if the subject has already been closed.
pub fn notify_on_terminal(
    events: &Subject<ServiceEvent>,
    store: SharedNotificationStore,
) -> Result<JoinHandle<()>> {
    let mut terminals = events.subscribe_filtered(|event| event.is_terminal())?;

    Ok(tokio::spawn(async move {
        while let Some(event) = terminals.next().await {
            store.lock().show_notification(Notification::from(event));
        }
    }))
}
