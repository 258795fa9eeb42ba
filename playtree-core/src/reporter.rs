// Copyright 2026 Playtree Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Per-service event reporter.
//!
//! An [`EventReporter`] owns the [`Subject`] on which a service publishes its
//! lifecycle events. Service implementations call [`pending`](EventReporter::pending)
//! synchronously when an operation starts and exactly one of
//! [`success`](EventReporter::success) / [`error`](EventReporter::error) once
//! the underlying future settles, strictly after any caller-observable
//! resolution of that future.
//!
//! ## Example
//!
//! ```
//! use playtree_core::{EventReporter, EventStatus};
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let reporter = EventReporter::new("reminders");
//! let mut stream = reporter.events().subscribe().unwrap();
//!
//! reporter.pending("load").unwrap();
//! reporter.success("load", None).unwrap();
//!
//! assert_eq!(stream.next().await.unwrap().status, EventStatus::Pending);
//! assert_eq!(stream.next().await.unwrap().status, EventStatus::Success);
//! # }
//! ```

use crate::{EventStatus, Result, ServiceEvent, Subject};
use tracing::trace;

/// Publishes lifecycle events for one named service.
///
/// Cheap to clone; all clones publish to the same subject. A terminal `error`
/// event is a domain-level report and does not close the subject, so a
/// service can keep reporting subsequent operations on the same stream.
#[derive(Clone)]
pub struct EventReporter {
    service: String,
    subject: Subject<ServiceEvent>,
}

impl EventReporter {
    /// Creates a reporter for the given service name with a fresh subject.
    #[must_use]
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            subject: Subject::new(),
        }
    }

    /// Handle to the subject this reporter publishes on.
    ///
    /// Subscribe here to observe the service's lifecycle events.
    #[must_use]
    pub fn events(&self) -> &Subject<ServiceEvent> {
        &self.subject
    }

    /// Name of the service this reporter publishes for.
    #[must_use]
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Emit a `pending` event for the given action.
    ///
    /// # Errors
    ///
    /// Returns [`PlaytreeError::SubjectClosed`](crate::PlaytreeError::SubjectClosed)
    /// if the subject has been closed.
    pub fn pending(&self, action: &str) -> Result<()> {
        self.emit(action, EventStatus::Pending, None)
    }

    /// Emit a terminal `success` event for the given action.
    ///
    /// # Errors
    ///
    /// Returns [`PlaytreeError::SubjectClosed`](crate::PlaytreeError::SubjectClosed)
    /// if the subject has been closed.
    pub fn success(&self, action: &str, body: Option<serde_json::Value>) -> Result<()> {
        self.emit(action, EventStatus::Success, body)
    }

    /// Emit a terminal `error` event for the given action.
    ///
    /// # Errors
    ///
    /// Returns [`PlaytreeError::SubjectClosed`](crate::PlaytreeError::SubjectClosed)
    /// if the subject has been closed.
    pub fn error(&self, action: &str, body: Option<serde_json::Value>) -> Result<()> {
        self.emit(action, EventStatus::Error, body)
    }

    fn emit(
        &self,
        action: &str,
        status: EventStatus,
        body: Option<serde_json::Value>,
    ) -> Result<()> {
        let event = ServiceEvent::new(self.service.clone(), action, status, body);
        trace!(
            service = %event.service,
            action = %event.action,
            status = %event.status,
            "emitting service event"
        );
        self.subject.send(event)
    }
}
