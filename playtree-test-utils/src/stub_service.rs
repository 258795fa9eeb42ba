// Copyright 2026 Playtree Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Stub reminders service with a configurable outcome.
//!
//! The stub follows the real service contract: a `pending` event is emitted
//! synchronously when `load` is invoked, the load then yields once to the
//! runtime, and exactly one terminal event is emitted before the returned
//! future settles for the caller.

use async_trait::async_trait;
use playtree_core::{EventReporter, PlaytreeError, Result, ServiceEvent, Subject};
use playtree_store::{Reminder, RemindersService};
use serde_json::json;

/// Scripted [`RemindersService`] for tests.
pub struct StubRemindersService {
    reporter: EventReporter,
    outcome: std::result::Result<Vec<Reminder>, String>,
}

impl StubRemindersService {
    /// A service whose every load resolves with the given reminders.
    #[must_use]
    pub fn succeeding(reminders: Vec<Reminder>) -> Self {
        Self {
            reporter: EventReporter::new("reminders"),
            outcome: Ok(reminders),
        }
    }

    /// A service whose every load rejects with the given message.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reporter: EventReporter::new("reminders"),
            outcome: Err(message.into()),
        }
    }
}

#[async_trait]
impl RemindersService for StubRemindersService {
    fn events(&self) -> &Subject<ServiceEvent> {
        self.reporter.events()
    }

    async fn load(&self) -> Result<Vec<Reminder>> {
        self.reporter.pending("load")?;

        // Simulate the asynchronous gap between request and settlement
        tokio::task::yield_now().await;

        match &self.outcome {
            Ok(reminders) => {
                let body = serde_json::to_value(reminders)?;
                self.reporter.success("load", Some(body))?;
                Ok(reminders.clone())
            }
            Err(message) => {
                self.reporter
                    .error("load", Some(json!({ "message": message })))?;
                Err(PlaytreeError::service_error(message.clone()))
            }
        }
    }
}

/// Three reminders sharing the same id, as returned by the canonical stub.
#[must_use]
pub fn three_duplicate_reminders() -> Vec<Reminder> {
    vec![
        Reminder::new("1"),
        Reminder::new("1"),
        Reminder::new("1"),
    ]
}
