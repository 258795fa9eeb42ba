// Copyright 2026 Playtree Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Lifecycle events emitted by asynchronous services.
//!
//! Every service operation reports its progress as a sequence of
//! [`ServiceEvent`]s on a side channel: one `pending` event emitted
//! synchronously when the operation starts, followed by exactly one terminal
//! event (`success` or `error`) once the underlying future settles.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::time::{SystemTime, UNIX_EPOCH};

/// Lifecycle status of an asynchronous service operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    /// The operation has started and its result is not yet known.
    Pending,
    /// The operation completed successfully.
    Success,
    /// The operation failed.
    Error,
}

impl EventStatus {
    /// Returns `true` for `Success` and `Error`, the statuses that mark the
    /// completion of an operation.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Success | Self::Error)
    }

    /// Lowercase wire name of the status, as used in message keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable record describing one lifecycle step of an asynchronous
/// service operation.
///
/// Events have no identity beyond their emission order. Consumers typically
/// filter on [`EventStatus::is_terminal`] to react only to completions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceEvent {
    /// Name of the emitting service, e.g. `"reminders"`.
    pub service: String,
    /// Name of the operation, e.g. `"load"`.
    pub action: String,
    /// Lifecycle status of the operation.
    pub status: EventStatus,
    /// Stable key identifying this event kind, `"{service}-{action}-{status}"`.
    pub message_key: String,
    /// Emission time, unix epoch milliseconds.
    pub date: u64,
    /// Optional structured payload (e.g. the loaded body or error detail).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
}

impl ServiceEvent {
    /// Creates an event stamped with the current time and a derived message key.
    #[must_use]
    pub fn new(
        service: impl Into<String>,
        action: impl Into<String>,
        status: EventStatus,
        body: Option<serde_json::Value>,
    ) -> Self {
        let service = service.into();
        let action = action.into();
        let message_key = format!("{service}-{action}-{}", status.as_str());
        Self {
            service,
            action,
            status,
            message_key,
            date: unix_millis(),
            body,
        }
    }

    /// Returns `true` if this event marks the completion of its operation.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
