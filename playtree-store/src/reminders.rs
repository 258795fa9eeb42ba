// Copyright 2026 Playtree Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Reminder store backed by an injected service.
//!
//! The store delegates loading to a [`RemindersService`] and replaces its
//! collection verbatim with whatever the service returns. Service failures
//! propagate to the caller of [`RemindersStore::load`]; the service
//! independently reports the same lifecycle on its event stream for
//! observers.

use async_trait::async_trait;
use playtree_core::{Result, ServiceEvent, Subject};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A single reminder record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: String,
}

impl Reminder {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Data-fetching service consumed by [`RemindersStore`].
///
/// Implementations emit a `pending` event on their event stream synchronously
/// when `load` is invoked and exactly one terminal event once the load
/// settles, in addition to resolving or rejecting the returned future.
#[async_trait]
pub trait RemindersService: Send + Sync {
    /// The side channel of lifecycle events for this service's operations.
    fn events(&self) -> &Subject<ServiceEvent>;

    /// Fetch the current reminders.
    ///
    /// # Errors
    ///
    /// Propagates the underlying failure; the same failure is reported as an
    /// `error` event on [`events`](Self::events).
    async fn load(&self) -> Result<Vec<Reminder>>;
}

/// Holds the reminders last returned by the injected service.
#[derive(Debug)]
pub struct RemindersStore<S> {
    service: S,
    reminders: Vec<Reminder>,
}

impl<S: RemindersService> RemindersStore<S> {
    /// Creates an empty store around the injected service.
    #[must_use]
    pub fn new(service: S) -> Self {
        Self {
            service,
            reminders: Vec::new(),
        }
    }

    /// Loads reminders through the service and replaces the collection with
    /// the returned list verbatim, duplicates included. No merge with prior
    /// state.
    ///
    /// # Errors
    ///
    /// Propagates the service failure to the caller; the previous collection
    /// is left untouched in that case.
    pub async fn load(&mut self) -> Result<&[Reminder]> {
        let reminders = self.service.load().await?;
        debug!(count = reminders.len(), "replacing reminder collection");
        self.reminders = reminders;
        Ok(&self.reminders)
    }

    /// The reminders from the most recent successful load.
    #[must_use]
    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    /// The injected service.
    #[must_use]
    pub fn service(&self) -> &S {
        &self.service
    }
}
