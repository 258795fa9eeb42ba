// Copyright 2026 Playtree Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Hot, multi-subscriber subject for playtree event streams.
//!
//! A [`Subject`] broadcasts each value to all active subscribers.
//!
//! ## Characteristics
//!
//! - **Hot**: Late subscribers do not receive past values, only values sent
//!   after subscribing. There is no replay buffer.
//! - **Unbounded**: Uses unbounded channels internally (no backpressure).
//! - **Thread-safe**: Cheap to clone; all clones share the same internal state.
//! - **Independent subscribers**: A slow or dropped subscriber never affects
//!   the others.
//!
//! ## Example
//!
//! ```
//! use playtree_core::Subject;
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let subject = Subject::<i32>::new();
//!
//! // Subscribe before sending
//! let mut stream = subject.subscribe().unwrap();
//!
//! subject.send(1).unwrap();
//! subject.send(2).unwrap();
//! subject.close();
//!
//! assert_eq!(stream.next().await, Some(1));
//! assert_eq!(stream.next().await, Some(2));
//! assert_eq!(stream.next().await, None); // Subject closed
//! # }
//! ```

use crate::{PlaytreeError, Result};
use async_channel::Sender;
use futures::future::ready;
use futures::stream::Stream;
use futures::StreamExt;
use parking_lot::Mutex;
use std::pin::Pin;
use std::sync::Arc;

/// A boxed subscriber stream handed out by [`Subject::subscribe`].
pub type SubjectStream<T> = Pin<Box<dyn Stream<Item = T> + Send + 'static>>;

struct SubjectState<T> {
    closed: bool,
    senders: Vec<Sender<T>>,
}

/// A hot, unbounded subject that broadcasts values to all current subscribers.
///
/// `Subject` is the entry point for pushing values into a playtree event
/// pipeline. It implements a publish-subscribe pattern where multiple
/// subscribers can receive the same values.
///
/// See the [module documentation](crate::subject) for examples and more details.
pub struct Subject<T: Clone + Send + 'static> {
    state: Arc<Mutex<SubjectState<T>>>,
}

impl<T: Clone + Send + 'static> Subject<T> {
    /// Creates a new unbounded subject with no subscribers.
    ///
    /// The subject starts in an open state and can immediately accept
    /// subscriptions and values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SubjectState {
                closed: false,
                senders: Vec::new(),
            })),
        }
    }

    /// Subscribe to this subject and receive a stream of values.
    ///
    /// Late subscribers do not receive previously sent values.
    ///
    /// # Errors
    ///
    /// Returns [`PlaytreeError::SubjectClosed`] if the subject has been closed.
    pub fn subscribe(&self) -> Result<SubjectStream<T>> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(PlaytreeError::SubjectClosed);
        }

        let (tx, rx) = async_channel::unbounded();
        state.senders.push(tx);
        Ok(Box::pin(rx))
    }

    /// Subscribe with a predicate; the returned stream yields only values for
    /// which the predicate returns `true`.
    ///
    /// # Errors
    ///
    /// Returns [`PlaytreeError::SubjectClosed`] if the subject has been closed.
    pub fn subscribe_filtered<F>(&self, mut predicate: F) -> Result<SubjectStream<T>>
    where
        F: FnMut(&T) -> bool + Send + 'static,
    {
        let stream = self.subscribe()?;
        Ok(Box::pin(stream.filter(move |value| ready(predicate(value)))))
    }

    /// Send a value to all active subscribers.
    ///
    /// Fan-out is synchronous; by the time this returns, the value is queued
    /// on every live subscriber channel.
    ///
    /// # Errors
    ///
    /// Returns [`PlaytreeError::SubjectClosed`] if the subject has been closed.
    pub fn send(&self, value: T) -> Result<()> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(PlaytreeError::SubjectClosed);
        }

        let mut next_senders = Vec::with_capacity(state.senders.len());

        for tx in state.senders.drain(..) {
            if tx.try_send(value.clone()).is_ok() {
                next_senders.push(tx);
            }
        }

        state.senders = next_senders;
        Ok(())
    }

    /// Closes the subject, completing all subscriber streams.
    ///
    /// After closing:
    /// - All existing subscribers will receive `None` on their next poll.
    /// - `send()` will return [`PlaytreeError::SubjectClosed`].
    /// - `subscribe()` will return [`PlaytreeError::SubjectClosed`].
    ///
    /// Closing is idempotent; calling it multiple times has no additional
    /// effect.
    pub fn close(&self) {
        let mut state = self.state.lock();
        state.closed = true;
        state.senders.clear();
    }

    /// Returns `true` if the subject has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Returns the number of currently active subscribers.
    ///
    /// Note: This count is updated lazily. Dropped subscribers are removed on
    /// the next `send()` call, not immediately when dropped.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().senders.len()
    }
}

impl<T: Clone + Send + 'static> Default for Subject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + 'static> Clone for Subject<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}
