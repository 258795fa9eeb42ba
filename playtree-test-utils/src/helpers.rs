// Copyright 2026 Playtree Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::Stream;
use futures::StreamExt;
use playtree_core::{EventStatus, ServiceEvent};
use std::time::Duration;
use tokio::time::sleep;

/// Panics if the stream emits anything within the timeout window.
pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        _item = stream.next() => {
            panic!("Unexpected element emitted, expected no output.");
        }
        _ = sleep(Duration::from_millis(timeout_ms)) => {
        }
    }
}

/// Expect the next event on the stream to carry the given status.
pub async fn expect_next_status<S>(stream: &mut S, expected: EventStatus) -> ServiceEvent
where
    S: Stream<Item = ServiceEvent> + Unpin,
{
    let event = stream.next().await.expect("expected next event");
    assert_eq!(event.status, expected);
    event
}

/// Polls the condition until it holds, panicking after the timeout.
///
/// Useful when a spawned bridge task is expected to apply an effect shortly
/// after the triggering future settles.
pub async fn wait_until<F>(timeout_ms: u64, mut condition: F)
where
    F: FnMut() -> bool,
{
    let deadline = Duration::from_millis(timeout_ms);
    let started = tokio::time::Instant::now();

    while !condition() {
        assert!(
            started.elapsed() < deadline,
            "condition not met within {timeout_ms}ms"
        );
        sleep(Duration::from_millis(5)).await;
    }
}
