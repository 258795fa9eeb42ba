use futures::StreamExt;
use playtree_core::{PlaytreeError, Subject};

#[tokio::test]
async fn broadcasts_to_multiple_subscribers() {
    let subject = Subject::<i32>::new();
    let mut a = subject.subscribe().unwrap();
    let mut b = subject.subscribe().unwrap();

    subject.send(1).unwrap();

    assert_eq!(a.next().await, Some(1));
    assert_eq!(b.next().await, Some(1));
}

#[tokio::test]
async fn late_subscriber_misses_earlier_values() {
    let subject = Subject::<i32>::new();
    let mut early = subject.subscribe().unwrap();

    subject.send(1).unwrap();

    let mut late = subject.subscribe().unwrap();
    subject.send(2).unwrap();
    subject.close();

    assert_eq!(early.next().await, Some(1));
    assert_eq!(early.next().await, Some(2));
    assert_eq!(late.next().await, Some(2));
    assert_eq!(late.next().await, None);
}

#[tokio::test]
async fn filtered_subscription_yields_matches_only() {
    let subject = Subject::<i32>::new();
    let mut evens = subject.subscribe_filtered(|n| n % 2 == 0).unwrap();

    for n in 1..=4 {
        subject.send(n).unwrap();
    }
    subject.close();

    assert_eq!(evens.next().await, Some(2));
    assert_eq!(evens.next().await, Some(4));
    assert_eq!(evens.next().await, None);
}

#[tokio::test]
async fn close_completes_subscriber_streams() {
    let subject = Subject::<i32>::new();
    let mut stream = subject.subscribe().unwrap();

    subject.send(1).unwrap();
    subject.close();

    assert_eq!(stream.next().await, Some(1));
    assert_eq!(stream.next().await, None);
}

#[tokio::test]
async fn send_after_close_returns_error() {
    let subject = Subject::<i32>::new();
    let _stream = subject.subscribe().unwrap();

    subject.close();
    let err = subject.send(1).unwrap_err();
    assert!(matches!(err, PlaytreeError::SubjectClosed));
}

#[tokio::test]
async fn subscribe_after_close_returns_error() {
    let subject = Subject::<i32>::new();
    subject.close();

    assert!(matches!(
        subject.subscribe(),
        Err(PlaytreeError::SubjectClosed)
    ));
    assert!(subject.is_closed());
}

#[tokio::test]
async fn clones_share_subscribers() {
    let subject = Subject::<i32>::new();
    let clone = subject.clone();
    let mut stream = subject.subscribe().unwrap();

    clone.send(7).unwrap();

    assert_eq!(stream.next().await, Some(7));
    assert_eq!(clone.subscriber_count(), 1);
}

#[tokio::test]
async fn dropped_subscriber_is_pruned_on_next_send() {
    let subject = Subject::<i32>::new();
    let stream = subject.subscribe().unwrap();
    let _kept = subject.subscribe().unwrap();
    assert_eq!(subject.subscriber_count(), 2);

    drop(stream);
    subject.send(1).unwrap();

    assert_eq!(subject.subscriber_count(), 1);
}
