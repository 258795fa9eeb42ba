use playtree_core::{EventStatus, PlaytreeError};
use playtree_store::{Reminder, RemindersService, RemindersStore};
use playtree_test_utils::{
    expect_next_status, three_duplicate_reminders, StubRemindersService,
};

#[tokio::test]
async fn load_replaces_the_collection_verbatim() {
    let service = StubRemindersService::succeeding(three_duplicate_reminders());
    let mut store = RemindersStore::new(service);

    let loaded = store.load().await.unwrap().to_vec();

    // Duplicates are kept as returned, no dedup
    assert_eq!(loaded.len(), 3);
    assert!(loaded.iter().all(|r| r.id == "1"));
    assert_eq!(store.reminders(), loaded.as_slice());
}

#[tokio::test]
async fn a_second_load_replaces_rather_than_merges() {
    let service = StubRemindersService::succeeding(vec![Reminder::new("7")]);
    let mut store = RemindersStore::new(service);

    store.load().await.unwrap();
    store.load().await.unwrap();

    assert_eq!(store.reminders(), &[Reminder::new("7")]);
}

#[tokio::test]
async fn load_failure_propagates_to_the_caller() {
    let service = StubRemindersService::failing("backend unreachable");
    let mut store = RemindersStore::new(service);

    let err = store.load().await.unwrap_err();

    assert!(matches!(err, PlaytreeError::ServiceError { .. }));
    assert!(store.reminders().is_empty());
}

#[tokio::test]
async fn load_emits_pending_then_success() {
    let service = StubRemindersService::succeeding(three_duplicate_reminders());
    let mut events = service.events().subscribe().unwrap();
    let mut store = RemindersStore::new(service);

    store.load().await.unwrap();

    expect_next_status(&mut events, EventStatus::Pending).await;
    let terminal = expect_next_status(&mut events, EventStatus::Success).await;
    assert_eq!(terminal.message_key, "reminders-load-success");
    assert!(terminal.body.is_some());
}

#[tokio::test]
async fn failed_load_is_still_reported_on_the_event_stream() {
    let service = StubRemindersService::failing("backend unreachable");
    let mut events = service.events().subscribe().unwrap();
    let mut store = RemindersStore::new(service);

    assert!(store.load().await.is_err());

    expect_next_status(&mut events, EventStatus::Pending).await;
    let terminal = expect_next_status(&mut events, EventStatus::Error).await;
    assert_eq!(terminal.message_key, "reminders-load-error");
}
