use playtree_core::{EventStatus, ServiceEvent};
use serde_json::json;

#[test]
fn terminal_statuses_are_success_and_error() {
    assert!(!EventStatus::Pending.is_terminal());
    assert!(EventStatus::Success.is_terminal());
    assert!(EventStatus::Error.is_terminal());
}

#[test]
fn message_key_is_derived_from_service_action_and_status() {
    let event = ServiceEvent::new("reminders", "load", EventStatus::Pending, None);

    assert_eq!(event.message_key, "reminders-load-pending");
    assert_eq!(event.service, "reminders");
    assert_eq!(event.action, "load");
    assert!(event.date > 0);
    assert!(event.body.is_none());
}

#[test]
fn status_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&EventStatus::Success).unwrap(),
        "\"success\""
    );
    assert_eq!(
        serde_json::from_str::<EventStatus>("\"error\"").unwrap(),
        EventStatus::Error
    );
}

#[test]
fn body_is_omitted_from_json_when_absent() {
    let event = ServiceEvent::new("reminders", "load", EventStatus::Success, None);
    let json = serde_json::to_value(&event).unwrap();

    assert!(json.get("body").is_none());
    assert_eq!(json["status"], "success");
}

#[test]
fn body_carries_structured_payload() {
    let body = json!([{ "id": "1" }]);
    let event = ServiceEvent::new("reminders", "load", EventStatus::Success, Some(body.clone()));

    assert_eq!(event.body, Some(body));
    assert_eq!(event.message_key, "reminders-load-success");
}
