use playtree_core::PlaytreeError;

#[derive(Debug, thiserror::Error)]
#[error("backend said no: {msg}")]
struct BackendError {
    msg: String,
}

#[test]
fn service_error_formats_context() {
    let err = PlaytreeError::service_error("load rejected");
    assert_eq!(err.to_string(), "Service error: load rejected");
    assert!(err.is_service_error());
}

#[test]
fn subject_closed_is_not_a_service_error() {
    let err = PlaytreeError::SubjectClosed;
    assert_eq!(err.to_string(), "Subject closed");
    assert!(!err.is_service_error());
}

#[test]
fn user_error_preserves_source() {
    use std::error::Error as _;

    let err = PlaytreeError::user_error(BackendError {
        msg: "503".to_string(),
    });
    assert!(err.source().is_some());
    assert!(err.to_string().contains("backend said no: 503"));
}

#[test]
fn cloning_a_user_error_degrades_to_its_message() {
    let err = PlaytreeError::user_error(BackendError {
        msg: "503".to_string(),
    });
    let cloned = err.clone();

    assert!(matches!(cloned, PlaytreeError::ServiceError { .. }));
    assert!(cloned.to_string().contains("503"));
}

#[test]
fn snapshot_error_from_serde_json() {
    let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err: PlaytreeError = parse_err.into();
    assert!(matches!(err, PlaytreeError::SnapshotError { .. }));
}
