use super::*;

use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Eq)]
struct Payload {
    value: String,
}

// =============================================================
// decode_envelope: success paths
// =============================================================

#[test]
fn decodes_payload_from_envelope() {
    let body = r#"{ "success": true, "data": { "value": "hello" } }"#;
    let payload: Payload = decode_envelope(200, body).unwrap();
    assert_eq!(payload.value, "hello");
}

#[test]
fn accepts_any_2xx_status() {
    let body = r#"{ "success": true, "data": { "value": "created" } }"#;
    let payload: Payload = decode_envelope(201, body).unwrap();
    assert_eq!(payload.value, "created");
    let payload: Payload = decode_envelope(299, body).unwrap();
    assert_eq!(payload.value, "created");
}

// =============================================================
// decode_envelope: failure normalization
// =============================================================

#[test]
fn not_found_carries_backend_message() {
    let body = r#"{ "success": false, "message": "Blog not found" }"#;
    let err = decode_envelope::<Payload>(404, body).unwrap_err();
    match err {
        ApiError::Api { message, code } => {
            assert_eq!(message, "Blog not found");
            assert_eq!(code, 404);
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[test]
fn unauthenticated_is_recognizable() {
    let body = r#"{ "message": "Invalid credentials" }"#;
    let err = decode_envelope::<Payload>(401, body).unwrap_err();
    assert!(err.is_unauthenticated());
    assert_eq!(err.message(), "Invalid credentials");
}

#[test]
fn messageless_failure_gets_status_tag() {
    let err = decode_envelope::<Payload>(500, "").unwrap_err();
    assert_eq!(err.message(), "request failed with status 500");
}

#[test]
fn garbled_error_body_still_gets_status_tag() {
    let err = decode_envelope::<Payload>(502, "<html>bad gateway</html>").unwrap_err();
    match err {
        ApiError::Api { code, .. } => assert_eq!(code, 502),
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[test]
fn declared_failure_in_2xx_body_is_api_error() {
    // The backend sometimes answers 200 with success: false.
    let body = r#"{ "success": false, "message": "Slug already taken" }"#;
    let err = decode_envelope::<Payload>(200, body).unwrap_err();
    assert_eq!(err.message(), "Slug already taken");
}

#[test]
fn garbled_2xx_body_is_transport() {
    let err = decode_envelope::<Payload>(200, "not json at all").unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

#[test]
fn success_without_data_is_transport() {
    let body = r#"{ "success": true }"#;
    let err = decode_envelope::<Payload>(200, body).unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(err.message(), "response envelope missing data");
}

#[test]
fn redirect_status_is_not_success() {
    let err = decode_envelope::<Payload>(301, r#"{ "success": true }"#).unwrap_err();
    assert!(matches!(err, ApiError::Api { code: 301, .. }));
}

// =============================================================
// decode_ack
// =============================================================

#[test]
fn ack_tolerates_missing_data() {
    decode_ack(200, r#"{ "success": true, "message": "Logged out" }"#).unwrap();
}

#[test]
fn ack_with_data_still_passes() {
    decode_ack(200, r#"{ "success": true, "data": { "anything": 1 } }"#).unwrap();
}

#[test]
fn ack_failure_carries_message() {
    let err = decode_ack(200, r#"{ "success": false, "message": "OTP expired" }"#).unwrap_err();
    assert_eq!(err.message(), "OTP expired");
}

#[test]
fn ack_non_2xx_is_api_error() {
    let err = decode_ack(403, r#"{ "message": "Forbidden" }"#).unwrap_err();
    assert!(matches!(err, ApiError::Api { code: 403, .. }));
}

#[test]
fn ack_garbled_2xx_body_is_transport() {
    let err = decode_ack(204, "").unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
