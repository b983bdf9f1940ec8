use super::*;

fn ready<T>(future: impl Future<Output = T>) -> T {
    let mut future = std::pin::pin!(future);
    let mut cx = std::task::Context::from_waker(std::task::Waker::noop());
    match future.as_mut().poll(&mut cx) {
        std::task::Poll::Ready(value) => value,
        std::task::Poll::Pending => panic!("future should resolve without I/O"),
    }
}

// =============================================================
// Credential checks happen before dispatch
// =============================================================

#[test]
fn login_rejects_blank_email() {
    let err = ready(login("  ", "secret")).unwrap_err();
    assert!(matches!(err, ApiError::Validation { field: "email" }));
}

#[test]
fn login_rejects_empty_password() {
    let err = ready(login("ada@example.com", "")).unwrap_err();
    assert!(matches!(err, ApiError::Validation { field: "password" }));
}

#[test]
fn register_checks_fields_in_form_order() {
    let err = ready(register("", "ada", "ada@example.com", "secret")).unwrap_err();
    assert!(matches!(err, ApiError::Validation { field: "fullName" }));
    let err = ready(register("Ada", "", "ada@example.com", "secret")).unwrap_err();
    assert!(matches!(err, ApiError::Validation { field: "username" }));
    let err = ready(register("Ada", "ada", "", "secret")).unwrap_err();
    assert!(matches!(err, ApiError::Validation { field: "email" }));
    let err = ready(register("Ada", "ada", "ada@example.com", "")).unwrap_err();
    assert!(matches!(err, ApiError::Validation { field: "password" }));
}

#[test]
fn google_login_rejects_empty_credential() {
    let err = ready(google_login("")).unwrap_err();
    assert!(matches!(err, ApiError::Validation { field: "credential" }));
}

#[test]
fn google_login_with_credential_reaches_dispatch() {
    // Off-browser the transport is stubbed; getting a transport error
    // means the credential passed validation and a request was issued.
    let err = ready(google_login("id-token")).unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

#[test]
fn forgot_password_rejects_blank_email() {
    let err = ready(forgot_password(" ")).unwrap_err();
    assert!(matches!(err, ApiError::Validation { field: "email" }));
}

// =============================================================
// Login response shape
// =============================================================

#[test]
fn auth_data_unwraps_the_user() {
    let body = r#"{
        "success": true,
        "data": {
            "user": { "_id": "u1", "username": "ada", "fullName": "Ada Lovelace" }
        }
    }"#;
    let data: AuthData = crate::net::http::decode_envelope(200, body).unwrap();
    assert_eq!(data.user.username, "ada");
}
