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
// Inline tag creation
// =============================================================

#[test]
fn create_rejects_blank_name() {
    let err = ready(create("   ")).unwrap_err();
    assert!(matches!(err, ApiError::Validation { field: "name" }));
}

#[test]
fn create_with_name_reaches_dispatch() {
    // Off-browser the transport is stubbed, so getting past validation
    // shows up as a transport error rather than a validation one.
    let err = ready(create("rustlang")).unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
