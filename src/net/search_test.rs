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
// Query path encoding
// =============================================================

#[test]
fn plain_query_passes_through() {
    assert_eq!(search_query_path("rust"), "/search?q=rust");
}

#[test]
fn spaces_encode_as_plus() {
    assert_eq!(search_query_path("rust async"), "/search?q=rust+async");
}

#[test]
fn reserved_characters_are_escaped() {
    assert_eq!(search_query_path("a&b=c"), "/search?q=a%26b%3Dc");
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    assert_eq!(search_query_path("  hello  "), "/search?q=hello");
}

#[test]
fn unicode_queries_are_percent_encoded() {
    assert_eq!(search_query_path("caf\u{e9}"), "/search?q=caf%C3%A9");
}

// =============================================================
// Query validation
// =============================================================

#[test]
fn blank_query_never_dispatches() {
    let err = ready(site("   ")).unwrap_err();
    assert!(matches!(err, ApiError::Validation { field: "q" }));
}
