use super::*;

// =============================================================
// API base path
// =============================================================

#[test]
fn api_url_joins_onto_versioned_base() {
    assert_eq!(api_url("/blogs"), "/api/v1/blogs");
}

#[test]
fn api_url_preserves_nested_paths() {
    assert_eq!(api_url("/users/me/stats"), "/api/v1/users/me/stats");
    assert_eq!(api_url("/blogs/id/b1"), "/api/v1/blogs/id/b1");
}

#[test]
fn api_url_keeps_query_strings() {
    assert_eq!(api_url("/search?q=rust"), "/api/v1/search?q=rust");
}
