//! Site-wide search.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::net::error::ApiError;
use crate::net::http::{self, Verb};
use crate::net::types::SearchResults;

/// `GET /search?q=` — matches blog posts and users.
pub async fn site(query: &str) -> Result<SearchResults, ApiError> {
    if query.trim().is_empty() {
        return Err(ApiError::Validation { field: "q" });
    }
    http::request(Verb::Get, &search_query_path(query), None).await
}

/// Build a `/search?q=` path with the query percent-encoded. The client
/// route and the API endpoint share this shape, so the navbar uses it
/// for navigation too.
pub fn search_query_path(query: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(query.trim().as_bytes()).collect();
    format!("/search?q={encoded}")
}
