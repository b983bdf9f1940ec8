//! Typed API layer for the Bolify backend.
//!
//! One module per resource, one async function per endpoint. Every
//! request goes through [`http`], carries the session cookie, and comes
//! back as `Result<T, ApiError>` — transport failures never escape raw.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod auth;
pub mod blogs;
pub mod categories;
pub mod comments;
pub mod error;
pub mod http;
pub mod search;
pub mod tags;
pub mod types;
pub mod users;

pub use error::ApiError;

/// Fixed base path of the backend API. The SPA is served from the same
/// origin; the backend session cookie rides along on every call.
pub const API_BASE: &str = "/api/v1";

/// Join an endpoint path onto the API base.
pub(crate) fn api_url(path: &str) -> String {
    format!("{API_BASE}{path}")
}
