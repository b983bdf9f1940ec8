//! Tag endpoints.

#[cfg(test)]
#[path = "tags_test.rs"]
mod tags_test;

use serde_json::json;

use crate::net::error::ApiError;
use crate::net::http::{self, Verb};
use crate::net::types::{DocList, Tag};

/// `GET /tags`.
pub async fn all() -> Result<Vec<Tag>, ApiError> {
    let list: DocList<Tag> = http::request(Verb::Get, "/tags", None).await?;
    Ok(list.into_vec())
}

/// `POST /tags`.
pub async fn create(name: &str) -> Result<Tag, ApiError> {
    if name.trim().is_empty() {
        return Err(ApiError::Validation { field: "name" });
    }
    let body = json!({ "name": name });
    http::request(Verb::Post, "/tags", Some(&body)).await
}
