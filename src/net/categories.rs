//! Category endpoints.

use serde_json::json;

use crate::net::error::ApiError;
use crate::net::http::{self, Verb};
use crate::net::types::{Blog, Category, DocList};

/// `GET /categories`.
pub async fn all() -> Result<Vec<Category>, ApiError> {
    let list: DocList<Category> = http::request(Verb::Get, "/categories", None).await?;
    Ok(list.into_vec())
}

/// `GET /categories/:slug/blogs` — the feed filtered to one category.
pub async fn blogs(slug: &str) -> Result<Vec<Blog>, ApiError> {
    if slug.trim().is_empty() {
        return Err(ApiError::Validation { field: "slug" });
    }
    let list: DocList<Blog> =
        http::request(Verb::Get, &format!("/categories/{slug}/blogs"), None).await?;
    Ok(list.into_vec())
}

/// `POST /categories`.
pub async fn create(name: &str) -> Result<Category, ApiError> {
    if name.trim().is_empty() {
        return Err(ApiError::Validation { field: "name" });
    }
    let body = json!({ "name": name });
    http::request(Verb::Post, "/categories", Some(&body)).await
}
