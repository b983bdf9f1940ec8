//! Comment endpoints.

use serde_json::json;

use crate::net::error::ApiError;
use crate::net::http::{self, Verb};
use crate::net::types::{Comment, DocList};

/// `GET /comments/:blogId`.
pub async fn for_blog(blog_id: &str) -> Result<Vec<Comment>, ApiError> {
    if blog_id.trim().is_empty() {
        return Err(ApiError::Validation { field: "blogId" });
    }
    let list: DocList<Comment> =
        http::request(Verb::Get, &format!("/comments/{blog_id}"), None).await?;
    Ok(list.into_vec())
}

/// `POST /comments/:blogId`.
pub async fn add(blog_id: &str, text: &str) -> Result<Comment, ApiError> {
    if blog_id.trim().is_empty() {
        return Err(ApiError::Validation { field: "blogId" });
    }
    if text.trim().is_empty() {
        return Err(ApiError::Validation { field: "text" });
    }
    let body = json!({ "text": text });
    http::request(Verb::Post, &format!("/comments/{blog_id}"), Some(&body)).await
}
