//! Blog post endpoints.

#[cfg(test)]
#[path = "blogs_test.rs"]
mod blogs_test;

use crate::net::error::ApiError;
use crate::net::http::{self, Verb};
use crate::net::types::{Blog, BlogDraft, DocList, LikeState};

/// `GET /blogs` — the public feed.
pub async fn all() -> Result<Vec<Blog>, ApiError> {
    let list: DocList<Blog> = http::request(Verb::Get, "/blogs", None).await?;
    Ok(list.into_vec())
}

/// `GET /blogs/:slug`.
pub async fn by_slug(slug: &str) -> Result<Blog, ApiError> {
    if slug.trim().is_empty() {
        return Err(ApiError::Validation { field: "slug" });
    }
    http::request(Verb::Get, &format!("/blogs/{slug}"), None).await
}

/// `GET /blogs/id/:id` — used by the editor, which has an id but no slug.
pub async fn by_id(id: &str) -> Result<Blog, ApiError> {
    if id.trim().is_empty() {
        return Err(ApiError::Validation { field: "id" });
    }
    http::request(Verb::Get, &format!("/blogs/id/{id}"), None).await
}

/// `GET /blogs/user/:userId` — all posts by one author.
pub async fn by_user(user_id: &str) -> Result<Vec<Blog>, ApiError> {
    if user_id.trim().is_empty() {
        return Err(ApiError::Validation { field: "userId" });
    }
    let list: DocList<Blog> =
        http::request(Verb::Get, &format!("/blogs/user/{user_id}"), None).await?;
    Ok(list.into_vec())
}

/// `POST /blogs` (multipart). A new post needs a cover image.
pub async fn create(draft: &BlogDraft) -> Result<Blog, ApiError> {
    validate_draft(draft, true)?;
    #[cfg(feature = "csr")]
    {
        let form = draft_form(draft)?;
        http::request_form(Verb::Post, "/blogs", form).await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(http::off_browser())
    }
}

/// `PUT /blogs/:id` (multipart). The cover image is only replaced when
/// the draft carries a new one.
pub async fn update(id: &str, draft: &BlogDraft) -> Result<Blog, ApiError> {
    if id.trim().is_empty() {
        return Err(ApiError::Validation { field: "id" });
    }
    validate_draft(draft, false)?;
    #[cfg(feature = "csr")]
    {
        let form = draft_form(draft)?;
        http::request_form(Verb::Put, &format!("/blogs/{id}"), form).await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(http::off_browser())
    }
}

/// `DELETE /blogs/:id`.
pub async fn delete(id: &str) -> Result<(), ApiError> {
    if id.trim().is_empty() {
        return Err(ApiError::Validation { field: "id" });
    }
    http::request_ack(Verb::Delete, &format!("/blogs/{id}"), None).await
}

/// `PATCH /blogs/:id/like` — toggles the caller's like and returns the
/// new count plus whether the caller now likes the post.
pub async fn toggle_like(id: &str) -> Result<LikeState, ApiError> {
    if id.trim().is_empty() {
        return Err(ApiError::Validation { field: "id" });
    }
    http::request(Verb::Patch, &format!("/blogs/{id}/like"), None).await
}

/// Client-side checks the backend would reject anyway; failing here
/// means nothing is dispatched. Creation needs a category and a cover;
/// an update keeps whatever it does not replace.
fn validate_draft(draft: &BlogDraft, creating: bool) -> Result<(), ApiError> {
    if draft.title.trim().is_empty() {
        return Err(ApiError::Validation { field: "title" });
    }
    if draft.body.trim().is_empty() {
        return Err(ApiError::Validation { field: "body" });
    }
    if creating && draft.category.is_empty() {
        return Err(ApiError::Validation { field: "category" });
    }
    if creating && draft.cover_image.is_none() {
        return Err(ApiError::Validation { field: "coverImage" });
    }
    Ok(())
}

#[cfg(feature = "csr")]
fn draft_form(draft: &BlogDraft) -> Result<web_sys::FormData, ApiError> {
    let form_error = |_| ApiError::Transport("could not build form data".to_owned());
    let form = web_sys::FormData::new().map_err(form_error)?;
    form.append_with_str("title", &draft.title).map_err(form_error)?;
    form.append_with_str("body", &draft.body).map_err(form_error)?;
    if !draft.category.is_empty() {
        form.append_with_str("category", &draft.category)
            .map_err(form_error)?;
    }
    form.append_with_str("status", draft.status.as_str())
        .map_err(form_error)?;
    for tag_id in &draft.tags {
        form.append_with_str("tags[]", tag_id).map_err(form_error)?;
    }
    if let Some(image) = &draft.cover_image {
        http::append_image(&form, "coverImage", image)?;
    }
    Ok(form)
}
