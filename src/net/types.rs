//! Wire types for the Bolify REST API.
//!
//! The backend is a Mongo-backed service: documents carry an `_id`
//! string and camelCase field names. Fields the backend sometimes omits
//! (counters, populated relations) default instead of failing the whole
//! decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Response envelope every endpoint uses: `{ success, data?, message? }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body shape for non-2xx responses (`{ message }`, envelope
/// fields optional).
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// List endpoints answer either a paginated `{ docs: [...] }` page or a
/// bare array, depending on the endpoint. Both decode to the same thing.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DocList<T> {
    Paged { docs: Vec<T> },
    Plain(Vec<T>),
}

impl<T> DocList<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            DocList::Paged { docs } => docs,
            DocList::Plain(items) => items,
        }
    }
}

/// A relation the backend may populate into a full document or leave as
/// a bare id string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MaybePopulated<T> {
    Full(T),
    Id(String),
}

impl<T> MaybePopulated<T> {
    pub fn full(&self) -> Option<&T> {
        match self {
            MaybePopulated::Full(value) => Some(value),
            MaybePopulated::Id(_) => None,
        }
    }
}

/// The signed-in account, as returned by `GET /users/me` and the auth
/// endpoints. Also the shape of `GET /users/:username`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub mobile_number: Option<String>,
    #[serde(default)]
    pub is_mobile_verified: bool,
}

/// Author embedded in blogs and comments (a trimmed `User`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Publication state of a blog post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlogStatus {
    #[default]
    Draft,
    Published,
}

impl BlogStatus {
    /// Parse a form value; anything unrecognized stays a draft.
    pub fn parse(value: &str) -> Self {
        if value == "published" {
            BlogStatus::Published
        } else {
            BlogStatus::Draft
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BlogStatus::Draft => "draft",
            BlogStatus::Published => "published",
        }
    }
}

/// A blog post document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub category: Option<MaybePopulated<Category>>,
    #[serde(default)]
    pub tags: Vec<MaybePopulated<Tag>>,
    #[serde(default)]
    pub status: BlogStatus,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub liked_by: Vec<String>,
    #[serde(default)]
    pub author: Option<MaybePopulated<Author>>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Blog {
    /// Whether the given user id is in the post's like list.
    pub fn liked_by_user(&self, user_id: &str) -> bool {
        self.liked_by.iter().any(|id| id == user_id)
    }

    pub fn category_name(&self) -> Option<&str> {
        self.category
            .as_ref()
            .and_then(MaybePopulated::full)
            .map(|c| c.name.as_str())
    }
}

/// A comment on a blog post.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub author: Option<MaybePopulated<Author>>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tag {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

/// `PATCH /blogs/:id/like` result.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeState {
    pub likes: u64,
    pub is_liked: bool,
}

/// `GET /users/me/stats` result.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    #[serde(default)]
    pub total_posts: u64,
    #[serde(default)]
    pub total_views: u64,
    #[serde(default)]
    pub total_likes: u64,
}

/// `GET /search?q=` result: matching posts and authors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub blogs: Vec<Blog>,
    #[serde(default)]
    pub users: Vec<User>,
}

/// An image picked in the browser, held as plain bytes so payloads stay
/// testable off-browser. Converted to a `Blob` at dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Editor payload for creating or updating a post. Sent as multipart
/// form data; `tags` are tag ids, `category` a category id.
#[derive(Debug, Clone, Default)]
pub struct BlogDraft {
    pub title: String,
    pub body: String,
    pub category: String,
    pub status: BlogStatus,
    pub tags: Vec<String>,
    pub cover_image: Option<ImageUpload>,
}
