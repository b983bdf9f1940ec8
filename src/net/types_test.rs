use super::*;

// =============================================================
// Document lists: paged and bare
// =============================================================

#[test]
fn doc_list_decodes_paginated_page() {
    let body = r#"{ "docs": [ { "_id": "c1", "name": "Rust", "slug": "rust" } ] }"#;
    let list: DocList<Category> = serde_json::from_str(body).unwrap();
    let cats = list.into_vec();
    assert_eq!(cats.len(), 1);
    assert_eq!(cats[0].name, "Rust");
}

#[test]
fn doc_list_decodes_bare_array() {
    let body = r#"[ { "_id": "t1", "name": "wasm" }, { "_id": "t2", "name": "web" } ]"#;
    let list: DocList<Tag> = serde_json::from_str(body).unwrap();
    assert_eq!(list.into_vec().len(), 2);
}

// =============================================================
// Users
// =============================================================

#[test]
fn user_decodes_mongo_shape() {
    let body = r#"{
        "_id": "64f0c2",
        "username": "ada",
        "fullName": "Ada Lovelace",
        "email": "ada@example.com",
        "avatar": "https://cdn.example.com/a.png",
        "mobileNumber": "+15550100",
        "isMobileVerified": true
    }"#;
    let user: User = serde_json::from_str(body).unwrap();
    assert_eq!(user.id, "64f0c2");
    assert_eq!(user.full_name, "Ada Lovelace");
    assert!(user.is_mobile_verified);
}

#[test]
fn user_optional_fields_default() {
    let body = r#"{ "_id": "u1", "username": "ada", "fullName": "Ada" }"#;
    let user: User = serde_json::from_str(body).unwrap();
    assert!(user.email.is_none());
    assert!(user.avatar.is_none());
    assert!(!user.is_mobile_verified);
}

// =============================================================
// Blogs
// =============================================================

#[test]
fn blog_decodes_with_populated_relations() {
    let body = r#"{
        "_id": "b1",
        "title": "Hello",
        "slug": "hello",
        "body": "<p>Hi</p>",
        "coverImage": "https://cdn.example.com/c.jpg",
        "category": { "_id": "c1", "name": "Rust", "slug": "rust" },
        "tags": [ { "_id": "t1", "name": "wasm" }, "t2" ],
        "status": "published",
        "views": 42,
        "likes": 3,
        "likedBy": ["u1", "u2"],
        "author": { "_id": "u9", "username": "ada", "fullName": "Ada" },
        "createdAt": "2024-06-01T10:00:00Z"
    }"#;
    let blog: Blog = serde_json::from_str(body).unwrap();
    assert_eq!(blog.status, BlogStatus::Published);
    assert_eq!(blog.category_name(), Some("Rust"));
    assert_eq!(blog.tags.len(), 2);
    assert!(blog.tags[0].full().is_some());
    assert!(blog.tags[1].full().is_none());
    assert!(blog.liked_by_user("u2"));
    assert!(!blog.liked_by_user("u3"));
}

#[test]
fn blog_decodes_with_bare_relation_ids() {
    let body = r#"{
        "_id": "b2",
        "title": "Draft",
        "category": "c1",
        "author": "u9"
    }"#;
    let blog: Blog = serde_json::from_str(body).unwrap();
    assert_eq!(blog.status, BlogStatus::Draft);
    assert_eq!(blog.category_name(), None);
    assert_eq!(blog.views, 0);
    assert!(blog.liked_by.is_empty());
}

#[test]
fn blog_status_round_trips_as_form_value() {
    assert_eq!(BlogStatus::parse("published"), BlogStatus::Published);
    assert_eq!(BlogStatus::parse("draft"), BlogStatus::Draft);
    assert_eq!(BlogStatus::parse("nonsense"), BlogStatus::Draft);
    assert_eq!(BlogStatus::Published.as_str(), "published");
}

// =============================================================
// Like state and stats
// =============================================================

#[test]
fn like_state_decodes_camel_case() {
    let state: LikeState = serde_json::from_str(r#"{ "likes": 7, "isLiked": true }"#).unwrap();
    assert_eq!(state.likes, 7);
    assert!(state.is_liked);
}

#[test]
fn user_stats_default_missing_counters() {
    let stats: UserStats = serde_json::from_str(r#"{ "totalPosts": 5 }"#).unwrap();
    assert_eq!(stats.total_posts, 5);
    assert_eq!(stats.total_views, 0);
    assert_eq!(stats.total_likes, 0);
}

// =============================================================
// Search results
// =============================================================

#[test]
fn search_results_tolerate_missing_sections() {
    let results: SearchResults = serde_json::from_str(r#"{ "blogs": [] }"#).unwrap();
    assert!(results.blogs.is_empty());
    assert!(results.users.is_empty());
}

// =============================================================
// Comments
// =============================================================

#[test]
fn comment_decodes_with_populated_author() {
    let body = r#"{
        "_id": "k1",
        "text": "Nice post",
        "author": { "_id": "u1", "username": "ada", "fullName": "Ada" },
        "createdAt": "2024-06-02T09:00:00Z"
    }"#;
    let comment: Comment = serde_json::from_str(body).unwrap();
    assert_eq!(comment.text, "Nice post");
    assert!(comment.author.is_some());
}
