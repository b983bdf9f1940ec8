//! User profile endpoints (`/users/me` lives in [`crate::net::auth`]).

use serde_json::json;

use crate::net::error::ApiError;
use crate::net::http::{self, Verb};
use crate::net::types::{Blog, DocList, ImageUpload, User, UserStats};

/// `GET /users/:username` — a public profile.
pub async fn profile(username: &str) -> Result<User, ApiError> {
    if username.trim().is_empty() {
        return Err(ApiError::Validation { field: "username" });
    }
    http::request(Verb::Get, &format!("/users/{username}"), None).await
}

/// `GET /users/me/blogs` — the signed-in user's posts, drafts included.
pub async fn my_blogs() -> Result<Vec<Blog>, ApiError> {
    let list: DocList<Blog> = http::request(Verb::Get, "/users/me/blogs", None).await?;
    Ok(list.into_vec())
}

/// `GET /users/me/stats`.
pub async fn my_stats() -> Result<UserStats, ApiError> {
    http::request(Verb::Get, "/users/me/stats", None).await
}

/// `PATCH /users/me` — display name and username.
pub async fn update_details(full_name: &str, username: &str) -> Result<User, ApiError> {
    if full_name.trim().is_empty() {
        return Err(ApiError::Validation { field: "fullName" });
    }
    if username.trim().is_empty() {
        return Err(ApiError::Validation { field: "username" });
    }
    let body = json!({ "fullName": full_name, "username": username });
    http::request(Verb::Patch, "/users/me", Some(&body)).await
}

/// `PATCH /users/me/avatar` (multipart).
pub async fn update_avatar(image: &ImageUpload) -> Result<User, ApiError> {
    if image.bytes.is_empty() {
        return Err(ApiError::Validation { field: "avatar" });
    }
    #[cfg(feature = "csr")]
    {
        let form = web_sys::FormData::new()
            .map_err(|_| ApiError::Transport("could not build form data".to_owned()))?;
        http::append_image(&form, "avatar", image)?;
        http::request_form(Verb::Patch, "/users/me/avatar", form).await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(http::off_browser())
    }
}

/// `PATCH /users/me/change-password`.
pub async fn change_password(old_password: &str, new_password: &str) -> Result<(), ApiError> {
    if old_password.is_empty() {
        return Err(ApiError::Validation { field: "oldPassword" });
    }
    if new_password.is_empty() {
        return Err(ApiError::Validation { field: "newPassword" });
    }
    let body = json!({ "oldPassword": old_password, "newPassword": new_password });
    http::request_ack(Verb::Patch, "/users/me/change-password", Some(&body)).await
}

/// `POST /users/me/send-mobile-otp`.
pub async fn send_mobile_otp(mobile_number: &str) -> Result<(), ApiError> {
    if mobile_number.trim().is_empty() {
        return Err(ApiError::Validation { field: "mobileNumber" });
    }
    let body = json!({ "mobileNumber": mobile_number });
    http::request_ack(Verb::Post, "/users/me/send-mobile-otp", Some(&body)).await
}

/// `POST /users/me/verify-mobile-otp`. Callers refetch the account
/// afterwards to pick up the verified flag.
pub async fn verify_mobile_otp(otp: &str) -> Result<(), ApiError> {
    if otp.trim().is_empty() {
        return Err(ApiError::Validation { field: "otp" });
    }
    let body = json!({ "otp": otp });
    http::request_ack(Verb::Post, "/users/me/verify-mobile-otp", Some(&body)).await
}
