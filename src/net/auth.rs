//! Authentication endpoints.
//!
//! Credentials live in a backend-managed httpOnly cookie; these calls
//! only move user payloads. The session store itself is in
//! [`crate::state::auth`].

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::Deserialize;
use serde_json::json;

use crate::net::error::ApiError;
use crate::net::http::{self, Verb};
use crate::net::types::User;

/// Login-shaped endpoints wrap the account in `{ user }`.
#[derive(Debug, Deserialize)]
struct AuthData {
    user: User,
}

/// `POST /auth/login`.
pub async fn login(email: &str, password: &str) -> Result<User, ApiError> {
    if email.trim().is_empty() {
        return Err(ApiError::Validation { field: "email" });
    }
    if password.is_empty() {
        return Err(ApiError::Validation { field: "password" });
    }
    let body = json!({ "email": email, "password": password });
    let data: AuthData = http::request(Verb::Post, "/auth/login", Some(&body)).await?;
    Ok(data.user)
}

/// `POST /auth/register`.
pub async fn register(
    full_name: &str,
    username: &str,
    email: &str,
    password: &str,
) -> Result<User, ApiError> {
    if full_name.trim().is_empty() {
        return Err(ApiError::Validation { field: "fullName" });
    }
    if username.trim().is_empty() {
        return Err(ApiError::Validation { field: "username" });
    }
    if email.trim().is_empty() {
        return Err(ApiError::Validation { field: "email" });
    }
    if password.is_empty() {
        return Err(ApiError::Validation { field: "password" });
    }
    let body = json!({
        "fullName": full_name,
        "username": username,
        "email": email,
        "password": password,
    });
    let data: AuthData = http::request(Verb::Post, "/auth/register", Some(&body)).await?;
    Ok(data.user)
}

/// `POST /auth/google-login` with a Google Identity credential.
pub async fn google_login(credential: &str) -> Result<User, ApiError> {
    if credential.is_empty() {
        return Err(ApiError::Validation { field: "credential" });
    }
    let body = json!({ "credential": credential });
    let data: AuthData = http::request(Verb::Post, "/auth/google-login", Some(&body)).await?;
    Ok(data.user)
}

/// `POST /auth/logout`. Invalidates the backend session cookie.
pub async fn logout() -> Result<(), ApiError> {
    http::request_ack(Verb::Post, "/auth/logout", None).await
}

/// `POST /auth/forgot-password`.
pub async fn forgot_password(email: &str) -> Result<(), ApiError> {
    if email.trim().is_empty() {
        return Err(ApiError::Validation { field: "email" });
    }
    let body = json!({ "email": email });
    http::request_ack(Verb::Post, "/auth/forgot-password", Some(&body)).await
}

/// `GET /users/me` — the session-restore probe. Fails with a 401
/// `ApiError::Api` when no valid session cookie is present.
pub async fn current_user() -> Result<User, ApiError> {
    http::request(Verb::Get, "/users/me", None).await
}
