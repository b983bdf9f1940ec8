//! Single HTTP transport for the API layer.
//!
//! Browser builds (`csr`) perform real fetches via `gloo-net`, always
//! with `credentials: include` so the backend session cookie rides
//! along. Native builds stub the transport — the decoding half is pure
//! and is what the tests exercise.
//!
//! No retries, no timeouts, no token storage: the adapter is a deliberate
//! pass-through to the backend.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::de::DeserializeOwned;

use crate::net::error::ApiError;
use crate::net::types::{Envelope, ErrorBody};

/// HTTP verbs the API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// Issue a request and decode the envelope's `data` payload.
pub async fn request<T: DeserializeOwned>(
    verb: Verb,
    path: &str,
    body: Option<&serde_json::Value>,
) -> Result<T, ApiError> {
    let (status, text) = dispatch(verb, path, body).await?;
    decode_envelope(status, &text)
}

/// Issue a request where only the envelope's `success` matters
/// (logout, password and OTP endpoints answer without `data`).
pub async fn request_ack(
    verb: Verb,
    path: &str,
    body: Option<&serde_json::Value>,
) -> Result<(), ApiError> {
    let (status, text) = dispatch(verb, path, body).await?;
    decode_ack(status, &text)
}

/// Issue a multipart request. Browser-only: `FormData` does not exist
/// off-wasm, so callers gate on `csr` themselves.
#[cfg(feature = "csr")]
pub async fn request_form<T: DeserializeOwned>(
    verb: Verb,
    path: &str,
    form: web_sys::FormData,
) -> Result<T, ApiError> {
    let builder = builder(verb, path);
    let request = builder
        .body(form)
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let (status, text) = exchange(request).await?;
    decode_envelope(status, &text)
}

/// Decode a `{ success, data, message }` envelope into its payload.
///
/// Pure over `(status, body)` so the browser transport and the native
/// tests share exactly the same normalization.
pub fn decode_envelope<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !success_status(status) {
        return Err(api_failure(status, body));
    }
    let envelope: Envelope<T> = serde_json::from_str(body)
        .map_err(|e| ApiError::Transport(format!("invalid response body: {e}")))?;
    if !envelope.success {
        return Err(ApiError::Api {
            message: envelope
                .message
                .unwrap_or_else(|| "request failed".to_owned()),
            code: status,
        });
    }
    envelope
        .data
        .ok_or_else(|| ApiError::Transport("response envelope missing data".to_owned()))
}

/// Like [`decode_envelope`] but tolerates a missing `data` field.
pub fn decode_ack(status: u16, body: &str) -> Result<(), ApiError> {
    if !success_status(status) {
        return Err(api_failure(status, body));
    }
    let envelope: Envelope<serde_json::Value> = serde_json::from_str(body)
        .map_err(|e| ApiError::Transport(format!("invalid response body: {e}")))?;
    if envelope.success {
        Ok(())
    } else {
        Err(ApiError::Api {
            message: envelope
                .message
                .unwrap_or_else(|| "request failed".to_owned()),
            code: status,
        })
    }
}

fn success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Normalize a non-2xx response: the backend's `{ message }` when the
/// body carries one, a generic status-tagged message otherwise.
fn api_failure(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| format!("request failed with status {status}"));
    ApiError::Api {
        message,
        code: status,
    }
}

#[cfg(feature = "csr")]
fn builder(verb: Verb, path: &str) -> gloo_net::http::RequestBuilder {
    use gloo_net::http::{Method, RequestBuilder};

    let method = match verb {
        Verb::Get => Method::GET,
        Verb::Post => Method::POST,
        Verb::Put => Method::PUT,
        Verb::Patch => Method::PATCH,
        Verb::Delete => Method::DELETE,
    };
    RequestBuilder::new(&crate::net::api_url(path))
        .method(method)
        .credentials(web_sys::RequestCredentials::Include)
}

#[cfg(feature = "csr")]
async fn exchange(request: gloo_net::http::Request) -> Result<(u16, String), ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    Ok((status, text))
}

#[cfg(feature = "csr")]
async fn dispatch(
    verb: Verb,
    path: &str,
    body: Option<&serde_json::Value>,
) -> Result<(u16, String), ApiError> {
    let builder = builder(verb, path);
    let request = match body {
        Some(value) => builder.json(value),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Transport(e.to_string()))?;
    exchange(request).await
}

#[cfg(not(feature = "csr"))]
async fn dispatch(
    _verb: Verb,
    _path: &str,
    _body: Option<&serde_json::Value>,
) -> Result<(u16, String), ApiError> {
    Err(off_browser())
}

/// Error returned when network code runs outside a browser build.
#[cfg(not(feature = "csr"))]
pub(crate) fn off_browser() -> ApiError {
    ApiError::Transport("network requests require a browser context".to_owned())
}

/// Append an [`ImageUpload`](crate::net::types::ImageUpload) to a form
/// as a named file part.
#[cfg(feature = "csr")]
pub(crate) fn append_image(
    form: &web_sys::FormData,
    field: &str,
    image: &crate::net::types::ImageUpload,
) -> Result<(), ApiError> {
    let bytes = js_sys::Uint8Array::from(image.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes.into());
    let props = web_sys::BlobPropertyBag::new();
    props.set_type(&image.mime_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &props)
        .map_err(|_| ApiError::Transport("could not build image blob".to_owned()))?;
    form.append_with_blob_and_filename(field, &blob, &image.file_name)
        .map_err(|_| ApiError::Transport("could not attach image".to_owned()))?;
    Ok(())
}
