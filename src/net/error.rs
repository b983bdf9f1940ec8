//! Normalized error type for the API layer.
//!
//! Every service function returns `Result<T, ApiError>`; raw transport
//! errors never escape to pages. The variants are tagged so callers
//! match exhaustively instead of probing an optional `message` field.

/// Failure surfaced by any API call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No usable response: network failure, fetch rejection, or a body
    /// that could not be decoded.
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend reported a failure, either via a non-2xx status or a
    /// `success: false` envelope. `message` is the backend's own text
    /// when present.
    #[error("{message}")]
    Api { message: String, code: u16 },

    /// Rejected client-side before dispatch; nothing was sent.
    #[error("missing or invalid field: {field}")]
    Validation { field: &'static str },
}

impl ApiError {
    /// The message pages show the user.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// True for the expected "no valid session" outcome of the initial
    /// session check.
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, ApiError::Api { code: 401, .. })
    }
}
