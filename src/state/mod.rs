//! Shared client-side state.
//!
//! The only process-wide state is the session. Page data is owned by
//! the page that fetched it and dies with it.

pub mod auth;
