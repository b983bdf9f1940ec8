//! # bolify-client
//!
//! Leptos + WASM single-page client for the Bolify blogging platform.
//! All data comes from the platform's REST API under `/api/v1`; the
//! backend session cookie is the only credential and is never touched
//! directly by this crate.
//!
//! This crate contains pages, components, the shared session state, and
//! the typed API layer. Browser-only code (network I/O, DOM access,
//! mounting) is gated behind the `csr` feature so the pure logic builds
//! and tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point. Mounts the application into `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
