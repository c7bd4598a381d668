//! # admin-client
//!
//! Leptos + WASM frontend for the admin area of a cookie-session backend.
//!
//! The backend tracks login state server-side (Laravel Sanctum wire
//! protocol): the browser holds the session cookie, and state-changing
//! requests echo the `XSRF-TOKEN` cookie back in a header. This crate
//! contains the session store, the HTTP glue for the login handshake, the
//! route guard that keeps unauthenticated visitors on the login page, and
//! the two route-level pages the guard serves.

pub mod app;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Client entry point: mounts the application over server-rendered HTML.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
