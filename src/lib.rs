//! # cabinet-client
//!
//! Leptos + WASM frontend for the referral cabinet: authentication (login,
//! registration, password change), client-derived `Basic` token handling,
//! the referral-tree account page, a global loading/notification mechanism,
//! and guest/protected route guarding.
//!
//! The crate splits into a platform-neutral core (`config`, `net`, `state`,
//! `util`) that unit tests drive with injected transports and token stores,
//! and a thin browser shell (`app`, `pages`, `components`) on top of it.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach the client to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
