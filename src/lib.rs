//! # storefront-client
//!
//! Leptos + WASM frontend for the storefront: catalog browsing, cart
//! and wallet-funded checkout for customers, plus merchant and admin
//! dashboards behind role-scoped logins.
//!
//! This crate contains pages, components, application state, the route
//! guard, and the typed HTTP client for the storefront API.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
