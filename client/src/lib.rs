//! # client
//!
//! Leptos + WASM frontend for managing stage races.
//!
//! This crate contains the stage-race page, presentation components, the
//! list store with its reducer, the creation draft, and the REST client.
//! The host crate renders [`app::App`] with SSR; the `hydrate` feature builds
//! the browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
