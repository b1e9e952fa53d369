//! # draw-dashboard
//!
//! Leptos + WASM frontend for the tournament administration dashboard.
//!
//! This crate contains the layout shell, pages, the draw stage with its
//! size/controls hooks, and the REST client used to fetch and publish
//! tournament draws. The `server` crate hosts it with SSR; the `hydrate`
//! feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod services;
pub mod stage;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logging unavailable: {err}").into());
    }
    log::info!("draw-dashboard hydrating");
    leptos::mount::hydrate_body(app::App);
}
