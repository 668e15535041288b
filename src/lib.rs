//! # tidecast
//!
//! Leptos + WASM frontend for the Tidecast live-streaming platform. Every
//! registered user is a channel; the watch page couples a video embed with
//! a per-channel live chat carried over a duplex WebSocket connection.
//!
//! This crate contains pages, components, application state, the REST
//! helpers, and the chat channel connection. Session-token-gated actions
//! (sending chat, moderation) degrade to read-only for anonymous visitors.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
