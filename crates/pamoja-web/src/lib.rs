//! Pamoja Web Frontend
//!
//! Leptos-based WASM landing page and admin dashboard. All state lives in
//! `pamoja_core::AppState`; components only render it and dispatch events.

mod app;
mod checkout;
mod components;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
