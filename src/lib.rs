//! Cyberfolio - personal portfolio page
//!
//! A single-page portfolio with a timed loading screen, section-switching
//! navigation and staggered entrance animations, built with Leptos and
//! WebAssembly.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
