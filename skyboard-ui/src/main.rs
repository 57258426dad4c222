//! Skyboard Page
//!
//! Personal dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Clock with a persisted timezone choice
//! - Current weather for the visitor's location
//! - Embedded radar map
//! - Drag to move and resize from the corner, per widget
//!
//! # Architecture
//!
//! Client-side rendered Leptos application. All dashboard behaviour lives
//! in the `skyboard` crate; this crate binds it to the DOM, `localStorage`,
//! `fetch` and the geolocation API.

use leptos::*;

mod api;
mod app;
mod components;
mod location;
mod state;
mod storage;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
