//! API Module
//!
//! Network calls made by the page.

pub mod client;

pub use client::fetch_forecast;
