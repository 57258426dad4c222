//! Weather
//!
//! Current conditions from the Open-Meteo forecast endpoint.
//!
//! - **codes**: WMO weather code → description and glyph tables
//! - **report**: Response decoding and the rendered widget view
//! - **error**: `WeatherError`, whose message is what the widget shows
//! - **client**: Native `reqwest` client (host feature)
//!
//! Every render issues exactly one request: no caching, no retry.

pub mod codes;
pub mod error;
pub mod report;

#[cfg(feature = "host")]
pub mod client;

pub use codes::{describe, glyph, FALLBACK_DESCRIPTION, FALLBACK_GLYPH};
pub use error::WeatherError;
pub use report::{
    forecast_url, parse_forecast, CurrentWeather, ForecastResponse, HourlyPoint, HourlySeries,
    WeatherSummary, WeatherView, LOADING_TEXT,
};

#[cfg(feature = "host")]
pub use client::WeatherClient;
