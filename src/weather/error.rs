//! Weather fetch errors
//!
//! The `Display` text of each variant is rendered verbatim in the weather
//! widget's error element.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WeatherError {
    /// The provider answered with a non-success status
    #[error("Weather API error")]
    Status(u16),

    /// The request never completed
    #[error("{0}")]
    Network(String),

    /// The body was not the expected JSON
    #[error("{0}")]
    Decode(String),
}

impl From<serde_json::Error> for WeatherError {
    fn from(err: serde_json::Error) -> Self {
        WeatherError::Decode(err.to_string())
    }
}
