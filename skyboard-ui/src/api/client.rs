//! Forecast Client
//!
//! Browser `fetch` of the forecast endpoint through gloo-net.

use gloo_net::http::Request;

use skyboard::weather::{parse_forecast, ForecastResponse, WeatherError};

/// Fetch and decode a forecast; one attempt, no retry
pub async fn fetch_forecast(url: &str) -> Result<ForecastResponse, WeatherError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| WeatherError::Network(format!("Network error: {}", e)))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| WeatherError::Network(format!("Network error: {}", e)))?;

    parse_forecast(status, &body)
}
