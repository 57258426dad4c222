//! Forecast HTTP Client
//!
//! Native client for the forecast endpoint, used by the `forecast`
//! command. The page performs the same request through the browser.

use reqwest::Client;
use std::time::Duration;

use super::error::WeatherError;
use super::report::{forecast_url, parse_forecast, ForecastResponse};
use crate::location::Coordinates;

/// Request timeout for a forecast fetch
pub const REQUEST_TIMEOUT_MS: u64 = 10_000;

pub struct WeatherClient {
    client: Client,
    base_url: String,
}

impl WeatherClient {
    /// Create a client against a provider origin
    pub fn new(base_url: impl Into<String>) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(REQUEST_TIMEOUT_MS))
            .build()
            .map_err(|e| WeatherError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the forecast for `coordinates`
    ///
    /// One attempt, no retry. The status is checked before the body is
    /// decoded.
    pub async fn fetch(&self, coordinates: Coordinates) -> Result<ForecastResponse, WeatherError> {
        let url = forecast_url(&self.base_url, coordinates);
        tracing::debug!(%url, "Fetching forecast");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                WeatherError::Network(format!("Request timed out: {}", e))
            } else {
                WeatherError::Network(format!("Network error: {}", e))
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| WeatherError::Network(format!("Network error: {}", e)))?;

        parse_forecast(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};

    async fn spawn_provider(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_server_error_maps_to_status() {
        let base = spawn_provider(Router::new().route(
            "/v1/forecast",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        ))
        .await;

        let client = WeatherClient::new(base).unwrap();
        let err = client.fetch(Coordinates::default()).await.unwrap_err();
        assert_eq!(err, WeatherError::Status(500));
        assert_eq!(err.to_string(), "Weather API error");
    }

    #[tokio::test]
    async fn test_fetch_decodes_current_weather() {
        let body = r#"{
            "latitude": 35.7,
            "longitude": 139.7,
            "timezone": "Asia/Tokyo",
            "current_weather": {"time": "2026-10-19T15:00", "temperature": 18.4, "windspeed": 7.2, "weathercode": 2},
            "hourly": {"time": ["2026-10-19T15:00", "2026-10-19T16:00"], "temperature_2m": [18.4, 17.9]}
        }"#;
        let base = spawn_provider(Router::new().route("/v1/forecast", get(move || async move { body })))
            .await;

        let client = WeatherClient::new(format!("{}/", base)).unwrap();
        let forecast = client.fetch(Coordinates::new(35.7, 139.7)).await.unwrap();

        assert_eq!(forecast.current().code(), Some(2));
        assert_eq!(forecast.upcoming_hours(5).len(), 2);
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let base = spawn_provider(Router::new().route(
            "/v1/forecast",
            get(|| async { "<html>maintenance</html>" }),
        ))
        .await;

        let client = WeatherClient::new(base).unwrap();
        let err = client.fetch(Coordinates::default()).await.unwrap_err();
        assert!(matches!(err, WeatherError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_network_error() {
        // Bind then drop to get a port with nothing listening
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = WeatherClient::new(format!("http://{}", addr)).unwrap();
        let err = client.fetch(Coordinates::default()).await.unwrap_err();
        assert!(matches!(err, WeatherError::Network(_)));
    }
}
