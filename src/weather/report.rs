//! Forecast decoding and the weather widget view

use serde::{Deserialize, Serialize};
use std::fmt;

use super::codes::{describe, glyph};
use super::error::WeatherError;
use crate::location::Coordinates;

/// Placeholder shown while the request is in flight
pub const LOADING_TEXT: &str = "Fetching weather…";

/// Placeholder for a missing reading
const MISSING: &str = "—";

/// Forecast request URL for the given coordinates
///
/// `base` is the provider origin, e.g. `https://api.open-meteo.com`.
pub fn forecast_url(base: &str, coordinates: Coordinates) -> String {
    format!(
        "{}/v1/forecast?latitude={}&longitude={}&current_weather=true&hourly=temperature_2m&timezone=auto",
        base.trim_end_matches('/'),
        coordinates.latitude,
        coordinates.longitude
    )
}

/// Turn an HTTP status and body into a forecast
///
/// Any status outside 2xx is an error regardless of the body.
pub fn parse_forecast(status: u16, body: &str) -> Result<ForecastResponse, WeatherError> {
    if !(200..300).contains(&status) {
        return Err(WeatherError::Status(status));
    }
    Ok(serde_json::from_str(body)?)
}

/// Forecast endpoint response (only the fields the dashboard reads)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub current_weather: Option<CurrentWeather>,
    #[serde(default)]
    pub hourly: Option<HourlySeries>,
}

/// `current_weather` block; every field may be absent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub windspeed: Option<f64>,
    #[serde(default)]
    pub weathercode: Option<f64>,
}

impl CurrentWeather {
    /// Weather code as an integer, when the provider sent an integral value
    pub fn code(&self) -> Option<i64> {
        self.weathercode
            .filter(|c| c.is_finite() && c.fract() == 0.0)
            .map(|c| c as i64)
    }
}

/// `hourly` block: parallel arrays of local times and temperatures
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlySeries {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub temperature_2m: Vec<Option<f64>>,
}

/// One hour of the hourly series
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyPoint {
    pub time: String,
    pub temperature: Option<f64>,
}

impl ForecastResponse {
    /// Current conditions, empty when the block is missing
    pub fn current(&self) -> CurrentWeather {
        self.current_weather.clone().unwrap_or_default()
    }

    /// Up to `count` hours starting at the current observation time
    pub fn upcoming_hours(&self, count: usize) -> Vec<HourlyPoint> {
        let Some(hourly) = &self.hourly else {
            return Vec::new();
        };
        let now = self.current_weather.as_ref().and_then(|c| c.time.as_deref());

        hourly
            .time
            .iter()
            .zip(hourly.temperature_2m.iter())
            .filter(|(time, _)| now.map_or(true, |now| time.as_str() >= now))
            .take(count)
            .map(|(time, temperature)| HourlyPoint {
                time: time.clone(),
                temperature: *temperature,
            })
            .collect()
    }
}

/// Display-ready current conditions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherSummary {
    pub glyph: &'static str,
    /// Rounded temperature with a degree sign, or `—`
    pub temperature: String,
    pub description: &'static str,
    /// `Wind: <speed> km/h`, or `Wind: —`
    pub wind: String,
}

impl WeatherSummary {
    pub fn from_current(current: &CurrentWeather) -> Self {
        let code = current.code();
        let temperature = current
            .temperature
            .map(|t| format!("{}°", (t + 0.5).floor() as i64))
            .unwrap_or_else(|| MISSING.to_string());
        let wind = current
            .windspeed
            .map(|w| format!("Wind: {} km/h", w))
            .unwrap_or_else(|| format!("Wind: {}", MISSING));

        Self {
            glyph: glyph(code),
            temperature,
            description: describe(code),
            wind,
        }
    }
}

impl fmt::Display for WeatherSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} · {}",
            self.glyph, self.temperature, self.description, self.wind
        )
    }
}

/// What the weather widget currently shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WeatherView {
    #[default]
    Loading,
    Ready(WeatherSummary),
    /// Error message, shown verbatim
    Failed(String),
}

impl WeatherView {
    pub fn from_result(result: Result<ForecastResponse, WeatherError>) -> Self {
        match result {
            Ok(forecast) => WeatherView::Ready(WeatherSummary::from_current(&forecast.current())),
            Err(e) => WeatherView::Failed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "latitude": 40.71,
        "longitude": -74.01,
        "timezone": "America/New_York",
        "current_weather": {
            "time": "2026-10-19T14:00",
            "temperature": 17.5,
            "windspeed": 11.3,
            "winddirection": 250,
            "weathercode": 2
        },
        "hourly": {
            "time": ["2026-10-19T12:00", "2026-10-19T13:00", "2026-10-19T14:00", "2026-10-19T15:00", "2026-10-19T16:00"],
            "temperature_2m": [15.9, 16.8, 17.5, null, 16.1]
        }
    }"#;

    #[test]
    fn test_forecast_url() {
        let url = forecast_url(
            "https://api.open-meteo.com/",
            Coordinates::new(40.7128, -74.006),
        );
        assert_eq!(
            url,
            "https://api.open-meteo.com/v1/forecast?latitude=40.7128&longitude=-74.006&current_weather=true&hourly=temperature_2m&timezone=auto"
        );
    }

    #[test]
    fn test_parse_sample() {
        let forecast = parse_forecast(200, SAMPLE).unwrap();
        let summary = WeatherSummary::from_current(&forecast.current());

        assert_eq!(summary.glyph, "⛅");
        assert_eq!(summary.temperature, "18°");
        assert_eq!(summary.description, "Partly cloudy");
        assert_eq!(summary.wind, "Wind: 11.3 km/h");
        assert_eq!(summary.to_string(), "⛅ 18° Partly cloudy · Wind: 11.3 km/h");
    }

    #[test]
    fn test_upcoming_hours_start_at_observation() {
        let forecast = parse_forecast(200, SAMPLE).unwrap();
        let hours = forecast.upcoming_hours(2);
        assert_eq!(hours.len(), 2);
        assert_eq!(hours[0].time, "2026-10-19T14:00");
        assert_eq!(hours[1].temperature, None);

        assert!(ForecastResponse::default().upcoming_hours(3).is_empty());
    }

    #[test]
    fn test_missing_fields_render_placeholders() {
        let forecast = parse_forecast(200, "{}").unwrap();
        let summary = WeatherSummary::from_current(&forecast.current());
        assert_eq!(summary.temperature, "—");
        assert_eq!(summary.wind, "Wind: —");
        assert_eq!(summary.description, "Unknown");
        assert_eq!(summary.glyph, "🔆");
    }

    #[test]
    fn test_temperature_rounds_half_up() {
        let summary = |t: f64| {
            WeatherSummary::from_current(&CurrentWeather {
                temperature: Some(t),
                ..Default::default()
            })
            .temperature
        };
        assert_eq!(summary(-2.5), "-2°");
        assert_eq!(summary(-0.3), "0°");
        assert_eq!(summary(21.5), "22°");
        assert_eq!(summary(21.49), "21°");
    }

    #[test]
    fn test_whole_wind_speed_has_no_fraction() {
        let current = CurrentWeather {
            windspeed: Some(12.0),
            weathercode: Some(0.0),
            ..Default::default()
        };
        let summary = WeatherSummary::from_current(&current);
        assert_eq!(summary.wind, "Wind: 12 km/h");
        assert_eq!(summary.description, "Clear sky");
    }

    #[test]
    fn test_non_integral_code_is_unknown() {
        let current = CurrentWeather {
            weathercode: Some(2.5),
            ..Default::default()
        };
        assert_eq!(current.code(), None);
        assert_eq!(WeatherSummary::from_current(&current).description, "Unknown");
    }

    #[test]
    fn test_failed_status_becomes_error_view() {
        let view = WeatherView::from_result(parse_forecast(500, r#"{"error":true}"#));
        assert_eq!(view, WeatherView::Failed("Weather API error".to_string()));
    }

    #[test]
    fn test_bad_body_becomes_error_view() {
        let view = WeatherView::from_result(parse_forecast(200, "<html>"));
        match view {
            WeatherView::Failed(message) => assert!(!message.is_empty()),
            other => panic!("expected failure, got {:?}", other),
        }
    }
}
