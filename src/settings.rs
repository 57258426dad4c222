//! Dashboard Settings
//!
//! Provider endpoints and timing constants shared by the page and the
//! host. The page uses the defaults; the host reads them from the
//! `[dashboard]` section of its config file.

use serde::{Deserialize, Serialize};

use crate::clock::TICK_INTERVAL_MS;
use crate::location::{Coordinates, LocationResolver, DEFAULT_COORDINATES, GEOLOCATION_TIMEOUT_MS};
use crate::radar::{RADAR_BASE_URL, RADAR_ZOOM};

/// Default weather provider origin
pub const WEATHER_BASE_URL: &str = "https://api.open-meteo.com";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSettings {
    #[serde(default = "default_weather_base_url")]
    pub weather_base_url: String,

    #[serde(default = "default_radar_base_url")]
    pub radar_base_url: String,

    #[serde(default = "default_radar_zoom")]
    pub radar_zoom: u8,

    #[serde(default = "default_latitude")]
    pub default_latitude: f64,

    #[serde(default = "default_longitude")]
    pub default_longitude: f64,

    #[serde(default = "default_geolocation_timeout")]
    pub geolocation_timeout_ms: u32,

    #[serde(default = "default_clock_tick")]
    pub clock_tick_ms: u32,
}

fn default_weather_base_url() -> String {
    WEATHER_BASE_URL.to_string()
}

fn default_radar_base_url() -> String {
    RADAR_BASE_URL.to_string()
}

fn default_radar_zoom() -> u8 {
    RADAR_ZOOM
}

fn default_latitude() -> f64 {
    DEFAULT_COORDINATES.latitude
}

fn default_longitude() -> f64 {
    DEFAULT_COORDINATES.longitude
}

fn default_geolocation_timeout() -> u32 {
    GEOLOCATION_TIMEOUT_MS
}

fn default_clock_tick() -> u32 {
    TICK_INTERVAL_MS
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            weather_base_url: default_weather_base_url(),
            radar_base_url: default_radar_base_url(),
            radar_zoom: default_radar_zoom(),
            default_latitude: default_latitude(),
            default_longitude: default_longitude(),
            geolocation_timeout_ms: default_geolocation_timeout(),
            clock_tick_ms: default_clock_tick(),
        }
    }
}

impl DashboardSettings {
    pub fn default_coordinates(&self) -> Coordinates {
        Coordinates::new(self.default_latitude, self.default_longitude)
    }

    /// A fresh single-use resolver for this page load
    pub fn location_resolver(&self) -> LocationResolver {
        LocationResolver::new(self.default_coordinates(), self.geolocation_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = DashboardSettings::default();
        assert_eq!(settings.radar_zoom, 7);
        assert_eq!(settings.clock_tick_ms, 1000);
        assert_eq!(settings.location_resolver().timeout_ms(), 5000);
        assert_eq!(settings.default_coordinates(), DEFAULT_COORDINATES);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: DashboardSettings =
            serde_json::from_str(r#"{"radar_zoom": 5, "default_latitude": 1.5}"#).unwrap();
        assert_eq!(settings.radar_zoom, 5);
        assert_eq!(settings.default_latitude, 1.5);
        assert_eq!(settings.default_longitude, -74.0060);
        assert_eq!(settings.weather_base_url, WEATHER_BASE_URL);
    }
}
