//! Location Resolver
//!
//! One location attempt per page load. Whatever the runtime answers, the
//! resolver settles on a coordinate pair: the resolved position, or the
//! fallback when the capability is missing, denied, or too slow.

use serde::{Deserialize, Serialize};

/// New York, used when no position is available
pub const DEFAULT_COORDINATES: Coordinates = Coordinates {
    latitude: 40.7128,
    longitude: -74.0060,
};

/// How long the runtime may take to answer
pub const GEOLOCATION_TIMEOUT_MS: u32 = 5000;

/// A latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl Default for Coordinates {
    fn default() -> Self {
        DEFAULT_COORDINATES
    }
}

/// What the runtime reported for a location request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocationOutcome {
    Resolved(Coordinates),
    Denied,
    TimedOut,
    /// No location capability, or the position could not be determined
    Unavailable,
}

impl LocationOutcome {
    /// Map a `GeolocationPositionError.code`
    pub fn from_error_code(code: u16) -> Self {
        match code {
            1 => LocationOutcome::Denied,
            3 => LocationOutcome::TimedOut,
            _ => LocationOutcome::Unavailable,
        }
    }
}

/// Single-use resolver; settling consumes it
#[derive(Debug)]
pub struct LocationResolver {
    fallback: Coordinates,
    timeout_ms: u32,
}

impl Default for LocationResolver {
    fn default() -> Self {
        Self::new(DEFAULT_COORDINATES, GEOLOCATION_TIMEOUT_MS)
    }
}

impl LocationResolver {
    pub fn new(fallback: Coordinates, timeout_ms: u32) -> Self {
        Self {
            fallback,
            timeout_ms,
        }
    }

    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    pub fn fallback(&self) -> Coordinates {
        self.fallback
    }

    /// Settle on coordinates for this page load
    pub fn settle(self, outcome: LocationOutcome) -> Coordinates {
        match outcome {
            LocationOutcome::Resolved(coordinates) if coordinates.is_valid() => {
                tracing::info!(
                    latitude = coordinates.latitude,
                    longitude = coordinates.longitude,
                    "Location resolved"
                );
                coordinates
            }
            other => {
                tracing::info!("Using fallback location ({:?})", other);
                self.fallback
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolved_position_wins() {
        let here = Coordinates::new(51.5072, -0.1276);
        assert_eq!(
            LocationResolver::default().settle(LocationOutcome::Resolved(here)),
            here
        );
    }

    #[test]
    fn test_failures_use_new_york() {
        for outcome in [
            LocationOutcome::Denied,
            LocationOutcome::TimedOut,
            LocationOutcome::Unavailable,
            LocationOutcome::Resolved(Coordinates::new(f64::NAN, 0.0)),
            LocationOutcome::Resolved(Coordinates::new(91.0, 0.0)),
        ] {
            let coordinates = LocationResolver::default().settle(outcome);
            assert_eq!(coordinates, Coordinates::new(40.7128, -74.0060));
        }
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(LocationOutcome::from_error_code(1), LocationOutcome::Denied);
        assert_eq!(LocationOutcome::from_error_code(2), LocationOutcome::Unavailable);
        assert_eq!(LocationOutcome::from_error_code(3), LocationOutcome::TimedOut);
    }

    #[test]
    fn test_custom_fallback() {
        let resolver = LocationResolver::new(Coordinates::new(35.68, 139.69), 2500);
        assert_eq!(resolver.timeout_ms(), 2500);
        assert_eq!(
            resolver.settle(LocationOutcome::Denied),
            Coordinates::new(35.68, 139.69)
        );
    }
}
