//! Timezone Selector
//!
//! A single persisted zone preference driving the clock widget. The
//! preference survives reloads; layout clearing never touches it.

use std::fmt;
use std::rc::Rc;

use crate::layout::KeyValueStore;

/// Storage key holding the selected zone
pub const TIMEZONE_KEY: &str = "weather-tz";

/// Sentinel value meaning "use the local zone"
pub const AUTO_ZONE: &str = "auto";

/// One entry of the zone dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Zones offered by the dropdown, in display order
pub const ZONES: &[ZoneOption] = &[
    ZoneOption { value: AUTO_ZONE, label: "Auto (local)" },
    ZoneOption { value: "UTC", label: "UTC" },
    ZoneOption { value: "America/New_York", label: "New York (America/New_York)" },
    ZoneOption { value: "America/Chicago", label: "Chicago (America/Chicago)" },
    ZoneOption { value: "America/Los_Angeles", label: "Los Angeles (America/Los_Angeles)" },
    ZoneOption { value: "Europe/London", label: "London (Europe/London)" },
    ZoneOption { value: "Europe/Paris", label: "Paris (Europe/Paris)" },
    ZoneOption { value: "Asia/Tokyo", label: "Tokyo (Asia/Tokyo)" },
    ZoneOption { value: "Australia/Sydney", label: "Sydney (Australia/Sydney)" },
];

/// The user's zone choice
///
/// `Zone` holds any identifier, including ones outside [`ZONES`]; the clock
/// decides at render time whether it can be honoured.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ZonePreference {
    #[default]
    Auto,
    Zone(String),
}

impl ZonePreference {
    /// Parse a dropdown or storage value; empty means auto
    pub fn from_value(value: &str) -> Self {
        if value.is_empty() || value == AUTO_ZONE {
            ZonePreference::Auto
        } else {
            ZonePreference::Zone(value.to_string())
        }
    }

    /// Value written to storage and to the `data-timezone` attribute
    pub fn as_value(&self) -> &str {
        match self {
            ZonePreference::Auto => AUTO_ZONE,
            ZonePreference::Zone(id) => id,
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, ZonePreference::Auto)
    }
}

impl fmt::Display for ZonePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_value())
    }
}

/// Owner of the persisted zone preference
pub struct TimezoneSelector {
    kv: Rc<dyn KeyValueStore>,
    preference: ZonePreference,
}

impl TimezoneSelector {
    /// Load the saved preference, defaulting to auto
    pub fn new(kv: Rc<dyn KeyValueStore>) -> Self {
        let saved = match kv.get_item(TIMEZONE_KEY) {
            Ok(value) => value.unwrap_or_default(),
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", TIMEZONE_KEY, e);
                String::new()
            }
        };

        Self {
            kv,
            preference: ZonePreference::from_value(&saved),
        }
    }

    pub fn options(&self) -> &'static [ZoneOption] {
        ZONES
    }

    pub fn preference(&self) -> &ZonePreference {
        &self.preference
    }

    /// Value for the time element's `data-timezone` attribute
    pub fn data_attribute(&self) -> &str {
        self.preference.as_value()
    }

    /// Handle a dropdown change: update and persist the preference
    pub fn select(&mut self, value: &str) -> &ZonePreference {
        self.preference = ZonePreference::from_value(value);
        if let Err(e) = self.kv.set_item(TIMEZONE_KEY, self.preference.as_value()) {
            tracing::warn!("Failed to persist {}: {}", TIMEZONE_KEY, e);
        }
        tracing::info!("Timezone set to {}", self.preference);
        &self.preference
    }
}
