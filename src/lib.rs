//! # Skyboard
//!
//! A personal dashboard page: a clock with a selectable timezone, current
//! weather for the visitor's location, and an embedded radar map. Each
//! widget can be dragged and resized, and its geometry is kept in a
//! key-value store.
//!
//! The core is platform-neutral and compiles for the browser. The `host`
//! feature (on by default) adds the native static server, the forecast
//! client and the config/logging plumbing.
//!
//! ## Modules
//!
//! - [`layout`]: Widget geometry and its persistence
//! - [`gesture`]: Drag/resize state machine per widget
//! - [`timezone`]: Zone preference and the dropdown options
//! - [`clock`]: Clock text for an instant and a preference
//! - [`weather`]: Forecast decoding and the widget view
//! - [`location`]: Location outcome to coordinates, with fallback
//! - [`radar`]: Radar embed URLs
//! - [`dashboard`]: Per-page state tying the above together
//! - [`server`]: Static host for the built page (host feature)
//!
//! ## Quick Start
//!
//! ```rust
//! use skyboard::{Dashboard, DashboardSettings, MemoryStore, WidgetKind};
//! use skyboard::layout::Size;
//! use std::rc::Rc;
//!
//! let mut dashboard = Dashboard::boot(Rc::new(MemoryStore::new()), DashboardSettings::default());
//! let record = dashboard.attach(WidgetKind::Clock.class_name(), Size::new(260, 110));
//! assert_eq!(record.widget_id.as_str(), "widget-time-widget");
//!
//! dashboard.select_timezone("Asia/Tokyo");
//! assert_eq!(dashboard.timezone().as_value(), "Asia/Tokyo");
//! ```

pub mod clock;
pub mod dashboard;
pub mod gesture;
pub mod layout;
pub mod location;
pub mod radar;
pub mod settings;
pub mod timezone;
pub mod weather;
pub mod widget;

#[cfg(feature = "host")]
pub mod config;
#[cfg(feature = "host")]
pub mod server;

// Re-export top-level types for convenience
pub use dashboard::Dashboard;

pub use layout::{
    KeyValueStore, LayoutStore, MemoryStore, Position, Size, StoreError, StoreResult, WidgetId,
    WidgetLayoutRecord,
};

pub use gesture::{GestureKind, Point, PointerTarget, WidgetController};

pub use location::{Coordinates, LocationOutcome, LocationResolver};

pub use radar::RadarView;

pub use settings::DashboardSettings;

pub use timezone::{TimezoneSelector, ZonePreference};

pub use weather::{ForecastResponse, WeatherError, WeatherSummary, WeatherView};

pub use widget::WidgetKind;

#[cfg(feature = "host")]
pub use config::{Config, ConfigError, LoadReport, LoggingConfig, ServerConfig};

#[cfg(feature = "host")]
pub use server::{build_router, serve, ServerError, ServerState};
