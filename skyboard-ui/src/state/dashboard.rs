//! Dashboard State
//!
//! One [`Dashboard`] per page load, plus the reactive signals the widgets
//! render from.

use chrono::Utc;
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use skyboard::{Coordinates, Dashboard, DashboardSettings, KeyValueStore, WeatherView, ZonePreference};

use crate::storage::LocalStorage;

/// Dashboard state provided to all components
///
/// Never hold a borrow of `dashboard` while setting a signal: effects run
/// synchronously and may borrow it again.
#[derive(Clone)]
pub struct DashboardState {
    pub dashboard: Rc<RefCell<Dashboard>>,
    /// Current text of the time display
    pub clock_text: RwSignal<String>,
    /// Mirrors the persisted zone preference
    pub timezone: RwSignal<ZonePreference>,
    /// Settled location; `None` until the location request answers
    pub coordinates: RwSignal<Option<Coordinates>>,
    pub weather: RwSignal<WeatherView>,
}

/// Boot the dashboard and provide it to the component tree
pub fn provide_dashboard_state() {
    let kv: Rc<dyn KeyValueStore> = Rc::new(LocalStorage::new());
    let dashboard = Dashboard::boot(kv, DashboardSettings::default());
    let timezone = dashboard.timezone().clone();

    let state = DashboardState {
        dashboard: Rc::new(RefCell::new(dashboard)),
        clock_text: create_rw_signal(String::new()),
        timezone: create_rw_signal(timezone),
        coordinates: create_rw_signal(None),
        weather: create_rw_signal(WeatherView::Loading),
    };

    provide_context(state);
}

impl DashboardState {
    /// Re-render the clock text for the current instant
    pub fn tick(&self) {
        let text = self.dashboard.borrow().clock_text(Utc::now());
        self.clock_text.set(text);
    }

    /// Dropdown change; the clock picks it up on its next tick
    pub fn select_timezone(&self, value: &str) {
        let preference = self.dashboard.borrow_mut().select_timezone(value);
        self.timezone.set(preference);
    }
}
