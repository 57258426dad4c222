//! Dashboard State
//!
//! Owns everything the page mutates: the storage handle, layout store,
//! timezone selector and one gesture controller per attached widget. The
//! DOM layer routes events here by widget id and applies what comes back.
//!
//! # Page lifecycle
//!
//! ```text
//!   boot()            clear layout keys, load zone preference
//!   attach(widget)    restore stored geometry (normally none, see boot)
//!   pointer_*(id)     drive that widget's gesture, persist on pointer-up
//!   select_timezone   persist preference, next clock tick picks it up
//! ```

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::clock;
use crate::gesture::{GestureEnd, GestureStart, Point, PointerTarget, WidgetController, WidgetFrame};
use crate::layout::{KeyValueStore, LayoutStore, Size, WidgetId, WidgetLayoutRecord};
use crate::location::Coordinates;
use crate::radar::RadarView;
use crate::settings::DashboardSettings;
use crate::timezone::{TimezoneSelector, ZoneOption, ZonePreference};
use crate::weather;

pub struct Dashboard {
    layout: LayoutStore,
    timezone: TimezoneSelector,
    widgets: BTreeMap<WidgetId, WidgetController>,
    settings: DashboardSettings,
}

impl Dashboard {
    /// Start a page load
    ///
    /// Layout entries are removed first, so widgets always attach at their
    /// flow position with their natural size. The zone preference is kept.
    pub fn boot(kv: Rc<dyn KeyValueStore>, settings: DashboardSettings) -> Self {
        let layout = LayoutStore::new(Rc::clone(&kv));
        let cleared = layout.clear_all();
        let timezone = TimezoneSelector::new(kv);

        tracing::info!(
            cleared,
            timezone = %timezone.preference(),
            "Dashboard booted"
        );

        Self {
            layout,
            timezone,
            widgets: BTreeMap::new(),
            settings,
        }
    }

    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    pub fn layout(&self) -> &LayoutStore {
        &self.layout
    }

    /// Register a widget element and return the geometry to apply
    ///
    /// Widgets with identical class lists share an id; attaching again
    /// replaces the earlier controller.
    pub fn attach(&mut self, class_name: &str, measured: Size) -> WidgetLayoutRecord {
        let id = WidgetId::from_class_name(class_name);
        let record = self.layout.restore(&id, measured);
        tracing::debug!(widget = %id, ?record, "Widget attached");

        self.widgets.insert(id, WidgetController::new(record.clone()));
        record
    }

    pub fn widget(&self, id: &WidgetId) -> Option<&WidgetController> {
        self.widgets.get(id)
    }

    pub fn widget_count(&self) -> usize {
        self.widgets.len()
    }

    pub fn pointer_down(
        &mut self,
        id: &WidgetId,
        target: PointerTarget,
        pointer: Point,
        pointer_id: i32,
    ) -> Option<GestureStart> {
        self.widgets
            .get_mut(id)?
            .pointer_down(target, pointer, pointer_id)
    }

    pub fn pointer_move(&mut self, id: &WidgetId, pointer: Point) -> Option<WidgetFrame> {
        self.widgets.get_mut(id)?.pointer_move(pointer)
    }

    pub fn pointer_up(&mut self, id: &WidgetId) -> Option<GestureEnd> {
        let layout = &self.layout;
        self.widgets.get_mut(id)?.pointer_up(layout)
    }

    pub fn timezone(&self) -> &ZonePreference {
        self.timezone.preference()
    }

    /// Value of the time element's `data-timezone` attribute
    pub fn timezone_attribute(&self) -> &str {
        self.timezone.data_attribute()
    }

    pub fn zone_options(&self) -> &'static [ZoneOption] {
        self.timezone.options()
    }

    /// Dropdown change handler
    pub fn select_timezone(&mut self, value: &str) -> ZonePreference {
        self.timezone.select(value).clone()
    }

    /// Clock text for `now` under the active preference
    pub fn clock_text(&self, now: DateTime<Utc>) -> String {
        clock::render(now, self.timezone.preference())
    }

    pub fn forecast_url(&self, coordinates: Coordinates) -> String {
        weather::forecast_url(&self.settings.weather_base_url, coordinates)
    }

    pub fn radar_view(&self, coordinates: Coordinates) -> RadarView {
        RadarView::new(
            &self.settings.radar_base_url,
            coordinates,
            self.settings.radar_zoom,
        )
    }
}
