//! Widget kinds
//!
//! The three panels on the dashboard and the DOM-facing facts about each:
//! the class list (which also determines the storage id), the container
//! the renderer writes into, and its heading.

use crate::layout::WidgetId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Clock,
    Weather,
    Radar,
}

impl WidgetKind {
    /// Page order
    pub const ALL: [WidgetKind; 3] = [WidgetKind::Clock, WidgetKind::Weather, WidgetKind::Radar];

    /// Class attribute of the widget element
    pub fn class_name(&self) -> &'static str {
        match self {
            WidgetKind::Clock => "widget time-widget",
            WidgetKind::Weather => "widget weather-widget",
            WidgetKind::Radar => "widget doppler-widget",
        }
    }

    /// Element id of the container the renderer fills
    pub fn container_id(&self) -> &'static str {
        match self {
            WidgetKind::Clock => "time",
            WidgetKind::Weather => "weather",
            WidgetKind::Radar => "doppler",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WidgetKind::Clock => "Time",
            WidgetKind::Weather => "Weather",
            WidgetKind::Radar => "Doppler Radar",
        }
    }

    pub fn widget_id(&self) -> WidgetId {
        WidgetId::from_class_name(self.class_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_distinct() {
        let ids: Vec<_> = WidgetKind::ALL.iter().map(|k| k.widget_id()).collect();
        assert_eq!(ids[0].as_str(), "widget-time-widget");
        assert_eq!(ids[1].as_str(), "widget-weather-widget");
        assert_eq!(ids[2].as_str(), "widget-doppler-widget");
    }
}
