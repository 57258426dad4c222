//! Geometry records for widget layout
//!
//! - `WidgetId`: Stable storage identity derived from a widget's class list
//! - `Position`: Translation offset in whole pixels
//! - `Size`: Width and height in whole pixels
//! - `WidgetLayoutRecord`: Everything persisted for one widget

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a widget in storage
///
/// Derived from the element's class attribute with every space replaced by
/// a hyphen, so `"widget time-widget"` becomes `"widget-time-widget"`.
/// Two widgets with identical class lists share an id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(String);

impl WidgetId {
    /// Build the id from a raw class attribute value
    pub fn from_class_name(class_name: &str) -> Self {
        Self(class_name.split(' ').collect::<Vec<_>>().join("-"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Translation offset of a widget from its flow position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// CSS `transform` value for this offset
    pub fn to_css_transform(&self) -> String {
        format!("translate({}px, {}px)", self.x, self.y)
    }
}

/// Rendered widget dimensions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub w: i32,
    pub h: i32,
}

impl Size {
    pub fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }
}

/// Persisted layout of a single widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetLayoutRecord {
    pub widget_id: WidgetId,
    pub position: Position,
    pub size: Size,
}

impl WidgetLayoutRecord {
    pub fn new(widget_id: WidgetId, position: Position, size: Size) -> Self {
        Self {
            widget_id,
            position,
            size,
        }
    }

    /// Inline style carrying both the translation and the explicit size
    pub fn to_css_style(&self) -> String {
        format!(
            "transform: {}; width: {}px; height: {}px;",
            self.position.to_css_transform(),
            self.size.w,
            self.size.h
        )
    }
}

/// Round a pixel value half-up (`2.5 → 3`, `-2.5 → -2`)
///
/// Pointer arithmetic happens in fractional CSS pixels; layout is kept in
/// whole pixels.
pub fn round_px(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_id_from_class_list() {
        assert_eq!(
            WidgetId::from_class_name("widget time-widget").as_str(),
            "widget-time-widget"
        );
        assert_eq!(WidgetId::from_class_name("widget").as_str(), "widget");
        // Doubled spaces are kept as empty segments
        assert_eq!(WidgetId::from_class_name("a  b").as_str(), "a--b");
    }

    #[test]
    fn test_round_px_half_up() {
        assert_eq!(round_px(2.5), 3);
        assert_eq!(round_px(2.49), 2);
        assert_eq!(round_px(-2.5), -2);
        assert_eq!(round_px(-2.51), -3);
        assert_eq!(round_px(0.0), 0);
    }

    #[test]
    fn test_css_rendering() {
        assert_eq!(
            Position::new(12, -40).to_css_transform(),
            "translate(12px, -40px)"
        );

        let record = WidgetLayoutRecord::new(
            WidgetId::from_class_name("widget"),
            Position::new(1, 2),
            Size::new(300, 120),
        );
        assert_eq!(
            record.to_css_style(),
            "transform: translate(1px, 2px); width: 300px; height: 120px;"
        );
    }

    #[test]
    fn test_position_json_shape() {
        let json = serde_json::to_string(&Position::new(3, -4)).unwrap();
        assert_eq!(json, r#"{"x":3,"y":-4}"#);

        let json = serde_json::to_string(&Size::new(140, 60)).unwrap();
        assert_eq!(json, r#"{"w":140,"h":60}"#);
    }
}
