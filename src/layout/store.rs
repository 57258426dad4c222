//! Persisted Layout Store
//!
//! Reads and writes per-widget position and size records through an
//! injected [`KeyValueStore`]. Reads never fail: corrupt or partial values
//! are treated as absent and replaced by a computed default. Write failures
//! are logged and absorbed.

use serde::Deserialize;
use std::rc::Rc;

use super::error::StoreResult;
use super::kv::KeyValueStore;
use super::types::{round_px, Position, Size, WidgetId, WidgetLayoutRecord};

/// Key prefix for `{x,y}` offsets
pub const POSITION_KEY_PREFIX: &str = "widget-pos-";

/// Key prefix for `{w,h}` sizes
pub const SIZE_KEY_PREFIX: &str = "widget-size-";

/// Stored offset; accepts fractional values written by older pages
#[derive(Deserialize)]
struct StoredPosition {
    x: f64,
    y: f64,
}

/// Stored size; either field may be missing
#[derive(Deserialize)]
struct StoredSize {
    #[serde(default)]
    w: Option<f64>,
    #[serde(default)]
    h: Option<f64>,
}

/// Layout persistence for all widgets on the page
#[derive(Clone)]
pub struct LayoutStore {
    kv: Rc<dyn KeyValueStore>,
}

impl LayoutStore {
    pub fn new(kv: Rc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    fn position_key(id: &WidgetId) -> String {
        format!("{}{}", POSITION_KEY_PREFIX, id)
    }

    fn size_key(id: &WidgetId) -> String {
        format!("{}{}", SIZE_KEY_PREFIX, id)
    }

    /// Remove every layout entry, leaving unrelated keys alone
    ///
    /// Returns the number of keys removed.
    pub fn clear_all(&self) -> usize {
        let keys = match self.kv.keys() {
            Ok(keys) => keys,
            Err(e) => {
                tracing::warn!("Cannot list storage keys, layout not cleared: {}", e);
                return 0;
            }
        };

        let mut removed = 0;
        for key in keys
            .iter()
            .filter(|k| k.starts_with(POSITION_KEY_PREFIX) || k.starts_with(SIZE_KEY_PREFIX))
        {
            match self.kv.remove_item(key) {
                Ok(()) => removed += 1,
                Err(e) => tracing::warn!("Failed to remove {}: {}", key, e),
            }
        }

        tracing::debug!("Cleared {} layout entries", removed);
        removed
    }

    fn read_raw(&self, key: &str) -> Option<String> {
        match self.kv.get_item(key) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", key, e);
                None
            }
        }
    }

    /// Stored offset for a widget, if present and well-formed
    pub fn load_position(&self, id: &WidgetId) -> Option<Position> {
        let raw = self.read_raw(&Self::position_key(id))?;
        let stored: StoredPosition = serde_json::from_str(&raw).ok()?;
        if !stored.x.is_finite() || !stored.y.is_finite() {
            return None;
        }
        Some(Position::new(round_px(stored.x), round_px(stored.y)))
    }

    /// Stored size fields that are present, finite and non-zero
    fn stored_size(&self, id: &WidgetId) -> Option<(Option<i32>, Option<i32>)> {
        let raw = self.read_raw(&Self::size_key(id))?;
        let stored: StoredSize = serde_json::from_str(&raw).ok()?;

        let pick = |value: Option<f64>| {
            value
                .filter(|v| v.is_finite() && *v != 0.0)
                .map(round_px)
        };
        Some((pick(stored.w), pick(stored.h)))
    }

    /// Stored size for a widget, with missing or zero fields taken from `measured`
    ///
    /// Returns `None` when nothing usable is stored.
    pub fn load_size(&self, id: &WidgetId, measured: Size) -> Option<Size> {
        let (w, h) = self.stored_size(id)?;
        if w.is_none() && h.is_none() {
            return None;
        }

        Some(Size::new(w.unwrap_or(measured.w), h.unwrap_or(measured.h)))
    }

    /// Complete stored record, only when both position and a full size exist
    pub fn get(&self, id: &WidgetId) -> Option<WidgetLayoutRecord> {
        let position = self.load_position(id)?;
        let (w, h) = self.stored_size(id)?;
        Some(WidgetLayoutRecord::new(id.clone(), position, Size::new(w?, h?)))
    }

    /// Record to apply when a widget attaches
    ///
    /// Falls back to the origin and the measured size for whatever is
    /// missing or malformed.
    pub fn restore(&self, id: &WidgetId, measured: Size) -> WidgetLayoutRecord {
        let position = self.load_position(id).unwrap_or(Position::ORIGIN);
        let size = self.load_size(id, measured).unwrap_or(measured);
        WidgetLayoutRecord::new(id.clone(), position, size)
    }

    /// Persist both parts of a record
    pub fn set(&self, record: &WidgetLayoutRecord) {
        self.save_position(&record.widget_id, record.position);
        self.save_size(&record.widget_id, record.size);
    }

    /// Persist the offset reached at the end of a drag
    pub fn save_position(&self, id: &WidgetId, position: Position) {
        self.write(&Self::position_key(id), &position);
    }

    /// Persist the size reached at the end of a resize
    pub fn save_size(&self, id: &WidgetId, size: Size) {
        self.write(&Self::size_key(id), &size);
    }

    fn write<T: serde::Serialize>(&self, key: &str, value: &T) {
        if let Err(e) = self.try_write(key, value) {
            tracing::warn!("Failed to persist {}: {}", key, e);
        }
    }

    fn try_write<T: serde::Serialize>(&self, key: &str, value: &T) -> StoreResult<()> {
        let raw = serde_json::to_string(value)?;
        self.kv.set_item(key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::error::StoreError;
    use crate::layout::kv::MemoryStore;

    fn widget() -> WidgetId {
        WidgetId::from_class_name("widget weather-widget")
    }

    fn store_with(entries: &[(&str, &str)]) -> (Rc<MemoryStore>, LayoutStore) {
        let kv = entries
            .iter()
            .fold(MemoryStore::new(), |kv, (k, v)| kv.with_item(*k, *v));
        let kv = Rc::new(kv);
        let store = LayoutStore::new(kv.clone());
        (kv, store)
    }

    #[test]
    fn test_clear_all_only_touches_layout_keys() {
        let (kv, store) = store_with(&[
            ("widget-pos-a", r#"{"x":1,"y":2}"#),
            ("widget-size-a", r#"{"w":200,"h":90}"#),
            ("widget-pos-b", "garbage"),
            ("weather-tz", "Asia/Tokyo"),
            ("unrelated", "keep"),
        ]);

        assert_eq!(store.clear_all(), 3);
        assert_eq!(
            kv.keys().unwrap(),
            vec!["unrelated".to_string(), "weather-tz".to_string()]
        );
    }

    #[test]
    fn test_restore_applies_stored_translation() {
        for (x, y) in [(0, 0), (15, -7), (-300, 420), (i32::MAX, i32::MIN)] {
            let (_kv, store) = store_with(&[]);
            store.save_position(&widget(), Position::new(x, y));

            let record = store.restore(&widget(), Size::new(320, 160));
            assert_eq!(record.position, Position::new(x, y));
        }
    }

    #[test]
    fn test_corrupt_values_fall_back_to_defaults() {
        let measured = Size::new(320, 160);
        for bad in ["", "{", "null", "[]", r#"{"x":1}"#, r#"{"x":"a","y":2}"#, "42"] {
            let (_kv, store) = store_with(&[
                ("widget-pos-widget-weather-widget", bad),
                ("widget-size-widget-weather-widget", bad),
            ]);

            let record = store.restore(&widget(), measured);
            assert_eq!(record.position, Position::ORIGIN, "input {:?}", bad);
            assert_eq!(record.size, measured, "input {:?}", bad);
        }
    }

    #[test]
    fn test_partial_size_fills_from_measurement() {
        let (_kv, store) = store_with(&[
            ("widget-size-widget-weather-widget", r#"{"w":410}"#),
        ]);
        let size = store.load_size(&widget(), Size::new(300, 150)).unwrap();
        assert_eq!(size, Size::new(410, 150));

        let (_kv, store) = store_with(&[
            ("widget-size-widget-weather-widget", r#"{"w":0,"h":75}"#),
        ]);
        let size = store.load_size(&widget(), Size::new(300, 150)).unwrap();
        assert_eq!(size, Size::new(300, 75));
    }

    #[test]
    fn test_fractional_position_rounds() {
        let (_kv, store) = store_with(&[
            ("widget-pos-widget-weather-widget", r#"{"x":10.5,"y":-3.5}"#),
        ]);
        assert_eq!(store.load_position(&widget()), Some(Position::new(11, -3)));
    }

    #[test]
    fn test_get_requires_complete_record() {
        let (_kv, store) = store_with(&[]);
        assert!(store.get(&widget()).is_none());

        store.save_position(&widget(), Position::new(5, 6));
        assert!(store.get(&widget()).is_none());

        store.save_size(&widget(), Size::new(200, 100));
        let record = store.get(&widget()).unwrap();
        assert_eq!(record.position, Position::new(5, 6));
        assert_eq!(record.size, Size::new(200, 100));
    }

    #[test]
    fn test_get_rejects_zero_size() {
        let (_kv, store) = store_with(&[
            ("widget-pos-widget-weather-widget", r#"{"x":4,"y":8}"#),
            ("widget-size-widget-weather-widget", r#"{"w":0,"h":0}"#),
        ]);
        assert!(store.get(&widget()).is_none());
        assert_eq!(store.restore(&widget(), Size::new(300, 100)).size, Size::new(300, 100));

        let (_kv, store) = store_with(&[
            ("widget-pos-widget-weather-widget", r#"{"x":4,"y":8}"#),
            ("widget-size-widget-weather-widget", r#"{"w":250,"h":0}"#),
        ]);
        assert!(store.get(&widget()).is_none());
    }

    #[test]
    fn test_set_writes_both_keys() {
        let (kv, store) = store_with(&[]);
        let record = WidgetLayoutRecord::new(widget(), Position::new(-1, 2), Size::new(150, 70));
        store.set(&record);

        assert_eq!(
            kv.get_item("widget-pos-widget-weather-widget").unwrap().as_deref(),
            Some(r#"{"x":-1,"y":2}"#)
        );
        assert_eq!(
            kv.get_item("widget-size-widget-weather-widget").unwrap().as_deref(),
            Some(r#"{"w":150,"h":70}"#)
        );
        assert_eq!(store.get(&widget()), Some(record));
    }

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get_item(&self, _key: &str) -> StoreResult<Option<String>> {
            Err(StoreError::Unavailable("disabled".to_string()))
        }

        fn set_item(&self, key: &str, _value: &str) -> StoreResult<()> {
            Err(StoreError::WriteRejected {
                key: key.to_string(),
                reason: "QuotaExceededError".to_string(),
            })
        }

        fn remove_item(&self, _key: &str) -> StoreResult<()> {
            Err(StoreError::Unavailable("disabled".to_string()))
        }

        fn keys(&self) -> StoreResult<Vec<String>> {
            Err(StoreError::Unavailable("disabled".to_string()))
        }
    }

    #[test]
    fn test_backend_failures_are_absorbed() {
        let store = LayoutStore::new(Rc::new(FailingStore));
        let measured = Size::new(240, 100);

        assert_eq!(store.clear_all(), 0);
        store.save_position(&widget(), Position::new(1, 1));
        store.save_size(&widget(), Size::new(300, 300));

        let record = store.restore(&widget(), measured);
        assert_eq!(record.position, Position::ORIGIN);
        assert_eq!(record.size, measured);
    }
}
