//! Draggable/Resizable Widget Controller
//!
//! One [`WidgetController`] per widget. The DOM layer feeds it pointer
//! events and applies the frames it returns; the controller owns the
//! geometry and writes it to the [`LayoutStore`] when a gesture ends.

use crate::layout::{round_px, LayoutStore, Position, Size, WidgetId, WidgetLayoutRecord};

use super::target::PointerTarget;

/// Minimum widget width in pixels
pub const MIN_WIDTH: i32 = 140;

/// Minimum widget height in pixels
pub const MIN_HEIGHT: i32 = 60;

/// Pointer location in client coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset from `origin` to `self`
    pub fn delta_from(&self, origin: Point) -> (f64, f64) {
        (self.x - origin.x, self.y - origin.y)
    }
}

/// Which gesture is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    Drag,
    Resize,
}

impl GestureKind {
    /// CSS class the widget carries while the gesture runs
    pub fn css_class(&self) -> &'static str {
        match self {
            GestureKind::Drag => "dragging",
            GestureKind::Resize => "resizing",
        }
    }
}

/// Per-widget pointer interaction state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging {
        pointer_id: i32,
        start_pointer: Point,
        start_offset: Position,
    },
    Resizing {
        pointer_id: i32,
        start_pointer: Point,
        start_size: Size,
    },
}

impl GestureState {
    pub fn kind(&self) -> Option<GestureKind> {
        match self {
            GestureState::Idle => None,
            GestureState::Dragging { .. } => Some(GestureKind::Drag),
            GestureState::Resizing { .. } => Some(GestureKind::Resize),
        }
    }
}

/// A gesture has begun; the caller should capture `pointer_id`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureStart {
    pub kind: GestureKind,
    pub pointer_id: i32,
}

/// Geometry to apply to the widget element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetFrame {
    pub position: Position,
    pub size: Size,
}

/// A gesture has finished and its result was persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GestureEnd {
    pub kind: GestureKind,
    /// Pointer to release capture for
    pub pointer_id: i32,
    pub record: WidgetLayoutRecord,
}

/// Gesture state machine and geometry for one widget
#[derive(Debug, Clone)]
pub struct WidgetController {
    id: WidgetId,
    position: Position,
    size: Size,
    state: GestureState,
}

impl WidgetController {
    /// Create a controller seeded with the geometry applied at attach time
    pub fn new(record: WidgetLayoutRecord) -> Self {
        Self {
            id: record.widget_id,
            position: record.position,
            size: record.size,
            state: GestureState::Idle,
        }
    }

    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn frame(&self) -> WidgetFrame {
        WidgetFrame {
            position: self.position,
            size: self.size,
        }
    }

    pub fn record(&self) -> WidgetLayoutRecord {
        WidgetLayoutRecord::new(self.id.clone(), self.position, self.size)
    }

    /// Pointer-down anywhere inside the widget
    ///
    /// Returns `None` when no gesture starts: the target is interactive,
    /// or another gesture is already running on this widget.
    pub fn pointer_down(
        &mut self,
        target: PointerTarget,
        pointer: Point,
        pointer_id: i32,
    ) -> Option<GestureStart> {
        if self.state != GestureState::Idle {
            return None;
        }

        match target {
            PointerTarget::Body => Some(self.begin_drag(pointer, pointer_id)),
            PointerTarget::ResizeHandle => Some(self.begin_resize(pointer, pointer_id)),
            PointerTarget::Interactive => None,
        }
    }

    fn begin_drag(&mut self, pointer: Point, pointer_id: i32) -> GestureStart {
        self.state = GestureState::Dragging {
            pointer_id,
            start_pointer: pointer,
            start_offset: self.position,
        };
        GestureStart {
            kind: GestureKind::Drag,
            pointer_id,
        }
    }

    fn begin_resize(&mut self, pointer: Point, pointer_id: i32) -> GestureStart {
        self.state = GestureState::Resizing {
            pointer_id,
            start_pointer: pointer,
            start_size: self.size,
        };
        GestureStart {
            kind: GestureKind::Resize,
            pointer_id,
        }
    }

    /// Window-level pointer move; ignored while idle
    pub fn pointer_move(&mut self, pointer: Point) -> Option<WidgetFrame> {
        match self.state {
            GestureState::Idle => None,
            GestureState::Dragging {
                start_pointer,
                start_offset,
                ..
            } => {
                self.drag_to(start_pointer, start_offset, pointer);
                Some(self.frame())
            }
            GestureState::Resizing {
                start_pointer,
                start_size,
                ..
            } => {
                self.resize_to(start_pointer, start_size, pointer);
                Some(self.frame())
            }
        }
    }

    fn drag_to(&mut self, start_pointer: Point, start_offset: Position, pointer: Point) {
        let (dx, dy) = pointer.delta_from(start_pointer);
        self.position = Position::new(
            round_px(start_offset.x as f64 + dx),
            round_px(start_offset.y as f64 + dy),
        );
    }

    fn resize_to(&mut self, start_pointer: Point, start_size: Size, pointer: Point) {
        let (dx, dy) = pointer.delta_from(start_pointer);
        self.size = Size::new(
            round_px(start_size.w as f64 + dx).max(MIN_WIDTH),
            round_px(start_size.h as f64 + dy).max(MIN_HEIGHT),
        );
    }

    /// Window-level pointer up; persists the finished gesture
    pub fn pointer_up(&mut self, store: &LayoutStore) -> Option<GestureEnd> {
        let state = std::mem::take(&mut self.state);
        match state {
            GestureState::Idle => None,
            GestureState::Dragging { pointer_id, .. } => {
                store.save_position(&self.id, self.position);
                tracing::debug!(widget = %self.id, x = self.position.x, y = self.position.y, "Drag committed");
                Some(GestureEnd {
                    kind: GestureKind::Drag,
                    pointer_id,
                    record: self.record(),
                })
            }
            GestureState::Resizing { pointer_id, .. } => {
                store.save_size(&self.id, self.size);
                tracing::debug!(widget = %self.id, w = self.size.w, h = self.size.h, "Resize committed");
                Some(GestureEnd {
                    kind: GestureKind::Resize,
                    pointer_id,
                    record: self.record(),
                })
            }
        }
    }
}
