//! Pointer Gestures
//!
//! Per-widget drag and resize handling, independent of any DOM binding.
//!
//! - **target**: Classifies where a pointer-down landed (`PointerTarget`)
//! - **controller**: The per-widget state machine (`WidgetController`)
//!
//! # State machine
//!
//! ```text
//!            down on body                       down on handle
//!   Dragging ◄──────────── Idle ────────────────► Resizing
//!      │  ▲ move              ▲                     │  ▲ move
//!      └──┘                   │ up (persist)        └──┘
//!      └──────────────────────┴─────────────────────┘
//! ```
//!
//! Only one mode can be active on a widget: the state is a single enum, and
//! pointer-down while a gesture is running is ignored.

pub mod controller;
pub mod target;

pub use controller::{
    GestureEnd, GestureKind, GestureStart, GestureState, Point, WidgetController, WidgetFrame,
    MIN_HEIGHT, MIN_WIDTH,
};
pub use target::{PointerTarget, INTERACTIVE_TAGS, RESIZE_HANDLE_CLASS};
