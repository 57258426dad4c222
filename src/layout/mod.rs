//! Widget Layout
//!
//! Position and size bookkeeping for dashboard widgets:
//!
//! - **types**: Geometry records (`Position`, `Size`, `WidgetLayoutRecord`, `WidgetId`)
//! - **kv**: The injected key-value backend (`KeyValueStore`) and an in-memory implementation
//! - **store**: `LayoutStore`, which reads and writes layout records through the backend
//! - **error**: Error types
//!
//! # Storage keys
//!
//! ```text
//!   widget-pos-<id>   → {"x":12,"y":-40}
//!   widget-size-<id>  → {"w":320,"h":180}
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use skyboard::layout::{LayoutStore, MemoryStore, Position, Size, WidgetId};
//!
//! let store = LayoutStore::new(Rc::new(MemoryStore::new()));
//! let id = WidgetId::from_class_name("widget time-widget");
//!
//! store.save_position(&id, Position::new(40, 12));
//! let record = store.restore(&id, Size::new(300, 120));
//! assert_eq!(record.position, Position::new(40, 12));
//! assert_eq!(record.size, Size::new(300, 120));
//! ```

pub mod error;
pub mod kv;
pub mod store;
pub mod types;

pub use error::{StoreError, StoreResult};
pub use kv::{KeyValueStore, MemoryStore};
pub use store::{LayoutStore, POSITION_KEY_PREFIX, SIZE_KEY_PREFIX};
pub use types::{round_px, Position, Size, WidgetId, WidgetLayoutRecord};
