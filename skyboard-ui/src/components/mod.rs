//! UI Components
//!
//! The draggable widget frame and the three widget bodies.

pub mod clock;
pub mod loading;
pub mod radar;
pub mod timezone_select;
pub mod weather;
pub mod widget;

pub use clock::Clock;
pub use loading::Loading;
pub use radar::Radar;
pub use timezone_select::TimezoneSelect;
pub use weather::Weather;
pub use widget::Widget;
