//! Paint model shared between the UI layer and whatever renders the draw list.
//!
//! Colors are linear premultiplied RGBA. Geometry types remain in `coords`.

pub mod color;

pub use color::Color;
