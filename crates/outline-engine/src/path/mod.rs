//! Stroke path geometry.
//!
//! Responsibilities:
//! - describe outlines as `MoveTo` / `LineTo` / `CurveTo` segment streams
//! - build the stroke-centred rounded-rectangle outline of a field
//! - measure arc length, including cubic Bezier corners
//! - convert a measured placeholder label into a normalized stroke gap
//!
//! Nothing here depends on the UI layer; every function is pure.

mod gap;
mod geometry;
mod measure;
mod rounded_rect;
mod segment;

pub use gap::{embedded_label_offset, gap_fraction, GapFraction, GAP_PADDING};
pub use geometry::{GeometryConfig, OutlineGeometry};
pub use measure::{cubic_length, cubic_point, total_length, PathMeasure, CURVE_SUBDIVISIONS};
pub use rounded_rect::CIRCLE_KAPPA;
pub use segment::{Path, PathSegment};
