//! Text measurement.
//!
//! The outline geometry needs exactly one thing from text: how wide the
//! placeholder label renders. [`TextMeasure`] is that seam; [`FontSystem`]
//! implements it with `fontdue`.

mod font_system;

pub use font_system::{FontId, FontLoadError, FontSystem, TextMeasure};
