//! Outline engine crate.
//!
//! Toolkit-independent pieces of the outlined text field: stroke path
//! geometry and measurement, the renderer-agnostic draw stream, text
//! measurement, frame timing and tweening.

pub mod coords;
pub mod input;
pub mod logging;
pub mod paint;
pub mod path;
pub mod scene;
pub mod text;
pub mod time;
