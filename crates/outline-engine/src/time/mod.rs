//! Time subsystem.
//!
//! - `FrameClock` produces clamped per-frame delta times
//! - `Tween` interpolates a value over a fixed duration, advanced by those deltas
//!
//! Animations never read the wall clock themselves, so they can be stepped
//! deterministically in tests.

mod frame_clock;
mod tween;

pub use frame_clock::{FrameClock, FrameTime};
pub use tween::{AnimationSpec, Easing, Interpolate, Tween};
