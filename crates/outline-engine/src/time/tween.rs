use std::time::Duration;

use crate::coords::Vec2;
use crate::paint::Color;

/// Easing curve applied to normalized animation progress.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

impl Easing {
    /// Maps `t` in `[0, 1]` to eased progress in `[0, 1]`.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

/// Duration and easing of a transition.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self { duration: Duration::from_millis(200), easing: Easing::EaseInOut }
    }
}

impl AnimationSpec {
    pub fn tween(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// Zero-length transitions: every value jumps straight to its target.
    pub fn instant() -> Self {
        Self { duration: Duration::ZERO, easing: Easing::Linear }
    }
}

/// Values a [`Tween`] can blend between.
pub trait Interpolate: Copy {
    fn interpolate(self, other: Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    #[inline]
    fn interpolate(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Interpolate for Vec2 {
    #[inline]
    fn interpolate(self, other: Self, t: f32) -> Self {
        self.lerp(other, t)
    }
}

impl Interpolate for Color {
    #[inline]
    fn interpolate(self, other: Self, t: f32) -> Self {
        self.lerp(other, t)
    }
}

/// A value moving from `from` to `to` over `spec.duration`.
///
/// Advance it with [`advance`](Self::advance) once per frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tween<T: Interpolate> {
    from: T,
    to: T,
    elapsed: f32,
    spec: AnimationSpec,
}

impl<T: Interpolate> Tween<T> {
    /// A tween resting at `value`.
    pub fn settled(value: T, spec: AnimationSpec) -> Self {
        Self { from: value, to: value, elapsed: spec.duration.as_secs_f32(), spec }
    }

    /// Restarts the animation, running from `from` to `to`.
    pub fn animate(&mut self, from: T, to: T) {
        self.from = from;
        self.to = to;
        self.elapsed = 0.0;
    }

    /// Jumps to `value` with no animation.
    pub fn snap(&mut self, value: T) {
        self.from = value;
        self.to = value;
        self.elapsed = self.spec.duration.as_secs_f32();
    }

    /// Moves the animation forward by `dt` seconds. Returns `true` while still running.
    pub fn advance(&mut self, dt: f32) -> bool {
        let duration = self.spec.duration.as_secs_f32();
        if dt.is_finite() && dt > 0.0 {
            self.elapsed = (self.elapsed + dt).min(duration);
        }
        self.is_running()
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.elapsed < self.spec.duration.as_secs_f32()
    }

    /// Normalized progress before easing.
    pub fn progress(&self) -> f32 {
        let duration = self.spec.duration.as_secs_f32();
        if duration <= 0.0 { 1.0 } else { (self.elapsed / duration).clamp(0.0, 1.0) }
    }

    /// Current eased value.
    pub fn value(&self) -> T {
        self.from.interpolate(self.to, self.spec.easing.apply(self.progress()))
    }

    #[inline]
    pub fn from(&self) -> T {
        self.from
    }

    #[inline]
    pub fn target(&self) -> T {
        self.to
    }

    #[inline]
    pub fn spec(&self) -> AnimationSpec {
        self.spec
    }

    /// Swaps timing, keeping the current normalized progress. A settled
    /// tween stays settled.
    pub fn set_spec(&mut self, spec: AnimationSpec) {
        let progress = self.progress();
        self.spec = spec;
        self.elapsed = progress * spec.duration.as_secs_f32();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> AnimationSpec {
        AnimationSpec::tween(Duration::from_millis(200), Easing::Linear)
    }

    #[test]
    fn settled_tween_is_idle() {
        let t = Tween::settled(0.3f32, spec());
        assert!(!t.is_running());
        assert_eq!(t.value(), 0.3);
    }

    #[test]
    fn linear_tween_reaches_target() {
        let mut t = Tween::settled(0.0f32, spec());
        t.animate(0.0, 1.0);
        assert!(t.advance(0.1));
        assert!((t.value() - 0.5).abs() < 1e-6);
        assert!(!t.advance(0.5));
        assert_eq!(t.value(), 1.0);
    }

    #[test]
    fn ease_in_out_is_symmetric_and_bounded() {
        let e = Easing::EaseInOut;
        assert_eq!(e.apply(0.0), 0.0);
        assert_eq!(e.apply(0.5), 0.5);
        assert_eq!(e.apply(1.0), 1.0);
        assert!((e.apply(0.25) + e.apply(0.75) - 1.0).abs() < 1e-6);
        assert_eq!(e.apply(-1.0), 0.0);
    }

    #[test]
    fn instant_spec_never_runs() {
        let mut t = Tween::settled(Vec2::zero(), AnimationSpec::instant());
        t.animate(Vec2::zero(), Vec2::new(4.0, 2.0));
        assert!(!t.is_running());
        assert_eq!(t.value(), Vec2::new(4.0, 2.0));
    }

    #[test]
    fn respec_after_instant_animation_stays_settled() {
        let mut t = Tween::settled(0.0f32, AnimationSpec::instant());
        t.animate(0.0, 0.08);
        assert_eq!(t.value(), 0.08);

        t.set_spec(AnimationSpec::default());
        assert!(!t.is_running());
        assert_eq!(t.value(), 0.08);
    }

    #[test]
    fn respec_mid_animation_keeps_progress() {
        let mut t = Tween::settled(0.0f32, spec());
        t.animate(0.0, 1.0);
        t.advance(0.05);

        t.set_spec(AnimationSpec::tween(Duration::from_millis(400), Easing::Linear));
        assert!(t.is_running());
        assert!((t.progress() - 0.25).abs() < 1e-6);
        t.advance(0.3);
        assert!(!t.is_running());
        assert_eq!(t.value(), 1.0);
    }

    #[test]
    fn bad_dt_is_ignored() {
        let mut t = Tween::settled(0.0f32, spec());
        t.animate(0.0, 1.0);
        t.advance(f32::NAN);
        t.advance(-1.0);
        assert_eq!(t.value(), 0.0);
    }
}
