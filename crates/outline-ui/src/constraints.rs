use outline_engine::coords::{Rect, Vec2};
use outline_engine::text::{FontId, TextMeasure};

// ── Edges ─────────────────────────────────────────────────────────────────

/// Insets on all four sides.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    #[inline]
    pub fn all(v: f32) -> Self {
        Self { top: v, right: v, bottom: v, left: v }
    }

    #[inline]
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self { top: vertical, bottom: vertical, left: horizontal, right: horizontal }
    }

    /// Left and right insets only.
    #[inline]
    pub fn sides(left: f32, right: f32) -> Self {
        Self { left, right, ..Self::default() }
    }

    /// Total inset on the horizontal axis.
    #[inline]
    pub fn h(self) -> f32 {
        self.left + self.right
    }

    /// Total inset on the vertical axis.
    #[inline]
    pub fn v(self) -> f32 {
        self.top + self.bottom
    }
}

// ── Constraints ───────────────────────────────────────────────────────────

/// Layout constraints passed from parent to child during measure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// Child must be exactly `size`.
    #[inline]
    pub fn tight(size: Vec2) -> Self {
        Self { min: size, max: size }
    }

    /// Child can be anywhere from zero up to `max`.
    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::zero(), max }
    }

    #[inline]
    pub fn unbounded() -> Self {
        Self { min: Vec2::zero(), max: Vec2::new(f32::INFINITY, f32::INFINITY) }
    }

    /// Clamp a size into `[min, max]`.
    #[inline]
    #[must_use]
    pub fn constrain(self, size: Vec2) -> Vec2 {
        Vec2::new(
            size.x.max(self.min.x).min(self.max.x),
            size.y.max(self.min.y).min(self.max.y),
        )
    }
}

// ── LayoutCtx ────────────────────────────────────────────────────────────

/// Resources available to [`Widget::measure`](crate::widget::Widget::measure)
/// and [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Clone, Copy)]
pub struct LayoutCtx<'a> {
    pub fonts: &'a dyn TextMeasure,
}

impl<'a> LayoutCtx<'a> {
    #[inline]
    pub fn new(fonts: &'a dyn TextMeasure) -> Self {
        Self { fonts }
    }

    #[inline]
    pub fn measure_text(&self, text: &str, font: FontId, size: f32) -> Vec2 {
        self.fonts.measure_text(text, font, size)
    }
}

// ── rect helper ──────────────────────────────────────────────────────────

/// Shrink a rect by `edges`.
#[inline]
pub fn inset_rect(rect: Rect, edges: Edges) -> Rect {
    Rect::new(
        rect.origin.x + edges.left,
        rect.origin.y + edges.top,
        (rect.size.x - edges.h()).max(0.0),
        (rect.size.y - edges.v()).max(0.0),
    )
}
