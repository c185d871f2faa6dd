use outline_engine::coords::{Rect, Vec2};
use outline_engine::paint::Color;
use outline_engine::scene::{DrawList, ZIndex};
use outline_engine::text::{FontId, TextMeasure};


/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` with a high-level API. Each call is drawn on
/// top of the previous one.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    fonts: &'a dyn TextMeasure,
    z: i32,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList, fonts: &'a dyn TextMeasure) -> Self {
        Self { draw_list, fonts, z: 0 }
    }

    // ── text measurement ──────────────────────────────────────────────────

    #[inline]
    pub fn measure_text(&self, text: &str, font: FontId, size: f32) -> Vec2 {
        self.fonts.measure_text(text, font, size)
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Solid axis-aligned rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let z = self.next_z();
        self.draw_list.push_solid_rect(z, rect, color);
    }

    /// Stroked open polyline along `points`.
    pub fn stroke_polyline(&mut self, points: Vec<Vec2>, width: f32, color: Color) {
        let z = self.next_z();
        self.draw_list.push_stroke_path(z, points, width, color);
    }

    /// Single-line text with its top-left at `origin`.
    pub fn text(&mut self, text: impl Into<String>, font: FontId, size: f32, color: Color, origin: Vec2) {
        let z = self.next_z();
        self.draw_list.push_text(z, text, font, size, color, origin);
    }

    // ── clipping ──────────────────────────────────────────────────────────

    /// Begin a clip region. Must be paired with [`pop_clip`](Self::pop_clip).
    pub fn push_clip(&mut self, rect: Rect) {
        self.draw_list.push_clip(rect);
    }

    pub fn pop_clip(&mut self) {
        self.draw_list.pop_clip();
    }

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}
