use outline_engine::coords::{Rect, Vec2};
use outline_engine::input::{Key, Modifiers};
use outline_engine::scene::DrawList;
use outline_engine::text::{FontId, FontLoadError, FontSystem};

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::UiEvent;
use crate::painter::Painter;
use crate::widget::Element;

// ── UiInput ───────────────────────────────────────────────────────────────

/// Snapshot of input state for one UI frame.
#[derive(Debug, Clone, Default)]
pub struct UiInput {
    /// Seconds since the previous frame.
    pub dt: f32,
    /// Cursor position in logical pixels.
    pub mouse_pos: Vec2,
    /// `true` for exactly one frame when the primary button is released.
    pub mouse_clicked: bool,
    /// Committed text typed this frame.
    pub text_input: Vec<String>,
    /// Named keys pressed this frame.
    pub keys_pressed: Vec<(Key, Modifiers)>,
}

// ── UiScene ───────────────────────────────────────────────────────────────

/// Owns the fonts and the draw list shared across frames.
///
/// The root widget lives in the caller so its state (focus, text, running
/// animations) persists between frames.
pub struct UiScene {
    pub font_system: FontSystem,
    /// Draw list populated by the most recent [`frame`](Self::frame) call.
    pub draw_list: DrawList,
}

impl UiScene {
    pub fn new() -> Self {
        Self { font_system: FontSystem::new(), draw_list: DrawList::new() }
    }

    pub fn load_font(&mut self, data: &[u8]) -> Result<FontId, FontLoadError> {
        self.font_system.load_font(data)
    }

    /// Routes this frame's input to `root`, then lays it out at `viewport`
    /// and paints it.
    ///
    /// Events run before paint so the frame shows the state they produced.
    pub fn frame(&mut self, root: &mut Element, viewport: Vec2, input: &UiInput) -> &mut DrawList {
        self.draw_list.clear();
        let ctx = LayoutCtx::new(&self.font_system);

        let size = root.measure(Constraints::loose(viewport), &ctx);
        let rect = Rect::new(0.0, 0.0, size.x, size.y);

        // ── events ────────────────────────────────────────────────────────
        root.on_event(&UiEvent::Tick { dt: input.dt }, rect, &ctx);
        root.on_event(&UiEvent::Hover { pos: input.mouse_pos }, rect, &ctx);
        if input.mouse_clicked {
            root.on_event(&UiEvent::Click { pos: input.mouse_pos }, rect, &ctx);
        }
        for text in &input.text_input {
            root.on_event(&UiEvent::TextInput { text: text.clone() }, rect, &ctx);
        }
        for &(key, modifiers) in &input.keys_pressed {
            root.on_event(&UiEvent::KeyPress { key, modifiers }, rect, &ctx);
        }

        // ── paint ─────────────────────────────────────────────────────────
        let mut painter = Painter::new(&mut self.draw_list, &self.font_system);
        root.paint(&mut painter, rect);

        &mut self.draw_list
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new()
    }
}
