use outline_engine::coords::{Rect, Vec2};
use outline_engine::input::Key;
use outline_engine::paint::Color;
use outline_engine::path::{GapFraction, GeometryConfig, OutlineGeometry};
use outline_engine::text::FontId;
use outline_engine::time::{AnimationSpec, Tween};

use crate::constraints::{inset_rect, Constraints, Edges, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::Widget;

use super::placeholder::{
    PlaceholderBehavior, PlaceholderMachine, PlaceholderState, Transition,
};
use super::style::OutlineStyle;

/// Single-line text field with a stroked rounded border.
///
/// The placeholder sits inside the field until it is focused or holds text,
/// then moves into a gap cut out of the top border. The gap is a trim of the
/// border's stroke, computed from the measured label width and corner radius.
///
/// # Example
/// ```rust,ignore
/// OutlinedTextField::new()
///     .font(body_font)
///     .placeholder("Email")
///     .corner_radius(9.0)
///     .on_submit(|v| println!("submitted: {v}"))
/// ```
pub struct OutlinedTextField {
    text: String,
    placeholder: String,
    font: Option<FontId>,
    focused: bool,
    style: OutlineStyle,
    machine: PlaceholderMachine,
    /// Rect of the last layout pass, if any.
    bounds: Option<Rect>,
    geometry: Option<OutlineGeometry>,
    gap: GapFraction,
    /// Normalized trim applied to the start of the border path.
    stroke_start: Tween<f32>,
    /// 0 = inline, 1 = embedded.
    label_lift: Tween<f32>,
    on_change: Option<Box<dyn FnMut(String)>>,
    on_submit: Option<Box<dyn FnMut(String)>>,
    on_focus: Option<Box<dyn FnMut()>>,
    on_blur: Option<Box<dyn FnMut()>>,
}

impl Default for OutlinedTextField {
    fn default() -> Self {
        Self::new()
    }
}

impl OutlinedTextField {
    pub fn new() -> Self {
        let style = OutlineStyle::default();
        Self {
            text: String::new(),
            placeholder: String::new(),
            font: None,
            focused: false,
            machine: PlaceholderMachine::default(),
            bounds: None,
            geometry: None,
            gap: GapFraction::NONE,
            stroke_start: Tween::settled(0.0, style.animation),
            label_lift: Tween::settled(0.0, style.animation),
            style,
            on_change: None,
            on_submit: None,
            on_focus: None,
            on_blur: None,
        }
    }

    // ── builder ───────────────────────────────────────────────────────────
    //
    // Builders that touch the gap drop the cached layout, so the next
    // `layout` seats the label and border from scratch without animating.

    pub fn text(mut self, v: impl Into<String>) -> Self {
        self.text = v.into();
        // Seated by the next layout.
        let _ = self.machine.on_text_changed(self.text.is_empty(), self.focused);
        self.invalidate_layout();
        self
    }

    pub fn placeholder(mut self, v: impl Into<String>) -> Self {
        self.placeholder = v.into();
        self.invalidate_layout();
        self
    }

    pub fn font(mut self, v: FontId) -> Self {
        self.font = Some(v);
        self.invalidate_layout();
        self
    }

    pub fn behavior(mut self, v: PlaceholderBehavior) -> Self {
        let _ = self.machine.set_behavior(v);
        let _ = self.machine.on_text_changed(self.text.is_empty(), self.focused);
        self.invalidate_layout();
        self
    }

    pub fn style(mut self, v: OutlineStyle) -> Self {
        self.stroke_start.set_spec(v.animation);
        self.label_lift.set_spec(v.animation);
        self.style = v;
        self.invalidate_layout();
        self
    }

    pub fn outline_color(mut self, v: Color) -> Self { self.style.outline_color = v; self }
    pub fn placeholder_color(mut self, v: Color) -> Self { self.style.placeholder_color = v; self }
    pub fn outlined_placeholder_color(mut self, v: Color) -> Self { self.style.outlined_placeholder_color = v; self }
    pub fn text_color(mut self, v: Color) -> Self { self.style.text_color = v; self }
    pub fn caret_color(mut self, v: Color) -> Self { self.style.caret_color = v; self }
    pub fn line_width(mut self, v: f32) -> Self { self.style.line_width = v; self.invalidate_layout(); self }
    pub fn corner_radius(mut self, v: f32) -> Self { self.style.corner_radius = v; self.invalidate_layout(); self }
    pub fn left_text_inset(mut self, v: f32) -> Self { self.style.left_text_inset = v; self }
    pub fn right_text_inset(mut self, v: f32) -> Self { self.style.right_text_inset = v; self }
    pub fn font_size(mut self, v: f32) -> Self { self.style.font_size = v; self }
    pub fn placeholder_font_size(mut self, v: f32) -> Self { self.style.placeholder_font_size = v; self }
    pub fn outlined_placeholder_font_size(mut self, v: f32) -> Self {
        self.style.outlined_placeholder_font_size = v;
        self.invalidate_layout();
        self
    }

    pub fn animation(mut self, v: AnimationSpec) -> Self {
        self.style.animation = v;
        self.stroke_start.set_spec(v);
        self.label_lift.set_spec(v);
        self
    }

    pub fn on_change(mut self, f: impl FnMut(String) + 'static) -> Self { self.on_change = Some(Box::new(f)); self }
    pub fn on_submit(mut self, f: impl FnMut(String) + 'static) -> Self { self.on_submit = Some(Box::new(f)); self }
    pub fn on_focus(mut self, f: impl FnMut() + 'static) -> Self { self.on_focus = Some(Box::new(f)); self }
    pub fn on_blur(mut self, f: impl FnMut() + 'static) -> Self { self.on_blur = Some(Box::new(f)); self }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn text_value(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn placeholder_text(&self) -> &str {
        &self.placeholder
    }

    #[inline]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    #[inline]
    pub fn placeholder_state(&self) -> PlaceholderState {
        self.machine.state()
    }

    #[inline]
    pub fn placeholder_behavior(&self) -> PlaceholderBehavior {
        self.machine.behavior()
    }

    #[inline]
    pub fn outline_style(&self) -> &OutlineStyle {
        &self.style
    }

    /// Gap the border is heading toward.
    #[inline]
    pub fn gap(&self) -> GapFraction {
        self.gap
    }

    /// Current (possibly mid-animation) stroke start-trim.
    #[inline]
    pub fn stroke_start(&self) -> f32 {
        self.stroke_start.value()
    }

    #[inline]
    pub fn stroke_animation(&self) -> &Tween<f32> {
        &self.stroke_start
    }

    /// Label position between inline (0) and embedded (1).
    #[inline]
    pub fn label_progress(&self) -> f32 {
        self.label_lift.value()
    }

    /// Outline geometry of the last layout pass.
    #[inline]
    pub fn geometry(&self) -> Option<&OutlineGeometry> {
        self.geometry.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.stroke_start.is_running() || self.label_lift.is_running()
    }

    // ── live updates ──────────────────────────────────────────────────────

    /// Places the field at `rect`. A changed rect re-seats the gap at once.
    pub fn layout(&mut self, rect: Rect, ctx: &LayoutCtx<'_>) {
        if self.bounds == Some(rect) {
            return;
        }
        self.bounds = Some(rect);
        self.rebuild_geometry();
        if self.machine.is_embedded() {
            self.gap = self.compute_gap(ctx);
            self.stroke_start.snap(self.gap.end);
            self.label_lift.snap(1.0);
        } else {
            self.gap = GapFraction::NONE;
            self.stroke_start.snap(0.0);
            self.label_lift.snap(0.0);
        }
    }

    pub fn on_focus_gained(&mut self, ctx: &LayoutCtx<'_>) {
        if self.focused {
            return;
        }
        self.focused = true;
        let t = self.machine.on_focus_gained(self.text.is_empty());
        self.apply(t, ctx);
        if let Some(f) = &mut self.on_focus {
            f();
        }
    }

    pub fn on_focus_lost(&mut self, ctx: &LayoutCtx<'_>) {
        if !self.focused {
            return;
        }
        self.focused = false;
        let t = self.machine.on_focus_lost(self.text.is_empty());
        self.apply(t, ctx);
        if let Some(f) = &mut self.on_blur {
            f();
        }
    }

    /// Replaces the content without firing `on_change`.
    pub fn set_text(&mut self, text: impl Into<String>, ctx: &LayoutCtx<'_>) {
        self.text = text.into();
        self.text_changed(ctx);
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>, ctx: &LayoutCtx<'_>) {
        self.placeholder = placeholder.into();
        self.metrics_changed(ctx);
    }

    /// Swaps the label font. While embedded the gap resizes to the new width.
    pub fn set_font(&mut self, font: FontId, ctx: &LayoutCtx<'_>) {
        self.font = Some(font);
        self.metrics_changed(ctx);
    }

    pub fn set_corner_radius(&mut self, radius: f32, ctx: &LayoutCtx<'_>) {
        self.style.corner_radius = radius;
        self.rebuild_geometry();
        self.metrics_changed(ctx);
    }

    pub fn set_line_width(&mut self, width: f32, ctx: &LayoutCtx<'_>) {
        self.style.line_width = width;
        self.rebuild_geometry();
        self.metrics_changed(ctx);
    }

    pub fn set_outlined_placeholder_font_size(&mut self, size: f32, ctx: &LayoutCtx<'_>) {
        self.style.outlined_placeholder_font_size = size;
        self.metrics_changed(ctx);
    }

    pub fn set_behavior(&mut self, behavior: PlaceholderBehavior, ctx: &LayoutCtx<'_>) {
        let t = self.machine.set_behavior(behavior);
        self.apply(t, ctx);
        let t = self.machine.on_text_changed(self.text.is_empty(), self.focused);
        self.apply(t, ctx);
    }

    /// Advances running animations by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        self.stroke_start.advance(dt);
        self.label_lift.advance(dt);
    }

    // ── internals ─────────────────────────────────────────────────────────

    fn text_changed(&mut self, ctx: &LayoutCtx<'_>) {
        let t = self.machine.on_text_changed(self.text.is_empty(), self.focused);
        self.apply(t, ctx);
    }

    fn metrics_changed(&mut self, ctx: &LayoutCtx<'_>) {
        let t = self.machine.on_metrics_changed();
        self.apply(t, ctx);
    }

    fn geometry_config(&self, rect: Rect) -> GeometryConfig {
        GeometryConfig::new(rect, self.style.corner_radius, self.style.line_width)
    }

    fn invalidate_layout(&mut self) {
        self.bounds = None;
        self.geometry = None;
    }

    fn rebuild_geometry(&mut self) {
        self.geometry = self.bounds.map(|rect| OutlineGeometry::new(self.geometry_config(rect)));
    }

    /// Width of the label at its embedded size.
    fn label_width(&self, ctx: &LayoutCtx<'_>) -> f32 {
        match self.font {
            Some(font) if !self.placeholder.is_empty() => {
                ctx.measure_text(&self.placeholder, font, self.style.outlined_placeholder_font_size).x
            }
            _ => 0.0,
        }
    }

    fn compute_gap(&self, ctx: &LayoutCtx<'_>) -> GapFraction {
        let Some(geometry) = &self.geometry else {
            return GapFraction::NONE;
        };
        let label_width = self.label_width(ctx);
        let gap = geometry.gap_for_label(label_width);
        log::debug!(
            "outline gap end {:.4} (label {:.1}px, path {:.1}px)",
            gap.end,
            label_width,
            geometry.total_length(),
        );
        gap
    }

    fn apply(&mut self, transition: Option<Transition>, ctx: &LayoutCtx<'_>) {
        let Some(transition) = transition else { return };
        let laid_out = self.bounds.is_some();

        match transition {
            Transition::Embed { animated } => {
                self.gap = self.compute_gap(ctx);
                if animated && laid_out {
                    self.stroke_start.animate(self.stroke_start.value(), self.gap.end);
                    self.label_lift.animate(self.label_lift.value(), 1.0);
                } else {
                    self.stroke_start.snap(self.gap.end);
                    self.label_lift.snap(1.0);
                }
            }
            Transition::Release => {
                self.gap = GapFraction::NONE;
                if laid_out {
                    self.stroke_start.animate(self.stroke_start.value(), 0.0);
                    self.label_lift.animate(self.label_lift.value(), 0.0);
                } else {
                    self.stroke_start.snap(0.0);
                    self.label_lift.snap(0.0);
                }
            }
            Transition::Resize => {
                let old = self.gap.end;
                self.gap = self.compute_gap(ctx);
                if !laid_out {
                    self.stroke_start.snap(self.gap.end);
                } else {
                    let from = if self.stroke_start.is_running() { self.stroke_start.value() } else { old };
                    if from != self.gap.end {
                        self.stroke_start.animate(from, self.gap.end);
                    }
                }
            }
        }
    }

    fn text_rect(&self, rect: Rect) -> Rect {
        let s = &self.style;
        inset_rect(rect, Edges::sides(s.line_width + s.left_text_inset, s.line_width + s.right_text_inset))
    }

    fn paint_label(&self, painter: &mut Painter, rect: Rect, geometry: &OutlineGeometry, font: FontId) {
        if self.placeholder.is_empty() || !self.machine.label_visible(self.text.is_empty()) {
            return;
        }
        let s = &self.style;
        let size = if self.machine.is_embedded() {
            s.outlined_placeholder_font_size
        } else {
            s.placeholder_font_size
        };
        let label = painter.measure_text(&self.placeholder, font, size);
        let lift = self.label_lift.value();

        let inline = Vec2::new(
            rect.origin.x + s.inline_label_offset(),
            rect.origin.y + (rect.size.y - label.y) * 0.5,
        );
        let embedded = Vec2::new(geometry.embedded_label_x(), geometry.top_stroke_y() - label.y * 0.5);
        let color = s.placeholder_color.lerp(s.outlined_placeholder_color, lift);

        painter.text(self.placeholder.clone(), font, size, color, inline.lerp(embedded, lift));
    }
}

impl Widget for OutlinedTextField {
    fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
        let width = if constraints.max.x.is_finite() { constraints.max.x } else { 240.0 };
        constraints.constrain(Vec2::new(width, self.style.min_height))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let s = &self.style;
        let config = self.geometry_config(rect);
        let fresh;
        let geometry = match &self.geometry {
            Some(g) if *g.config() == config => g,
            _ => {
                fresh = OutlineGeometry::new(config);
                &fresh
            }
        };

        for piece in geometry.stroke(self.stroke_start.value()) {
            painter.stroke_polyline(piece, s.line_width, s.outline_color);
        }

        let Some(font) = self.font else { return };
        let text_rect = self.text_rect(rect);

        let text_width = if self.text.is_empty() {
            0.0
        } else {
            let size = painter.measure_text(&self.text, font, s.font_size);
            let origin = Vec2::new(
                text_rect.origin.x,
                text_rect.origin.y + (text_rect.size.y - size.y) * 0.5,
            );
            painter.push_clip(text_rect);
            painter.text(self.text.clone(), font, s.font_size, s.text_color, origin);
            painter.pop_clip();
            size.x
        };

        self.paint_label(painter, rect, geometry, font);

        if self.focused {
            let caret_h = s.font_size * 1.2;
            let max_x = text_rect.origin.x + text_rect.size.x - 2.0;
            let x = (text_rect.origin.x + text_width + 1.0).min(max_x);
            let y = text_rect.origin.y + (text_rect.size.y - caret_h) * 0.5;
            painter.fill_rect(Rect::new(x, y, 2.0, caret_h), s.caret_color);
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx<'_>) -> EventResult {
        self.layout(rect, ctx);

        match event {
            UiEvent::Tick { dt } => {
                self.tick(*dt);
                EventResult::Ignored
            }
            UiEvent::Click { pos } => {
                if rect.contains(*pos) {
                    self.on_focus_gained(ctx);
                    EventResult::Consumed
                } else {
                    self.on_focus_lost(ctx);
                    EventResult::Ignored
                }
            }
            UiEvent::TextInput { text } if self.focused => {
                let typed: String = text.chars().filter(|c| !c.is_control()).collect();
                if typed.is_empty() {
                    return EventResult::Ignored;
                }
                self.text.push_str(&typed);
                self.text_changed(ctx);
                if let Some(f) = &mut self.on_change {
                    f(self.text.clone());
                }
                EventResult::Consumed
            }
            UiEvent::KeyPress { key, .. } if self.focused => match key {
                Key::Backspace => {
                    if self.text.pop().is_some() {
                        self.text_changed(ctx);
                        if let Some(f) = &mut self.on_change {
                            f(self.text.clone());
                        }
                    }
                    EventResult::Consumed
                }
                Key::Enter => {
                    if let Some(f) = &mut self.on_submit {
                        f(self.text.clone());
                    }
                    EventResult::Consumed
                }
                Key::Escape => {
                    self.on_focus_lost(ctx);
                    EventResult::Consumed
                }
                // Focus moves on; the host picks the next field.
                Key::Tab => {
                    self.on_focus_lost(ctx);
                    EventResult::Ignored
                }
            },
            _ => EventResult::Ignored,
        }
    }
}
