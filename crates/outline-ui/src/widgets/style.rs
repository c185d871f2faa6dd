use outline_engine::paint::Color;
use outline_engine::time::AnimationSpec;

/// Extra leading, past the text inset, of the inline placeholder label.
pub const INLINE_LABEL_INDENT: f32 = 7.0;

/// Visual configuration of an [`OutlinedTextField`](super::OutlinedTextField).
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineStyle {
    pub outline_color: Color,
    /// Placeholder color while inline.
    pub placeholder_color: Color,
    /// Placeholder color while seated in the border.
    pub outlined_placeholder_color: Color,
    pub text_color: Color,
    pub caret_color: Color,
    /// Border stroke width.
    pub line_width: f32,
    pub left_text_inset: f32,
    pub right_text_inset: f32,
    pub corner_radius: f32,
    pub font_size: f32,
    /// Placeholder font size while inline.
    pub placeholder_font_size: f32,
    /// Placeholder font size while seated in the border.
    pub outlined_placeholder_font_size: f32,
    /// Preferred height when the parent leaves it open.
    pub min_height: f32,
    pub animation: AnimationSpec,
}

impl Default for OutlineStyle {
    fn default() -> Self {
        Self {
            outline_color: Color::black(),
            placeholder_color: Color::from_straight(0.235, 0.235, 0.263, 0.3),
            outlined_placeholder_color: Color::black(),
            text_color: Color::black(),
            caret_color: Color::from_straight(0.0, 0.478, 1.0, 1.0),
            line_width: 2.0,
            left_text_inset: 3.0,
            right_text_inset: 3.0,
            corner_radius: 7.0,
            font_size: 17.0,
            placeholder_font_size: 18.0,
            outlined_placeholder_font_size: 12.0,
            min_height: 44.0,
            animation: AnimationSpec::default(),
        }
    }
}

impl OutlineStyle {
    /// Horizontal offset of the inline label from the field's left edge.
    #[inline]
    pub fn inline_label_offset(&self) -> f32 {
        self.line_width + self.left_text_inset + INLINE_LABEL_INDENT
    }
}
