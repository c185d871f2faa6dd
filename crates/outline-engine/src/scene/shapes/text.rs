use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};
use crate::text::FontId;

/// One line of shaped-by-the-renderer text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub font: FontId,
    pub size: f32,
    pub color: Color,
    /// Top-left corner of the line box.
    pub origin: Vec2,
}

impl DrawList {
    /// Records a line of text. Empty strings and non-positive sizes draw nothing.
    pub fn push_text(
        &mut self,
        z: ZIndex,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        origin: Vec2,
    ) {
        let text = text.into();
        if text.is_empty() || size.is_nan() || size <= 0.0 {
            return;
        }
        self.push(z, DrawCmd::Text(TextCmd { text, font, size, color, origin }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_or_sizeless_text_is_dropped() {
        let mut list = DrawList::new();
        let font = FontId::from_index(0);
        list.push_text(ZIndex::new(0), "", font, 12.0, Color::black(), Vec2::zero());
        list.push_text(ZIndex::new(0), "a", font, 0.0, Color::black(), Vec2::zero());
        list.push_text(ZIndex::new(0), "a", font, f32::NAN, Color::black(), Vec2::zero());
        assert!(list.items().is_empty());

        list.push_text(ZIndex::new(1), "Email", font, 12.0, Color::black(), Vec2::new(4.0, 2.0));
        assert_eq!(list.items().len(), 1);
    }
}
