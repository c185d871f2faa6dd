use crate::coords::Rect;

use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command + clip rect.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
    /// Scissor rect in logical pixels. `None` = no clipping.
    pub clip_rect: Option<Rect>,
}

/// Recorded draw stream for one frame.
///
/// Items keep insertion order; [`iter_in_paint_order`](Self::iter_in_paint_order)
/// yields them back-to-front. Clip regions nest: each pushed clip is
/// intersected with its parent.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,
    clip_stack: Vec<Rect>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items and the clip stack. Keeps allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.clip_stack.clear();
    }

    /// Items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// Draw commands in insertion order, without sort keys or clips.
    pub fn commands(&self) -> impl Iterator<Item = &DrawCmd> {
        self.items.iter().map(|item| &item.cmd)
    }

    /// Pushes a draw command; it inherits the current clip rect.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
            clip_rect: self.clip_stack.last().copied(),
        });
    }

    /// Begins a clip region. Must be balanced with [`pop_clip`](Self::pop_clip).
    #[inline]
    pub fn push_clip(&mut self, rect: Rect) {
        let effective = match self.clip_stack.last() {
            None => rect,
            // No overlap with the parent: zero-area clip, renderers skip it.
            Some(&parent) => parent.intersect(rect).unwrap_or_default(),
        };
        self.clip_stack.push(effective);
    }

    /// Ends the most recent clip region.
    #[inline]
    pub fn pop_clip(&mut self) {
        debug_assert!(!self.clip_stack.is_empty(), "pop_clip called without matching push_clip");
        self.clip_stack.pop();
    }

    /// Items back-to-front: ascending z, then insertion order.
    pub fn iter_in_paint_order(&self) -> impl Iterator<Item = &DrawItem> {
        let mut sorted: Vec<&DrawItem> = self.items.iter().collect();
        sorted.sort_by_key(|item| item.key);
        sorted.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    fn unit_rect(list: &mut DrawList, z: i32) {
        list.push_solid_rect(ZIndex::new(z), Rect::new(0.0, 0.0, 1.0, 1.0), Color::black());
    }

    #[test]
    fn paint_order_sorts_by_z_then_insertion() {
        let mut list = DrawList::new();
        unit_rect(&mut list, 2);
        unit_rect(&mut list, 0);
        unit_rect(&mut list, 2);
        let orders: Vec<(i32, u32)> =
            list.iter_in_paint_order().map(|i| (i.key.z.0, i.key.order)).collect();
        assert_eq!(orders, vec![(0, 1), (2, 0), (2, 2)]);
    }

    #[test]
    fn nested_clips_intersect() {
        let mut list = DrawList::new();
        list.push_clip(Rect::new(0.0, 0.0, 100.0, 100.0));
        list.push_clip(Rect::new(50.0, 50.0, 100.0, 100.0));
        unit_rect(&mut list, 0);
        list.pop_clip();
        unit_rect(&mut list, 0);
        list.pop_clip();
        unit_rect(&mut list, 0);

        let clips: Vec<Option<Rect>> = list.items().iter().map(|i| i.clip_rect).collect();
        assert_eq!(clips, vec![
            Some(Rect::new(50.0, 50.0, 50.0, 50.0)),
            Some(Rect::new(0.0, 0.0, 100.0, 100.0)),
            None,
        ]);
    }

    #[test]
    fn clear_resets_order() {
        let mut list = DrawList::new();
        unit_rect(&mut list, 0);
        list.clear();
        list.push_stroke_path(ZIndex::new(0), vec![Vec2::zero(), Vec2::new(1.0, 1.0)], 1.0, Color::black());
        assert_eq!(list.items().len(), 1);
        assert_eq!(list.items()[0].key.order, 0);
    }
}
