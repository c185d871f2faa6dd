use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Open polyline stroked with a constant width.
///
/// Points are the centre line in logical pixels. Trimmed outlines arrive here
/// already cut, so renderers never need to know about stroke fractions.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokePathCmd {
    pub points: Vec<Vec2>,
    pub width: f32,
    pub color: Color,
}

impl StrokePathCmd {
    /// Sum of the polyline's piece lengths.
    pub fn length(&self) -> f32 {
        self.points.windows(2).map(|w| w[0].distance(w[1])).sum()
    }
}

impl DrawList {
    /// Records a stroked polyline. Polylines with fewer than two points are dropped.
    pub fn push_stroke_path(&mut self, z: ZIndex, points: Vec<Vec2>, width: f32, color: Color) {
        if points.len() < 2 || width <= 0.0 {
            return;
        }
        self.push(z, DrawCmd::StrokePath(StrokePathCmd { points, width, color }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_polylines_are_dropped() {
        let mut list = DrawList::new();
        list.push_stroke_path(ZIndex::new(0), vec![Vec2::zero()], 2.0, Color::black());
        list.push_stroke_path(ZIndex::new(0), vec![Vec2::zero(), Vec2::new(1.0, 0.0)], 0.0, Color::black());
        assert!(list.items().is_empty());
    }

    #[test]
    fn length_sums_pieces() {
        let cmd = StrokePathCmd {
            points: vec![Vec2::zero(), Vec2::new(3.0, 4.0), Vec2::new(3.0, 10.0)],
            width: 1.0,
            color: Color::black(),
        };
        assert_eq!(cmd.length(), 11.0);
    }
}
