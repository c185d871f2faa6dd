use crate::coords::{Rect, Vec2};

use super::gap::{embedded_label_offset, gap_fraction, GapFraction};
use super::rounded_rect::effective_radius;
use super::{Path, PathMeasure};

/// Visual parameters of one outline, snapshotted for a single computation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeometryConfig {
    /// Field bounds in logical pixels.
    pub bounds: Rect,
    pub corner_radius: f32,
    pub stroke_width: f32,
}

impl GeometryConfig {
    #[inline]
    pub fn new(bounds: Rect, corner_radius: f32, stroke_width: f32) -> Self {
        Self { bounds, corner_radius, stroke_width }
    }

    /// Rectangle the stroke is centred on: bounds inset by half the stroke.
    #[inline]
    pub fn path_rect(&self) -> Rect {
        let half = self.stroke_width.max(0.0) * 0.5;
        self.bounds.inset(half, half)
    }
}

/// Measured border outline of a field.
///
/// Built fresh whenever bounds, corner radius or stroke width change.
#[derive(Debug, Clone)]
pub struct OutlineGeometry {
    config: GeometryConfig,
    radius: f32,
    path: Path,
    measure: PathMeasure,
}

impl OutlineGeometry {
    pub fn new(config: GeometryConfig) -> Self {
        let rect = config.path_rect();
        let radius = effective_radius(rect, config.corner_radius);
        let path = Path::rounded_rect(rect, radius);
        let measure = PathMeasure::new(&path);

        if measure.total_length() <= 0.0 {
            log::debug!("outline geometry is degenerate for bounds {:?}", config.bounds);
        }

        Self { config, radius, path, measure }
    }

    #[inline]
    pub fn config(&self) -> &GeometryConfig {
        &self.config
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn measure(&self) -> &PathMeasure {
        &self.measure
    }

    #[inline]
    pub fn total_length(&self) -> f32 {
        self.measure.total_length()
    }

    /// Corner radius after clamping to the path rectangle.
    #[inline]
    pub fn corner_radius(&self) -> f32 {
        self.radius
    }

    /// X of the path's current point relative to the field's left edge.
    pub fn path_start_x(&self) -> f32 {
        self.path
            .current_point()
            .map_or(0.0, |p| p.x - self.config.bounds.origin.x)
    }

    /// Stroke gap for a label measured at `label_width`.
    pub fn gap_for_label(&self, label_width: f32) -> GapFraction {
        gap_fraction(label_width, self.path_start_x(), self.radius, self.total_length())
    }

    /// Left edge of the embedded label, in absolute coordinates.
    pub fn embedded_label_x(&self) -> f32 {
        self.config.bounds.origin.x + embedded_label_offset(self.path_start_x(), self.radius)
    }

    /// Y of the top stroke's centre line, in absolute coordinates.
    #[inline]
    pub fn top_stroke_y(&self) -> f32 {
        self.config.bounds.origin.y + self.config.stroke_width.max(0.0) * 0.5
    }

    /// Visible stroke pieces when the first `stroke_start` of the path is trimmed off.
    pub fn stroke(&self, stroke_start: f32) -> Vec<Vec<Vec2>> {
        self.measure.trim(stroke_start, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(w: f32, h: f32, radius: f32) -> OutlineGeometry {
        OutlineGeometry::new(GeometryConfig::new(Rect::new(20.0, 40.0, w, h), radius, 2.0))
    }

    #[test]
    fn path_is_stroke_centred() {
        let g = geometry(200.0, 44.0, 7.0);
        assert_eq!(g.config().path_rect(), Rect::new(21.0, 41.0, 198.0, 42.0));
        // Half the stroke plus the radius.
        assert_eq!(g.path_start_x(), 8.0);
        assert_eq!(g.top_stroke_y(), 41.0);
    }

    #[test]
    fn gap_uses_local_start_and_clamped_radius() {
        let g = geometry(200.0, 44.0, 7.0);
        let gap = g.gap_for_label(40.0);
        let expected = (40.0 + 8.0 - 7.0 + 6.0) / g.total_length();
        assert!((gap.end - expected).abs() < 1e-6);
        assert_eq!(gap.start, 0.0);
    }

    #[test]
    fn larger_radius_moves_start_and_changes_gap() {
        let small = geometry(200.0, 44.0, 7.0);
        let large = geometry(200.0, 44.0, 15.0);
        assert!(large.path_start_x() > small.path_start_x());
        assert!(large.total_length() < small.total_length());
        assert_ne!(small.gap_for_label(40.0), large.gap_for_label(40.0));
    }

    #[test]
    fn embedded_label_sits_past_the_corner() {
        let g = geometry(200.0, 44.0, 9.0);
        // 20 (origin) + 1 (half stroke) + 9 (radius) + 2·√9
        assert_eq!(g.embedded_label_x(), 36.0);
    }

    #[test]
    fn empty_bounds_produce_no_gap_and_no_stroke() {
        let g = geometry(0.0, 0.0, 7.0);
        assert_eq!(g.total_length(), 0.0);
        assert_eq!(g.gap_for_label(40.0), GapFraction::NONE);
        assert!(g.stroke(0.0).is_empty());
    }

    #[test]
    fn stroke_start_trims_the_top_edge() {
        let g = geometry(200.0, 44.0, 7.0);
        let full = g.stroke(0.0);
        let trimmed = g.stroke(0.1);
        assert_eq!(full.len(), 1);
        assert_eq!(trimmed.len(), 1);
        assert!(trimmed[0][0].x > full[0][0].x);
        assert_eq!(trimmed[0][0].y, 41.0);
    }
}
