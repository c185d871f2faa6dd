use crate::coords::{Rect, Vec2};

use super::Path;

/// Control-point distance, as a fraction of the radius, for approximating a
/// quarter circle with one cubic Bezier.
pub const CIRCLE_KAPPA: f32 = 0.552_284_8;

impl Path {
    /// Closed rounded-rectangle outline.
    ///
    /// The contour starts on the top edge just after the top-left corner and
    /// runs clockwise on screen (right along the top edge first), ending back
    /// at the start point. `radius` is clamped to `[0, min(w, h) / 2]`.
    ///
    /// Layout: `MoveTo`, then four `LineTo` + `CurveTo` pairs (one per side
    /// and corner). Zero-radius rectangles use plain lines at the corners.
    pub fn rounded_rect(rect: Rect, radius: f32) -> Path {
        let r = effective_radius(rect, radius);
        let (x0, y0) = (rect.origin.x, rect.origin.y);
        let (x1, y1) = (x0 + rect.size.x.max(0.0), y0 + rect.size.y.max(0.0));

        let mut path = Path::with_capacity(9);
        path.move_to(Vec2::new(x0 + r, y0));

        if r <= 0.0 {
            path.line_to(Vec2::new(x1, y0))
                .line_to(Vec2::new(x1, y1))
                .line_to(Vec2::new(x0, y1))
                .line_to(Vec2::new(x0, y0));
            return path;
        }

        // Distance from a corner to each of its control points.
        let k = r * (1.0 - CIRCLE_KAPPA);

        path.line_to(Vec2::new(x1 - r, y0))
            .curve_to(Vec2::new(x1, y0 + r), Vec2::new(x1 - k, y0), Vec2::new(x1, y0 + k))
            .line_to(Vec2::new(x1, y1 - r))
            .curve_to(Vec2::new(x1 - r, y1), Vec2::new(x1, y1 - k), Vec2::new(x1 - k, y1))
            .line_to(Vec2::new(x0 + r, y1))
            .curve_to(Vec2::new(x0, y1 - r), Vec2::new(x0 + k, y1), Vec2::new(x0, y1 - k))
            .line_to(Vec2::new(x0, y0 + r))
            .curve_to(Vec2::new(x0 + r, y0), Vec2::new(x0, y0 + k), Vec2::new(x0 + k, y0));
        path
    }
}

/// Corner radius actually used for `rect`: never negative, never more than
/// half the shorter side.
#[inline]
pub(crate) fn effective_radius(rect: Rect, radius: f32) -> f32 {
    let limit = (rect.size.x.min(rect.size.y) * 0.5).max(0.0);
    if radius.is_finite() { radius.clamp(0.0, limit) } else { 0.0 }
}
