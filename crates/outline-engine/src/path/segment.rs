use crate::coords::Vec2;

/// One drawing instruction of an outline.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathSegment {
    /// Starts a new contour at the point without drawing.
    MoveTo(Vec2),
    /// Straight line from the current point.
    LineTo(Vec2),
    /// Cubic Bezier from the current point to `to`.
    CurveTo { to: Vec2, ctrl1: Vec2, ctrl2: Vec2 },
}

impl PathSegment {
    /// The point the pen rests on after this segment.
    #[inline]
    pub fn end_point(&self) -> Vec2 {
        match *self {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => p,
            PathSegment::CurveTo { to, .. } => to,
        }
    }
}

/// An ordered segment stream.
///
/// A well-formed path starts with `MoveTo`. Segments that appear before the
/// first `MoveTo` have no current point and are skipped by the measurer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { segments: Vec::with_capacity(capacity) }
    }

    pub fn move_to(&mut self, p: Vec2) -> &mut Self {
        self.segments.push(PathSegment::MoveTo(p));
        self
    }

    pub fn line_to(&mut self, p: Vec2) -> &mut Self {
        self.segments.push(PathSegment::LineTo(p));
        self
    }

    pub fn curve_to(&mut self, to: Vec2, ctrl1: Vec2, ctrl2: Vec2) -> &mut Self {
        self.segments.push(PathSegment::CurveTo { to, ctrl1, ctrl2 });
        self
    }

    #[inline]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Point of the first `MoveTo`, if any.
    pub fn start_point(&self) -> Option<Vec2> {
        self.segments.iter().find_map(|s| match *s {
            PathSegment::MoveTo(p) => Some(p),
            _ => None,
        })
    }

    /// Where the pen rests after the last segment.
    ///
    /// For a closed contour this equals [`start_point`](Self::start_point).
    #[inline]
    pub fn current_point(&self) -> Option<Vec2> {
        self.segments.last().map(PathSegment::end_point)
    }
}
