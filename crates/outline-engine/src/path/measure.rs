use crate::coords::Vec2;

use super::{Path, PathSegment};

/// Number of flat pieces a cubic Bezier is split into when measuring.
///
/// 50 keeps the chord error of a quarter-circle corner well under a hundredth
/// of a pixel at control sizes of a few hundred points.
pub const CURVE_SUBDIVISIONS: usize = 50;

/// Evaluates `B(t) = (1-t)³P0 + 3(1-t)²t·C1 + 3(1-t)t²·C2 + t³P3`.
#[inline]
pub fn cubic_point(p0: Vec2, c1: Vec2, c2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let mt = 1.0 - t;
    let a = mt * mt * mt;
    let b = 3.0 * mt * mt * t;
    let c = 3.0 * mt * t * t;
    let d = t * t * t;
    Vec2::new(
        a * p0.x + b * c1.x + c * c2.x + d * p3.x,
        a * p0.y + b * c1.y + c * c2.y + d * p3.y,
    )
}

/// Polygonal arc length of a cubic Bezier sampled at [`CURVE_SUBDIVISIONS`]
/// uniform parameter steps.
pub fn cubic_length(p0: Vec2, c1: Vec2, c2: Vec2, p3: Vec2) -> f32 {
    let mut length = 0.0;
    let mut prev = p0;
    for i in 1..=CURVE_SUBDIVISIONS {
        let t = i as f32 / CURVE_SUBDIVISIONS as f32;
        let p = cubic_point(p0, c1, c2, p3, t);
        length += prev.distance(p);
        prev = p;
    }
    length
}

/// Total arc length of a segment stream.
///
/// `MoveTo` moves the pen without adding length. Drawing segments that come
/// before any `MoveTo` have no start point and contribute nothing. An empty
/// stream measures `0.0`.
pub fn total_length(segments: &[PathSegment]) -> f32 {
    let mut total = 0.0;
    let mut current: Option<Vec2> = None;

    for seg in segments {
        match (*seg, current) {
            (PathSegment::MoveTo(p), _) => current = Some(p),
            (PathSegment::LineTo(p), Some(prev)) => {
                total += prev.distance(p);
                current = Some(p);
            }
            (PathSegment::CurveTo { to, ctrl1, ctrl2 }, Some(prev)) => {
                total += cubic_length(prev, ctrl1, ctrl2, to);
                current = Some(to);
            }
            (_, None) => {}
        }
    }
    total
}

// ── PathMeasure ───────────────────────────────────────────────────────────

/// A contiguous flattened stretch of a path (one contour).
#[derive(Debug, Clone, Default)]
struct Run {
    points: Vec<Vec2>,
    /// Arc length from the start of the whole path to each point.
    dist: Vec<f32>,
}

impl Run {
    fn start(&self) -> f32 {
        self.dist.first().copied().unwrap_or(0.0)
    }

    fn end(&self) -> f32 {
        self.dist.last().copied().unwrap_or(0.0)
    }

    /// Point at absolute arc length `d`, clamped to this run.
    fn point_at(&self, d: f32) -> Vec2 {
        let idx = self.dist.partition_point(|&x| x < d);
        if idx == 0 {
            return self.points.first().copied().unwrap_or_default();
        }
        if idx >= self.points.len() {
            return self.points.last().copied().unwrap_or_default();
        }
        let (d0, d1) = (self.dist[idx - 1], self.dist[idx]);
        let t = if d1 > d0 { (d - d0) / (d1 - d0) } else { 0.0 };
        self.points[idx - 1].lerp(self.points[idx], t)
    }

    /// Polyline covering absolute arc lengths `[a, b]` of this run.
    fn slice(&self, a: f32, b: f32) -> Option<Vec<Vec2>> {
        let a = a.max(self.start());
        let b = b.min(self.end());
        if b <= a {
            return None;
        }

        let mut out = vec![self.point_at(a)];
        out.extend(
            self.points
                .iter()
                .zip(&self.dist)
                .filter(|&(_, &d)| d > a && d < b)
                .map(|(&p, _)| p),
        );
        out.push(self.point_at(b));
        Some(out)
    }
}

/// Flattened, arc-length-indexed view of a [`Path`].
///
/// Curves are flattened with the same sampling as [`total_length`], so
/// distances reported here agree with it.
#[derive(Debug, Clone, Default)]
pub struct PathMeasure {
    runs: Vec<Run>,
    /// Cumulative arc length after each segment of the source path.
    segment_ends: Vec<f32>,
    start: Option<Vec2>,
    total: f32,
}

impl PathMeasure {
    pub fn new(path: &Path) -> Self {
        let mut runs: Vec<Run> = Vec::new();
        let mut segment_ends = Vec::with_capacity(path.segments().len());
        let mut current: Option<Vec2> = None;
        let mut total = 0.0f32;

        for seg in path.segments() {
            match (*seg, current) {
                (PathSegment::MoveTo(p), _) => {
                    runs.push(Run { points: vec![p], dist: vec![total] });
                    current = Some(p);
                }
                (PathSegment::LineTo(p), Some(prev)) => {
                    total += prev.distance(p);
                    push_point(&mut runs, p, total);
                    current = Some(p);
                }
                (PathSegment::CurveTo { to, ctrl1, ctrl2 }, Some(prev)) => {
                    let mut last = prev;
                    for i in 1..=CURVE_SUBDIVISIONS {
                        let t = i as f32 / CURVE_SUBDIVISIONS as f32;
                        let p = cubic_point(prev, ctrl1, ctrl2, to, t);
                        total += last.distance(p);
                        push_point(&mut runs, p, total);
                        last = p;
                    }
                    current = Some(to);
                }
                (_, None) => {}
            }
            segment_ends.push(total);
        }

        Self { runs, segment_ends, start: path.start_point(), total }
    }

    /// Total arc length of the measured path.
    #[inline]
    pub fn total_length(&self) -> f32 {
        self.total
    }

    /// First `MoveTo` point: the geometric origin for gap placement.
    #[inline]
    pub fn start_point(&self) -> Option<Vec2> {
        self.start
    }

    /// Cumulative arc length from the path start to the end of segment `index`.
    ///
    /// Out-of-range indices report the total length.
    pub fn length_to_segment(&self, index: usize) -> f32 {
        self.segment_ends.get(index).copied().unwrap_or(self.total)
    }

    /// Point at normalized distance `fraction` (clamped to `[0, 1]`).
    pub fn point_at(&self, fraction: f32) -> Option<Vec2> {
        let d = fraction.clamp(0.0, 1.0) * self.total;
        self.runs
            .iter()
            .find(|run| d <= run.end())
            .or(self.runs.last())
            .map(|run| run.point_at(d))
    }

    /// Polylines covering the normalized range `[start, end]` of the path.
    ///
    /// This is how a renderer draws a stroke with a start/end trim: each
    /// returned polyline is one connected piece. A zero-length path, or an
    /// empty range, produces nothing.
    pub fn trim(&self, start: f32, end: f32) -> Vec<Vec<Vec2>> {
        if self.total.is_nan() || self.total <= 0.0 {
            return Vec::new();
        }
        let start = start.clamp(0.0, 1.0);
        let end = end.clamp(0.0, 1.0);
        if end <= start {
            return Vec::new();
        }

        let (a, b) = (start * self.total, end * self.total);
        self.runs.iter().filter_map(|run| run.slice(a, b)).collect()
    }
}

fn push_point(runs: &mut [Run], p: Vec2, dist: f32) {
    if let Some(run) = runs.last_mut() {
        run.points.push(p);
        run.dist.push(dist);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;
    use crate::path::CIRCLE_KAPPA;
    use std::f32::consts::PI;

    fn approx(a: f32, b: f32, eps: f32) -> bool {
        (a - b).abs() <= eps
    }

    // ── total_length ──────────────────────────────────────────────────────

    #[test]
    fn single_line_measures_its_span() {
        for x in [0.0, 1.0, 42.5, -17.0] {
            let segs = [PathSegment::MoveTo(Vec2::zero()), PathSegment::LineTo(Vec2::new(x, 0.0))];
            assert_eq!(total_length(&segs), x.abs());
        }
    }

    #[test]
    fn lone_move_to_measures_zero() {
        assert_eq!(total_length(&[PathSegment::MoveTo(Vec2::new(3.0, 4.0))]), 0.0);
    }

    #[test]
    fn empty_stream_measures_zero() {
        assert_eq!(total_length(&[]), 0.0);
    }

    #[test]
    fn segments_before_move_to_are_ignored() {
        let segs = [
            PathSegment::LineTo(Vec2::new(100.0, 0.0)),
            PathSegment::MoveTo(Vec2::zero()),
            PathSegment::LineTo(Vec2::new(0.0, 5.0)),
        ];
        assert_eq!(total_length(&segs), 5.0);
    }

    #[test]
    fn move_to_breaks_do_not_add_length() {
        let segs = [
            PathSegment::MoveTo(Vec2::zero()),
            PathSegment::LineTo(Vec2::new(10.0, 0.0)),
            PathSegment::MoveTo(Vec2::new(500.0, 500.0)),
            PathSegment::LineTo(Vec2::new(500.0, 510.0)),
        ];
        assert_eq!(total_length(&segs), 20.0);
    }

    #[test]
    fn colinear_cubic_matches_straight_distance() {
        let p0 = Vec2::new(0.0, 0.0);
        let p3 = Vec2::new(120.0, 90.0);
        let segs = [
            PathSegment::MoveTo(p0),
            PathSegment::CurveTo { to: p3, ctrl1: p0.lerp(p3, 1.0 / 3.0), ctrl2: p0.lerp(p3, 2.0 / 3.0) },
        ];
        let expected = 150.0;
        let got = total_length(&segs);
        assert!((got - expected).abs() / expected < 0.005, "got {got}");
    }

    #[test]
    fn quarter_circle_corner_is_close_to_arc_length() {
        let r = 20.0;
        let k = r * CIRCLE_KAPPA;
        let len = cubic_length(
            Vec2::new(0.0, 0.0),
            Vec2::new(k, 0.0),
            Vec2::new(r, r - k),
            Vec2::new(r, r),
        );
        assert!(approx(len, PI * r / 2.0, 0.02), "got {len}");
    }

    #[test]
    fn rounded_rect_length_is_sides_plus_circle() {
        let path = Path::rounded_rect(Rect::new(0.0, 0.0, 100.0, 50.0), 10.0);
        let expected = 2.0 * 80.0 + 2.0 * 30.0 + 2.0 * PI * 10.0;
        let got = total_length(path.segments());
        assert!(approx(got, expected, 0.1), "got {got}, expected {expected}");
    }

    // ── PathMeasure ───────────────────────────────────────────────────────

    #[test]
    fn measure_agrees_with_total_length() {
        let path = Path::rounded_rect(Rect::new(1.0, 1.0, 198.0, 42.0), 7.0);
        let m = PathMeasure::new(&path);
        assert!(approx(m.total_length(), total_length(path.segments()), 0.01));
        assert_eq!(m.start_point(), Some(Vec2::new(8.0, 1.0)));
    }

    #[test]
    fn length_to_segment_is_cumulative() {
        let path = Path::rounded_rect(Rect::new(0.0, 0.0, 100.0, 50.0), 0.0);
        let m = PathMeasure::new(&path);
        assert_eq!(m.length_to_segment(0), 0.0);
        assert_eq!(m.length_to_segment(1), 100.0);
        assert_eq!(m.length_to_segment(2), 150.0);
        assert_eq!(m.length_to_segment(4), 300.0);
        assert_eq!(m.length_to_segment(99), 300.0);
    }

    #[test]
    fn point_at_walks_the_contour() {
        let path = Path::rounded_rect(Rect::new(0.0, 0.0, 100.0, 50.0), 0.0);
        let m = PathMeasure::new(&path);
        assert_eq!(m.point_at(0.0), Some(Vec2::new(0.0, 0.0)));
        assert_eq!(m.point_at(0.25), Some(Vec2::new(75.0, 0.0)));
        assert_eq!(m.point_at(0.5), Some(Vec2::new(100.0, 50.0)));
        assert_eq!(m.point_at(2.0), Some(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn trim_skips_the_leading_gap() {
        let path = Path::rounded_rect(Rect::new(0.0, 0.0, 100.0, 50.0), 0.0);
        let m = PathMeasure::new(&path);
        let pieces = m.trim(0.1, 1.0);
        assert_eq!(pieces.len(), 1);
        let piece = &pieces[0];
        assert_eq!(piece.len(), 5); // cut point, 3 corners, back at the start
        assert!(approx(piece[0].x, 30.0, 1e-4) && piece[0].y == 0.0);
        assert_eq!(piece[1], Vec2::new(100.0, 0.0));
        assert_eq!(piece[4], Vec2::new(0.0, 0.0));
    }

    #[test]
    fn trim_of_empty_range_or_degenerate_path_is_empty() {
        let path = Path::rounded_rect(Rect::new(0.0, 0.0, 100.0, 50.0), 5.0);
        let m = PathMeasure::new(&path);
        assert!(m.trim(0.5, 0.5).is_empty());
        assert!(m.trim(0.8, 0.2).is_empty());

        let mut lone = Path::new();
        lone.move_to(Vec2::new(4.0, 4.0));
        assert!(PathMeasure::new(&lone).trim(0.0, 1.0).is_empty());
    }

    #[test]
    fn trim_keeps_contours_separate() {
        let mut path = Path::new();
        path.move_to(Vec2::zero())
            .line_to(Vec2::new(10.0, 0.0))
            .move_to(Vec2::new(0.0, 20.0))
            .line_to(Vec2::new(10.0, 20.0));
        let pieces = PathMeasure::new(&path).trim(0.0, 1.0);
        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[1], vec![Vec2::new(0.0, 20.0), Vec2::new(10.0, 20.0)]);
    }
}
