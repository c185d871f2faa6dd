/// Extra stroke length left open past the label, in path-length units.
///
/// Keeps anti-aliased stroke ends from touching the label glyphs.
pub const GAP_PADDING: f32 = 6.0;

/// Normalized `[start, end]` range of the border stroke left undrawn so the
/// placeholder label can sit inside the top edge.
///
/// Invariant: `0 <= start <= end <= 1`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct GapFraction {
    pub start: f32,
    pub end: f32,
}

impl GapFraction {
    /// No gap: the whole stroke is drawn.
    pub const NONE: GapFraction = GapFraction { start: 0.0, end: 0.0 };

    #[inline]
    pub fn is_empty(self) -> bool {
        self.end <= self.start
    }

    /// Normalized length of the gap.
    #[inline]
    pub fn len(self) -> f32 {
        (self.end - self.start).max(0.0)
    }
}

/// Computes the stroke gap for a label of `label_width` seated at the start of
/// a path whose first point has x coordinate `path_start_x`.
///
/// `path_start_x` is measured in the field's own coordinate space (its left
/// edge is 0). The gap always starts at the path origin; its end is
///
/// ```text
/// (label_width + path_start_x - corner_radius + GAP_PADDING) / total_path_length
/// ```
///
/// clamped to `[0, 1]`. An empty label or a zero-length (or non-finite) path
/// yields [`GapFraction::NONE`].
pub fn gap_fraction(
    label_width: f32,
    path_start_x: f32,
    corner_radius: f32,
    total_path_length: f32,
) -> GapFraction {
    if !(label_width > 0.0) {
        return GapFraction::NONE;
    }
    if !(total_path_length > 0.0) || !total_path_length.is_finite() {
        return GapFraction::NONE;
    }

    let end = (label_width + path_start_x - corner_radius + GAP_PADDING) / total_path_length;
    if !end.is_finite() {
        return GapFraction::NONE;
    }
    GapFraction { start: 0.0, end: end.clamp(0.0, 1.0) }
}

/// Horizontal offset of the embedded label from the field's left edge.
///
/// Places the label a little past where the top edge leaves the corner curve.
#[inline]
pub fn embedded_label_offset(path_start_x: f32, corner_radius: f32) -> f32 {
    path_start_x + 2.0 * corner_radius.max(0.0).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_scenario_is_exact() {
        let gap = gap_fraction(50.0, 10.0, 7.0, 200.0);
        assert_eq!(gap.start, 0.0);
        assert_eq!(gap.end, 0.295);
    }

    #[test]
    fn empty_label_has_no_gap() {
        for (start_x, radius, total) in [(10.0, 7.0, 200.0), (0.0, 0.0, 0.0), (90.0, 40.0, 1.0)] {
            assert_eq!(gap_fraction(0.0, start_x, radius, total), GapFraction::NONE);
        }
    }

    #[test]
    fn zero_length_path_is_guarded() {
        let gap = gap_fraction(50.0, 10.0, 7.0, 0.0);
        assert_eq!(gap, GapFraction::NONE);
        assert!(gap.end.is_finite());
        assert_eq!(gap_fraction(50.0, 10.0, 7.0, f32::NAN), GapFraction::NONE);
        assert_eq!(gap_fraction(50.0, 10.0, 7.0, f32::INFINITY), GapFraction::NONE);
    }

    #[test]
    fn wider_label_opens_a_wider_gap() {
        let mut last = 0.0;
        for w in [1.0, 5.0, 20.0, 50.0, 80.0] {
            let end = gap_fraction(w, 10.0, 7.0, 400.0).end;
            assert!(end > last, "{end} should exceed {last}");
            last = end;
        }
    }

    #[test]
    fn overlong_label_is_clamped() {
        let gap = gap_fraction(500.0, 10.0, 7.0, 200.0);
        assert_eq!(gap.end, 1.0);
        assert!(!gap.is_empty());
        assert_eq!(gap.len(), 1.0);
    }

    #[test]
    fn embedded_offset_adds_twice_root_radius() {
        assert_eq!(embedded_label_offset(8.0, 9.0), 14.0);
        assert_eq!(embedded_label_offset(8.0, -4.0), 8.0);
    }
}
