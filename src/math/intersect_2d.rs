use super::Point2;

/// Outcome of solving two segments as a 2x2 linear system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntersection {
    /// The system's determinant is exactly zero. The segments are parallel or
    /// collinear; zero and infinitely many meeting points are not told apart.
    Degenerate,
    /// Proportions along the first (`t_a`) and second (`t_b`) segment where
    /// the carrying lines meet. Not restricted to `[0, 1]`.
    Proportions { t_a: f64, t_b: f64 },
}

impl SegmentIntersection {
    /// Returns the proportions, or `None` for the degenerate case.
    #[must_use]
    pub fn proportions(&self) -> Option<(f64, f64)> {
        match *self {
            Self::Degenerate => None,
            Self::Proportions { t_a, t_b } => Some((t_a, t_b)),
        }
    }

    /// Returns `true` if both proportions lie in `[0, 1]` (endpoints included),
    /// i.e. the segments themselves meet rather than only their lines.
    #[must_use]
    pub fn within_segments(&self) -> bool {
        self.proportions()
            .is_some_and(|(t_a, t_b)| (0.0..=1.0).contains(&t_a) && (0.0..=1.0).contains(&t_b))
    }
}

/// Parametric segment-segment intersection in 2D.
///
/// Solves `ep1 + tA * (ep2 - ep1) = ep3 + tB * (ep4 - ep3)` for `(tA, tB)`:
///
/// ```text
/// D  = (ep4.x - ep3.x)(ep1.y - ep2.y) - (ep1.x - ep2.x)(ep4.y - ep3.y)
/// tA = ((ep3.y - ep4.y)(ep1.x - ep3.x) + (ep4.x - ep3.x)(ep1.y - ep3.y)) / D
/// tB = ((ep1.y - ep2.y)(ep1.x - ep3.x) + (ep2.x - ep1.x)(ep1.y - ep3.y)) / D
/// ```
///
/// `D` is compared against zero exactly. Nearly parallel segments therefore
/// yield very large and imprecise proportions instead of
/// [`SegmentIntersection::Degenerate`]; range checking is up to the caller.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn segment_intersection_2d(
    ep1: &Point2,
    ep2: &Point2,
    ep3: &Point2,
    ep4: &Point2,
) -> SegmentIntersection {
    let det = (ep4.x - ep3.x) * (ep1.y - ep2.y) - (ep1.x - ep2.x) * (ep4.y - ep3.y);
    if det == 0.0 {
        return SegmentIntersection::Degenerate;
    }
    let t_a = ((ep3.y - ep4.y) * (ep1.x - ep3.x) + (ep4.x - ep3.x) * (ep1.y - ep3.y)) / det;
    let t_b = ((ep1.y - ep2.y) * (ep1.x - ep3.x) + (ep2.x - ep1.x) * (ep1.y - ep3.y)) / det;
    SegmentIntersection::Proportions { t_a, t_b }
}

/// Linear interpolation: `from + t * (to - from)`.
#[must_use]
pub fn point_at(from: &Point2, to: &Point2, t: f64) -> Point2 {
    from + (to - from) * t
}
