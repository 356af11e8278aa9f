use crate::math::intersect_2d::{point_at, segment_intersection_2d, SegmentIntersection};
use crate::math::Point2;

/// A finite straight line between two endpoints.
///
/// The parametric form is `P(t) = start + t * (end - start)`, so direction
/// matters for the proportions but not for whether two segments meet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// First endpoint, at proportion 0.
    pub start: Point2,
    /// Second endpoint, at proportion 1.
    pub end: Point2,
}

impl Segment {
    /// Creates a segment from its two endpoints.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Solves for the proportions where this segment's line meets `other`'s.
    #[must_use]
    pub fn intersect(&self, other: &Segment) -> SegmentIntersection {
        segment_intersection_2d(&self.start, &self.end, &other.start, &other.end)
    }

    /// Returns `true` if the two segments meet, endpoints included.
    #[must_use]
    pub fn crosses(&self, other: &Segment) -> bool {
        self.intersect(other).within_segments()
    }

    /// Evaluates the segment at proportion `t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        point_at(&self.start, &self.end, t)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment {
        Segment::new(Point2::new(x0, y0), Point2::new(x1, y1))
    }

    #[test]
    fn crossing_point_agrees_on_both_segments() {
        let a = seg(0.0, 0.0, 4.0, 0.0);
        let b = seg(1.0, -1.0, 1.0, 3.0);
        let (t_a, t_b) = a.intersect(&b).proportions().unwrap();
        let pa = a.point_at(t_a);
        let pb = b.point_at(t_b);
        assert_abs_diff_eq!(pa.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pa.y, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pa.x, pb.x, epsilon = 1e-12);
        assert_abs_diff_eq!(pa.y, pb.y, epsilon = 1e-12);
    }

    #[test]
    fn crossing_is_symmetric_and_direction_independent() {
        let a = seg(0.0, 0.0, 2.0, 2.0);
        let b = seg(0.0, 2.0, 2.0, 0.0);
        let b_rev = seg(2.0, 0.0, 0.0, 2.0);
        assert!(a.crosses(&b));
        assert!(b.crosses(&a));
        assert!(a.crosses(&b_rev));
    }

    #[test]
    fn parallel_segments_never_cross() {
        let a = seg(0.0, 0.0, 3.0, 1.0);
        let b = seg(1.0, 1.0, 7.0, 3.0);
        assert_eq!(a.intersect(&b), SegmentIntersection::Degenerate);
        assert!(!a.crosses(&b));
    }
}
