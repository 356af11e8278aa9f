use crate::math::polygon_2d::bounds_2d;
use crate::math::Point2;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl Aabb {
    /// Computes the smallest box holding all `points` in a single pass.
    ///
    /// An empty slice yields an inverted box that contains nothing.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Self {
        let (min, max) = bounds_2d(points);
        Self { min, max }
    }

    /// Returns `true` if `other` lies strictly inside this box on both axes.
    ///
    /// Touching sides do not count.
    #[must_use]
    pub fn strictly_contains(&self, other: &Aabb) -> bool {
        other.min.x > self.min.x
            && other.max.x < self.max.x
            && other.min.y > self.min.y
            && other.max.y < self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aabb(x0: f64, y0: f64, x1: f64, y1: f64) -> Aabb {
        Aabb {
            min: Point2::new(x0, y0),
            max: Point2::new(x1, y1),
        }
    }

    #[test]
    fn from_points_takes_componentwise_extremes() {
        let bb = Aabb::from_points(&[
            Point2::new(3.0, -1.0),
            Point2::new(-2.0, 4.0),
            Point2::new(1.0, 1.0),
        ]);
        assert_eq!(bb, aabb(-2.0, -1.0, 3.0, 4.0));
    }

    #[test]
    fn strict_containment() {
        let outer = aabb(0.0, 0.0, 10.0, 10.0);
        assert!(outer.strictly_contains(&aabb(1.0, 1.0, 9.0, 9.0)));
        assert!(!outer.strictly_contains(&aabb(0.0, 1.0, 9.0, 9.0)));
        assert!(!outer.strictly_contains(&aabb(5.0, 5.0, 12.0, 9.0)));
        assert!(!outer.strictly_contains(&outer));
    }
}
