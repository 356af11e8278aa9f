use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::{closed_edges_2d, point_in_polygon_2d, polygons_cross_2d};
use crate::math::Point2;

use super::{Aabb, Segment};

/// Minimum number of vertices of a [`Polygon`].
pub const MIN_VERTICES: usize = 3;

/// Distance past the right side of the bounding box used as the default ray end.
const RAY_MARGIN: f64 = 1.0;

/// A closed polygon given by its ordered vertices.
///
/// The last vertex connects back to the first; the closing vertex is not
/// stored twice. Vertex order defines the edge sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2>,
}

impl Polygon {
    /// Creates a polygon from its vertices.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewVertices` for fewer than three vertices
    /// and `GeometryError::NonFinite` if a coordinate is NaN or infinite.
    pub fn new(vertices: Vec<Point2>) -> Result<Self> {
        if vertices.len() < MIN_VERTICES {
            return Err(GeometryError::TooFewVertices {
                min: MIN_VERTICES,
                got: vertices.len(),
            }
            .into());
        }
        if let Some(bad) = vertices.iter().find(|v| !(v.x.is_finite() && v.y.is_finite())) {
            return Err(GeometryError::NonFinite { x: bad.x, y: bad.y }.into());
        }
        Ok(Self { vertices })
    }

    /// Returns the ordered vertices.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Returns the number of vertices, which equals the number of edges.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the first vertex.
    #[must_use]
    pub fn first_vertex(&self) -> Point2 {
        // Non-empty by construction.
        self.vertices[0]
    }

    /// Iterates the boundary edges, ending with the closing edge back to vertex 0.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        closed_edges_2d(&self.vertices).map(|(a, b)| Segment::new(*a, *b))
    }

    /// Axis-aligned bounds of all vertices.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(&self.vertices)
    }

    /// Even-odd containment test with a ray end chosen right of the polygon.
    ///
    /// Points exactly on the boundary, or whose ray passes through a vertex,
    /// follow the raw crossing count and may go either way.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        let ray_end_x = self.bounds().max.x.max(point.x) + RAY_MARGIN;
        self.contains_with_ray_end(point, ray_end_x)
    }

    /// Even-odd containment test casting the ray to `(ray_end_x, point.y)`.
    ///
    /// The caller must pick `ray_end_x` outside the polygon's horizontal extent.
    #[must_use]
    pub fn contains_with_ray_end(&self, point: &Point2, ray_end_x: f64) -> bool {
        point_in_polygon_2d(point, &self.vertices, ray_end_x)
    }

    /// Returns `true` if the boundaries of the two polygons meet.
    ///
    /// Full enclosure without boundary contact is not detected, see
    /// [`Polygon::encloses`].
    #[must_use]
    pub fn collides(&self, other: &Polygon) -> bool {
        polygons_cross_2d(&self.vertices, &other.vertices)
    }

    /// Heuristic enclosure test: `inner`'s bounds lie strictly inside this
    /// polygon's bounds and `representative` (a point of `inner`) is contained.
    ///
    /// A single representative point is not enough for concave or rotated
    /// shapes, where this may report enclosure for a polygon that pokes out.
    #[must_use]
    pub fn encloses(&self, inner: &Polygon, representative: &Point2) -> bool {
        self.bounds().strictly_contains(&inner.bounds()) && self.contains(representative)
    }

    /// [`Polygon::encloses`] with an explicit containment ray end.
    #[must_use]
    pub fn encloses_with_ray_end(
        &self,
        inner: &Polygon,
        representative: &Point2,
        ray_end_x: f64,
    ) -> bool {
        self.bounds().strictly_contains(&inner.bounds())
            && self.contains_with_ray_end(representative, ray_end_x)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PolyprobeError;

    fn square(x: f64, y: f64, size: f64) -> Polygon {
        Polygon::new(vec![
            Point2::new(x, y),
            Point2::new(x + size, y),
            Point2::new(x + size, y + size),
            Point2::new(x, y + size),
        ])
        .unwrap()
    }

    fn rotated(poly: &Polygon, by: usize) -> Polygon {
        let mut v = poly.vertices().to_vec();
        v.rotate_left(by);
        Polygon::new(v).unwrap()
    }

    #[test]
    fn rejects_too_few_vertices() {
        let err = Polygon::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]).unwrap_err();
        assert!(matches!(
            err,
            PolyprobeError::Geometry(GeometryError::TooFewVertices { min: 3, got: 2 })
        ));
    }

    #[test]
    fn rejects_non_finite_vertex() {
        let err = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(f64::NAN, 0.0),
            Point2::new(1.0, 1.0),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            PolyprobeError::Geometry(GeometryError::NonFinite { .. })
        ));
    }

    #[test]
    fn edges_close_the_loop() {
        let sq = square(0.0, 0.0, 10.0);
        let edges: Vec<Segment> = sq.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3], Segment::new(Point2::new(0.0, 10.0), Point2::new(0.0, 0.0)));
    }

    #[test]
    fn square_contains_center_not_far_point() {
        let sq = square(0.0, 0.0, 10.0);
        assert!(sq.contains(&Point2::new(5.0, 5.0)));
        assert!(!sq.contains(&Point2::new(20.0, 20.0)));
        assert!(!sq.contains(&Point2::new(10.5, 5.0)));
    }

    #[test]
    fn containment_is_invariant_under_vertex_rotation() {
        let pentagon = Polygon::new(vec![
            Point2::new(0.0, -10.0),
            Point2::new(9.5, -3.1),
            Point2::new(5.9, 8.1),
            Point2::new(-5.9, 8.1),
            Point2::new(-9.5, -3.1),
        ])
        .unwrap();
        let probes = [
            (Point2::new(0.3, 0.2), true),
            (Point2::new(-4.0, 5.5), true),
            (Point2::new(12.0, 0.7), false),
            (Point2::new(-8.0, 7.0), false),
        ];
        for by in 0..pentagon.vertex_count() {
            let poly = rotated(&pentagon, by);
            for (pt, inside) in &probes {
                assert_eq!(poly.contains(pt), *inside, "rotation {by}, point {pt}");
            }
        }
    }

    #[test]
    fn overlapping_squares_collide_symmetrically() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(5.0, 5.0, 10.0);
        assert!(a.collides(&b));
        assert!(b.collides(&a));
    }

    #[test]
    fn touching_corners_collide() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(10.0, 10.0, 5.0);
        assert!(a.collides(&b));
    }

    #[test]
    fn separate_squares_do_not_collide() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(11.0, 0.0, 10.0);
        assert!(!a.collides(&b));
        assert!(!b.collides(&a));
    }

    #[test]
    fn nested_square_does_not_collide_but_is_enclosed() {
        let outer = square(-50.0, -50.0, 100.0);
        let inner = square(5.0, 5.0, 10.0);
        assert!(!outer.collides(&inner));
        assert!(!inner.collides(&outer));
        assert!(outer.encloses(&inner, &inner.first_vertex()));
        assert!(!inner.encloses(&outer, &outer.first_vertex()));
    }

    #[test]
    fn square_in_concave_notch_is_not_enclosed() {
        // Bounds nest, but the square's centre lies in the notch, outside the U.
        let u = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(9.0, 0.0),
            Point2::new(9.0, 9.0),
            Point2::new(6.0, 9.0),
            Point2::new(6.0, 3.0),
            Point2::new(3.0, 3.0),
            Point2::new(3.0, 9.0),
            Point2::new(0.0, 9.0),
        ])
        .unwrap();
        let in_notch = square(3.5, 4.0, 2.0);
        assert!(u.bounds().strictly_contains(&in_notch.bounds()));
        assert!(!u.collides(&in_notch));
        assert!(!u.encloses(&in_notch, &Point2::new(4.5, 5.0)));
    }

    #[test]
    fn enclosure_depends_on_ray_end_beyond_extent() {
        let outer = square(-100.0, -100.0, 700.0);
        let inner = square(-5.0, -5.0, 10.0);
        let centre = Point2::new(0.0, 0.0);
        assert!(outer.encloses(&inner, &centre));
        // A ray stopping at x = 400 never reaches the right edge at x = 600.
        assert!(!outer.encloses_with_ray_end(&inner, &centre, 400.0));
    }

    #[test]
    fn explicit_ray_end_matches_default_when_outside_extent() {
        let sq = square(0.0, 0.0, 10.0);
        let pt = Point2::new(2.0, 7.0);
        assert_eq!(sq.contains(&pt), sq.contains_with_ray_end(&pt, 500.0));
    }
}
