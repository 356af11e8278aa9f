use std::f64::consts::{FRAC_PI_2, PI};

use super::intersect_2d::segment_intersection_2d;
use super::Point2;

/// Iterates the boundary edges of an implicitly closed polygon:
/// `v[0] -> v[1]`, ..., `v[n-2] -> v[n-1]`, then the closing edge `v[n-1] -> v[0]`.
pub fn closed_edges_2d(vertices: &[Point2]) -> impl Iterator<Item = (&Point2, &Point2)> {
    vertices.iter().zip(vertices.iter().cycle().skip(1))
}

/// Counts the polygon edges that the segment `from -> to` meets within both
/// segments' bounds. Degenerate (parallel or collinear) pairs are skipped.
#[must_use]
pub fn crossing_count_2d(from: &Point2, to: &Point2, vertices: &[Point2]) -> usize {
    closed_edges_2d(vertices)
        .filter(|(a, b)| segment_intersection_2d(from, to, a, b).within_segments())
        .count()
}

/// Even-odd point-in-polygon test.
///
/// Casts a horizontal ray from `point` to `(ray_end_x, point.y)` and counts
/// edge crossings; an odd count means inside. The ray is a finite segment, so
/// the result is only meaningful when `ray_end_x` lies outside the polygon's
/// horizontal extent.
#[must_use]
pub fn point_in_polygon_2d(point: &Point2, vertices: &[Point2], ray_end_x: f64) -> bool {
    let ray_end = Point2::new(ray_end_x, point.y);
    crossing_count_2d(point, &ray_end, vertices) % 2 == 1
}

/// Returns `true` if any edge of `a` meets any edge of `b`.
///
/// Only boundaries are compared: a polygon lying entirely inside the other
/// without touching its boundary is reported as not colliding.
#[must_use]
pub fn polygons_cross_2d(a: &[Point2], b: &[Point2]) -> bool {
    closed_edges_2d(a).any(|(a0, a1)| {
        closed_edges_2d(b).any(|(b0, b1)| segment_intersection_2d(a0, a1, b0, b1).within_segments())
    })
}

/// Componentwise `(min, max)` over all vertices.
///
/// An empty slice yields an inverted box (`min = +inf`, `max = -inf`).
#[must_use]
pub fn bounds_2d(vertices: &[Point2]) -> (Point2, Point2) {
    let init = (
        Point2::new(f64::INFINITY, f64::INFINITY),
        Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
    );
    vertices.iter().fold(init, |(min, max), v| {
        (
            Point2::new(min.x.min(v.x), min.y.min(v.y)),
            Point2::new(max.x.max(v.x), max.y.max(v.y)),
        )
    })
}

/// Vertices of a regular n-gon around `center` with the given apothem.
///
/// The circumradius is `apothem / cos(pi / n)`. Vertex `v` sits at angle
/// `v * 2pi/n - pi/2`, so with a y-down surface vertex 0 points up.
#[must_use]
pub fn regular_polygon_2d(center: &Point2, vertex_count: u32, apothem: f64) -> Vec<Point2> {
    if vertex_count == 0 {
        return Vec::new();
    }
    let central = 2.0 * PI / f64::from(vertex_count);
    let radius = apothem / (central / 2.0).cos();
    (0..vertex_count)
        .map(|v| {
            let angle = f64::from(v) * central - FRAC_PI_2;
            Point2::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}
