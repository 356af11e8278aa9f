use crate::math::{Point2, Vector2};

/// Size of the drawing surface in surface units.
///
/// Plane coordinates are origin-centred: `(0, 0)` is the middle of the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
}

impl Surface {
    /// Creates a new surface description.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// X coordinate where containment rays end: the right border.
    #[must_use]
    pub fn ray_end_x(&self) -> f64 {
        self.width / 2.0
    }

    /// Converts client coordinates into origin-centred plane coordinates.
    ///
    /// `offset` is the position of the surface's top-left corner in client space.
    #[must_use]
    pub fn to_plane(&self, client: Point2, offset: Vector2) -> Point2 {
        Point2::new(
            client.x - offset.x - self.width / 2.0,
            client.y - offset.y - self.height / 2.0,
        )
    }
}
