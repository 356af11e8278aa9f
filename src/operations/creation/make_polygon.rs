use tracing::warn;

use crate::error::{OperationError, Result};
use crate::geometry::Polygon;
use crate::math::Point2;

/// Creates a polygon from an explicit, ordered vertex list.
pub struct MakePolygon {
    points: Vec<Point2>,
}

impl MakePolygon {
    /// Creates a new `MakePolygon` operation.
    #[must_use]
    pub fn new(points: impl IntoIterator<Item = Point2>) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    /// Executes the operation, returning the vertices verbatim as a polygon.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if no vertices were given, if
    /// there are fewer than three, or if a coordinate is not finite.
    pub fn execute(&self) -> Result<Polygon> {
        if self.points.is_empty() {
            warn!("no vertices provided");
            return Err(OperationError::InvalidInput("no vertices provided".into()).into());
        }
        Polygon::new(self.points.clone()).map_err(|err| {
            warn!(%err, "rejected polygon vertices");
            OperationError::InvalidInput(err.to_string()).into()
        })
    }
}
