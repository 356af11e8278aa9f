use tracing::warn;

use crate::error::{OperationError, Result};
use crate::geometry::{Polygon, MIN_VERTICES};
use crate::math::polygon_2d::regular_polygon_2d;
use crate::math::Point2;

/// Creates a regular n-gon from its center, vertex count and apothem.
#[derive(Debug, Clone, Copy)]
pub struct MakeRegularPolygon {
    center: Point2,
    vertex_count: u32,
    apothem: f64,
}

impl MakeRegularPolygon {
    /// Creates a new `MakeRegularPolygon` operation.
    #[must_use]
    pub fn new(center: Point2, vertex_count: u32, apothem: f64) -> Self {
        Self {
            center,
            vertex_count,
            apothem,
        }
    }

    /// Executes the operation.
    ///
    /// Vertex 0 points towards `-y`; the rest follow at equal angular steps.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the vertex count is below
    /// three, the apothem is not a positive finite number, or the vertices
    /// overflow to non-finite coordinates.
    pub fn execute(&self) -> Result<Polygon> {
        if self.vertex_count == 0 {
            warn!("vertex count must be positive");
            return Err(OperationError::InvalidInput("vertex count must be positive".into()).into());
        }
        if usize::try_from(self.vertex_count).is_ok_and(|n| n < MIN_VERTICES) {
            warn!(vertex_count = self.vertex_count, "too few vertices for a polygon");
            return Err(OperationError::InvalidInput(format!(
                "regular polygon needs at least {MIN_VERTICES} vertices, got {}",
                self.vertex_count
            ))
            .into());
        }
        if !(self.apothem.is_finite() && self.apothem > 0.0) {
            warn!(apothem = self.apothem, "apothem must be positive and finite");
            return Err(OperationError::InvalidInput(format!(
                "apothem must be positive and finite, got {}",
                self.apothem
            ))
            .into());
        }
        if !(self.center.x.is_finite() && self.center.y.is_finite()) {
            warn!(x = self.center.x, y = self.center.y, "non-finite polygon center");
            return Err(OperationError::InvalidInput(format!(
                "non-finite center ({}, {})",
                self.center.x, self.center.y
            ))
            .into());
        }
        Polygon::new(regular_polygon_2d(&self.center, self.vertex_count, self.apothem)).map_err(
            |err| {
                warn!(%err, "rejected regular polygon");
                OperationError::InvalidInput(err.to_string()).into()
            },
        )
    }
}
