use tracing::warn;

use crate::error::{OperationError, Result};
use crate::math::Point2;

/// Parses a custom vertex list written as whitespace-separated `x,y` pairs,
/// e.g. `"0,0 100,0 50,80"`.
pub struct ParseVertices<'a> {
    text: &'a str,
}

impl<'a> ParseVertices<'a> {
    /// Creates a new `ParseVertices` operation.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// Executes the operation, returning the points in textual order.
    ///
    /// An empty or blank text yields no points; turning them into a polygon
    /// is left to [`super::MakePolygon`].
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` for a token that is not a pair
    /// of numbers separated by a single comma.
    pub fn execute(&self) -> Result<Vec<Point2>> {
        self.text.split_whitespace().map(parse_pair).collect()
    }
}

fn parse_pair(token: &str) -> Result<Point2> {
    let parsed = token.split_once(',').and_then(|(x, y)| {
        let x = x.trim().parse::<f64>().ok()?;
        let y = y.trim().parse::<f64>().ok()?;
        Some(Point2::new(x, y))
    });
    parsed.ok_or_else(|| {
        warn!(token, "malformed vertex");
        OperationError::InvalidInput(format!("malformed vertex {token:?}, expected x,y")).into()
    })
}
