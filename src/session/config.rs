use std::fmt;
use std::str::FromStr;

use crate::error::SessionError;
use crate::math::Point2;
use crate::operations::creation::MakeRegularPolygon;

/// How pointer movement is tested against the stored polygons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionMode {
    /// The pointer itself is tested for containment.
    #[default]
    Point,
    /// A regular probe polygon centred on the pointer is tested for collision.
    Polygon,
}

impl FromStr for CollisionMode {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "point" => Ok(Self::Point),
            "polygon" => Ok(Self::Polygon),
            other => Err(SessionError::UnknownMode(other.to_owned())),
        }
    }
}

impl fmt::Display for CollisionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Point => f.write_str("point"),
            Self::Polygon => f.write_str("polygon"),
        }
    }
}

/// Parameters controlling the probe polygon and the collision mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeConfig {
    /// Number of vertices of the probe polygon.
    pub vertex_count: u32,
    /// Center-to-edge-midpoint distance of the probe polygon.
    pub apothem: f64,
    /// Collision mode applied on pointer movement.
    pub mode: CollisionMode,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            vertex_count: 6,
            apothem: 50.0,
            mode: CollisionMode::Point,
        }
    }
}

impl ProbeConfig {
    /// Returns the operation building the probe polygon centred at `center`.
    #[must_use]
    pub fn probe_at(&self, center: Point2) -> MakeRegularPolygon {
        MakeRegularPolygon::new(center, self.vertex_count, self.apothem)
    }
}
