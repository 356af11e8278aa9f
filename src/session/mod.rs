//! Interactive probing session.
//!
//! Owns everything that lives for one drawing session: the surface size, the
//! stored polygons and the probe configuration. The geometry layers stay
//! stateless; pointer movement is fed in through [`Session::pointer_moved`].

mod config;
mod surface;

pub use config::{CollisionMode, ProbeConfig};
pub use surface::Surface;

use slotmap::SlotMap;
use tracing::{debug, warn};

use crate::error::{Result, SessionError};
use crate::geometry::Polygon;
use crate::math::Point2;

slotmap::new_key_type! {
    /// Unique identifier for a polygon stored in a session.
    pub struct PolygonId;
}

/// Visual feedback for one stored polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    /// The polygon is not touched by the pointer or probe.
    Normal,
    /// The polygon contains the pointer, or collides with or encloses the probe.
    Hit,
}

impl Highlight {
    fn from_hit(hit: bool) -> Self {
        if hit {
            Self::Hit
        } else {
            Self::Normal
        }
    }

    /// Returns `true` for [`Highlight::Hit`].
    #[must_use]
    pub fn is_hit(self) -> bool {
        self == Self::Hit
    }
}

/// Result of testing one stored polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    /// The stored polygon tested.
    pub id: PolygonId,
    /// Feedback to render it with.
    pub highlight: Highlight,
}

/// Session context: surface, stored polygons and probe configuration.
#[derive(Debug)]
pub struct Session {
    surface: Surface,
    config: ProbeConfig,
    polygons: SlotMap<PolygonId, Polygon>,
    probe: Option<Polygon>,
}

impl Session {
    /// Creates an empty session.
    #[must_use]
    pub fn new(surface: Surface, config: ProbeConfig) -> Self {
        Self {
            surface,
            config,
            polygons: SlotMap::with_key(),
            probe: None,
        }
    }

    /// Returns the current drawing surface.
    #[must_use]
    pub fn surface(&self) -> Surface {
        self.surface
    }

    /// Returns the probe configuration.
    #[must_use]
    pub fn config(&self) -> ProbeConfig {
        self.config
    }

    /// Replaces the probe configuration; stored polygons are kept.
    pub fn set_config(&mut self, config: ProbeConfig) {
        self.config = config;
    }

    /// Switches the collision mode by name (`"point"` or `"polygon"`).
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownMode` and leaves the session untouched if
    /// the name is not recognised.
    pub fn set_mode_by_name(&mut self, name: &str) -> Result<()> {
        match name.parse::<CollisionMode>() {
            Ok(mode) => {
                self.config.mode = mode;
                Ok(())
            }
            Err(err) => {
                warn!(mode = name, "could not resolve collision mode");
                Err(err.into())
            }
        }
    }

    /// Stores a polygon and returns its ID.
    pub fn add_polygon(&mut self, polygon: Polygon) -> PolygonId {
        self.polygons.insert(polygon)
    }

    /// Returns a stored polygon.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::PolygonNotFound` if the ID is not in the session.
    pub fn polygon(&self, id: PolygonId) -> Result<&Polygon> {
        self.polygons
            .get(id)
            .ok_or_else(|| SessionError::PolygonNotFound.into())
    }

    /// Removes a stored polygon and returns it.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::PolygonNotFound` if the ID is not in the session.
    pub fn remove_polygon(&mut self, id: PolygonId) -> Result<Polygon> {
        self.polygons
            .remove(id)
            .ok_or_else(|| SessionError::PolygonNotFound.into())
    }

    /// Iterates the stored polygons in store order.
    pub fn polygons(&self) -> impl Iterator<Item = (PolygonId, &Polygon)> {
        self.polygons.iter()
    }

    /// Number of stored polygons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    /// Returns `true` if no polygon is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// The probe polygon generated by the last polygon-mode pointer move.
    #[must_use]
    pub fn probe(&self) -> Option<&Polygon> {
        self.probe.as_ref()
    }

    /// Drops every stored polygon and the probe.
    pub fn clear(&mut self) {
        self.polygons.clear();
        self.probe = None;
    }

    /// Clears the session and stores `polygon` as its only polygon.
    pub fn reset_with_polygon(&mut self, polygon: Polygon) -> PolygonId {
        self.clear();
        self.add_polygon(polygon)
    }

    /// Replaces the surface. Stored polygons are discarded.
    pub fn resize(&mut self, surface: Surface) {
        debug!(width = surface.width, height = surface.height, "surface resized");
        self.surface = surface;
        self.clear();
    }

    /// Tests every stored polygon against the pointer, according to the
    /// configured [`CollisionMode`].
    ///
    /// `pointer` is in origin-centred plane coordinates, see [`Surface::to_plane`].
    ///
    /// # Errors
    ///
    /// In polygon mode, returns `OperationError::InvalidInput` if the probe
    /// configuration cannot produce a polygon.
    pub fn pointer_moved(&mut self, pointer: Point2) -> Result<Vec<Hit>> {
        let hits = match self.config.mode {
            CollisionMode::Point => self.point_mode(&pointer),
            CollisionMode::Polygon => self.polygon_mode(&pointer)?,
        };
        debug!(
            mode = %self.config.mode,
            x = pointer.x,
            y = pointer.y,
            hits = hits.iter().filter(|h| h.highlight.is_hit()).count(),
            "pointer moved"
        );
        Ok(hits)
    }

    fn point_mode(&self, pointer: &Point2) -> Vec<Hit> {
        let ray_end_x = self.surface.ray_end_x();
        self.polygons
            .iter()
            .map(|(id, polygon)| Hit {
                id,
                highlight: Highlight::from_hit(polygon.contains_with_ray_end(pointer, ray_end_x)),
            })
            .collect()
    }

    fn polygon_mode(&mut self, pointer: &Point2) -> Result<Vec<Hit>> {
        let probe = match self.config.probe_at(*pointer).execute() {
            Ok(probe) => probe,
            Err(err) => {
                self.probe = None;
                return Err(err);
            }
        };
        let ray_end_x = self.surface.ray_end_x();

        let hits = self
            .polygons
            .iter()
            .map(|(id, polygon)| {
                debug!(stored = ?polygon.bounds(), probe = ?probe.bounds(), "bounds");
                // Enclosure in either direction counts as a hit even without
                // boundary contact.
                let within = polygon.encloses_with_ray_end(&probe, pointer, ray_end_x)
                    || probe.encloses_with_ray_end(polygon, &polygon.first_vertex(), ray_end_x);
                debug!(within, "enclosure");
                Hit {
                    id,
                    highlight: Highlight::from_hit(probe.collides(polygon) || within),
                }
            })
            .collect();

        self.probe = Some(probe);
        Ok(hits)
    }
}
