mod bounding_box;
mod polygon;
mod segment;

pub use bounding_box::Aabb;
pub use polygon::{Polygon, MIN_VERTICES};
pub use segment::Segment;
