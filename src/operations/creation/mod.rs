mod make_polygon;
mod make_regular_polygon;
mod parse_vertices;

pub use make_polygon::MakePolygon;
pub use make_regular_polygon::MakeRegularPolygon;
pub use parse_vertices::ParseVertices;
