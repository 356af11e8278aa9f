//! Polyprobe demo: replays a scripted pointer sweep against stored polygons.
//!
//! Usage:
//! ```text
//! cargo run --example probe                      # point mode
//! cargo run --example probe -- polygon           # polygon mode
//! RUST_LOG=polyprobe=debug cargo run --example probe -- polygon
//! ```

use polyprobe::math::{Point2, Vector2};
use polyprobe::operations::creation::{MakePolygon, MakeRegularPolygon, ParseVertices};
use polyprobe::session::{ProbeConfig, Session, Surface};
use polyprobe::PolyprobeError;
use tracing::info;

const CUSTOM_VERTICES: &str = "120,-60 260,-40 220,90 150,40";

fn main() -> Result<(), PolyprobeError> {
    // Default: WARN for everything, INFO for polyprobe and this demo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=polyprobe=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("probe=info".parse().unwrap_or_default())
        .add_directive("polyprobe=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let surface = Surface::new(800.0, 600.0);
    let mut session = Session::new(surface, ProbeConfig::default());
    if let Some(mode) = std::env::args().nth(1) {
        session.set_mode_by_name(&mode)?;
    }

    let pentagon = MakeRegularPolygon::new(Point2::origin(), 5, 80.0).execute()?;
    let pentagon_id = session.reset_with_polygon(pentagon);
    let custom = MakePolygon::new(ParseVertices::new(CUSTOM_VERTICES).execute()?).execute()?;
    let custom_id = session.add_polygon(custom);

    // Sweep from the left border to the right border through the middle row,
    // with the surface sitting at (16, 16) in client space.
    let offset = Vector2::new(16.0, 16.0);
    for step in 0..=16 {
        let client = Point2::new(offset.x + f64::from(step) * 50.0, offset.y + 300.0);
        let pointer = surface.to_plane(client, offset);
        for hit in session.pointer_moved(pointer)? {
            let name = if hit.id == pentagon_id {
                "pentagon"
            } else if hit.id == custom_id {
                "custom"
            } else {
                "other"
            };
            info!(
                x = pointer.x,
                y = pointer.y,
                polygon = name,
                hit = hit.highlight.is_hit(),
                "probe"
            );
        }
    }
    Ok(())
}
