//! Strokes a polyline and prints the resulting triangle strip.
//!
//! ```text
//! cargo run --example stroke                   # built-in U shape
//! cargo run --example stroke -- path/poly.xml  # polyline document
//! RUST_LOG=polystroke=debug cargo run --example stroke
//! ```

use polystroke::debug::DrawNormals;
use polystroke::{io, Grow, Polyline, TessellateStroke};

fn main() {
    // Default: WARN for everything, INFO for polystroke.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("stroke=info".parse().unwrap_or_default())
        .add_directive("polystroke=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut source = Polyline::from_xy(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)], false);
    if let Some(path) = std::env::args().nth(1) {
        io::load(&mut source, &path);
    }
    tracing::info!(points = source.len(), closed = source.closed, "source polyline");

    for (from, to) in DrawNormals::new(&source, 1.0).normal_segments() {
        println!("normal  ({:.3}, {:.3}) -> ({:.3}, {:.3})", from.x, from.y, to.x, to.y);
    }

    let grown = Grow::new(&source, 2.0).execute();
    for p in &grown.points {
        println!("grown   ({:.3}, {:.3})", p.x, p.y);
    }

    let mesh = TessellateStroke::new(&source, 1.0).execute();
    tracing::info!(
        vertices = mesh.vertices.len(),
        triangles = mesh.triangle_count(),
        "stroke mesh"
    );
    for v in &mesh.vertices {
        println!("strip   ({:.3}, {:.3}, {:.3})", v.x, v.y, v.z);
    }
    for [a, b, c] in mesh.triangles() {
        println!(
            "tri     ({:.3}, {:.3}) ({:.3}, {:.3}) ({:.3}, {:.3})",
            a.x, a.y, b.x, b.y, c.x, c.y
        );
    }
}
