//! Print envelope and border counts for a small crossroads.
//!
//! Usage:
//!   cargo run -p roadnet --example crossroads -- [roundness]

use roadnet::prelude::*;

fn main() {
    let roundness = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(10);
    let p = |x: f64, y: f64| Point::new(x, y);
    let graph = Graph::from_segments(vec![
        Segment::new(p(-200.0, 0.0), p(0.0, 0.0)),
        Segment::new(p(0.0, 0.0), p(200.0, 0.0)),
        Segment::new(p(0.0, -200.0), p(0.0, 0.0)),
        Segment::new(p(0.0, 0.0), p(150.0, 150.0)),
    ]);
    let cfg = WorldCfg {
        road: RoadParams {
            width: 60.0,
            roundness,
        },
        ..WorldCfg::default()
    };
    match World::build(&graph, cfg) {
        Ok(world) => {
            println!(
                "roundness {roundness}: envelopes={}, borders={}, intersections={}",
                world.envelopes().len(),
                world.borders().len(),
                world.intersections().len()
            );
            if let Borders::PerEnvelope(rows) = world.borders() {
                for (k, row) in rows.iter().enumerate() {
                    println!("  envelope {k}: {} kept edges", row.len());
                }
            }
        }
        Err(e) => eprintln!("generation failed: {e}"),
    }
}
