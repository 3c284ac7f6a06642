use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use roadnet::api::{Graph, Marking, MarkingKind, MergePolicy, Point, RoadParams, World, WorldCfg};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

mod input;
mod output;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Road border generation from segment graphs")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Policy {
    MultiBreak,
    Union,
}

impl From<Policy> for MergePolicy {
    fn from(p: Policy) -> Self {
        match p {
            Policy::MultiBreak => MergePolicy::MultiBreak,
            Policy::Union => MergePolicy::Union,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Build envelopes and merged borders for a graph (.json or .csv)
    Generate {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 100.0)]
        width: f64,
        #[arg(long, default_value_t = 10)]
        roundness: u32,
        #[arg(long, value_enum, default_value_t = Policy::MultiBreak)]
        policy: Policy,
    },
    /// Print the polygon of one marking as JSON
    Marking {
        #[arg(long)]
        kind: MarkingKind,
        #[arg(long, allow_negative_numbers = true)]
        cx: f64,
        #[arg(long, allow_negative_numbers = true)]
        cy: f64,
        #[arg(long, allow_negative_numbers = true)]
        dx: f64,
        #[arg(long, allow_negative_numbers = true)]
        dy: f64,
        /// Road width the marking is sized for
        #[arg(long, default_value_t = 100.0)]
        width: f64,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Generate {
            input,
            out,
            width,
            roundness,
            policy,
        } => generate(&input, &out, RoadParams { width, roundness }, policy.into()),
        Action::Marking {
            kind,
            cx,
            cy,
            dx,
            dy,
            width,
        } => marking(kind, Point::new(cx, cy), Point::new(dx, dy), width),
        Action::Report => report(),
    }
}

fn generate(input: &Path, out: &Path, road: RoadParams, merge: MergePolicy) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), ?road, ?merge, "generate");
    let graph = Graph::from_segments(input::read_segments(input)?);
    let cfg = WorldCfg {
        road,
        merge,
        ..WorldCfg::default()
    };
    let world = World::build(&graph, cfg)
        .with_context(|| format!("generating borders for {}", input.display()))?;
    tracing::info!(
        envelopes = world.envelopes().len(),
        borders = world.borders().len(),
        intersections = world.intersections().len(),
        "generated"
    );

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&output::world(&world))?)
        .with_context(|| format!("writing {}", out.display()))?;

    let params = provenance::Params::new(road, merge, graph.segments.len());
    let sidecar = provenance::record(out, input, &params)?;
    tracing::info!(sidecar = %sidecar.display(), "provenance");
    Ok(())
}

fn marking(kind: MarkingKind, center: Point, direction: Point, road_width: f64) -> Result<()> {
    let road = RoadParams {
        width: road_width,
        ..RoadParams::default()
    };
    let m = Marking::for_road(kind, center, direction, &road)
        .with_context(|| format!("building {kind} marking"))?;
    tracing::info!(%kind, width = m.width, height = m.height, "marking");
    println!("{}", serde_json::to_string_pretty(&output::marking(&m))?);
    Ok(())
}

fn report() -> Result<()> {
    let defaults = WorldCfg::default();
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "roadnet": roadnet::VERSION,
        "defaults": {
            "width": defaults.road.width,
            "roundness": defaults.road.roundness,
            "policy": provenance::policy_name(defaults.merge),
        },
        "markings": MarkingKind::all().map(|k| k.name()).collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
