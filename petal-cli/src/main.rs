//! CLI for lobed flower shapes.
//!
//! Provides:
//! - SVG rendering of the filled shape, with an optional construction overlay
//! - JSON export of the derived geometry bundle
//! - Star-convexity checks for proposed vertex moves

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use petal_core::{check_move, Flower, VertexRing, R2};

mod render;
mod scene;

use render::{render_svg, RenderConfig};

#[derive(Parser)]
#[command(name = "petal")]
#[command(about = "Lobed flower shape renderer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the filled shape to an SVG file
    Render {
        /// Number of control vertices (odd, between 3 and 13)
        #[arg(short, long, default_value = "5")]
        points: usize,

        /// Canvas size in pixels
        #[arg(short, long, default_value = "800")]
        size: u32,

        /// Vertex jitter; defaults to 5·scale/points²
        #[arg(short, long)]
        jitter: Option<f64>,

        /// RNG seed for vertex placement
        #[arg(long)]
        seed: Option<u64>,

        /// Overlay construction circles and guide lines
        #[arg(short, long)]
        lines: bool,

        /// Output file
        #[arg(short, long, default_value = "flower.svg")]
        output: String,
    },

    /// Print the derived geometry bundle as JSON
    Geometry {
        /// Number of control vertices (odd, between 3 and 13)
        #[arg(short, long, default_value = "5")]
        points: usize,

        /// Canvas size in pixels
        #[arg(short, long, default_value = "800")]
        size: u32,

        /// Vertex jitter; defaults to 5·scale/points²
        #[arg(short, long)]
        jitter: Option<f64>,

        /// RNG seed for vertex placement
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Check whether moving one vertex keeps the ring star-shaped
    Check {
        /// Current vertices as JSON, e.g. '[[0,0],[4,0],[2,3]]'
        #[arg(short, long)]
        vertices: String,

        /// Index of the vertex being moved
        #[arg(short, long)]
        index: usize,

        /// Proposed x coordinate
        #[arg(short, long, allow_hyphen_values = true)]
        x: f64,

        /// Proposed y coordinate
        #[arg(short, long, allow_hyphen_values = true)]
        y: f64,

        /// Accept moves that break the star shape (still warns)
        #[arg(long)]
        allow_non_convex: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Render { points, size, jitter, seed, lines, output } => {
            let ring = build_ring(points, size, jitter, seed)?;
            let flower = Flower::compute(&ring)?;
            let config = RenderConfig {
                width: size as f64,
                height: size as f64,
                show_lines: lines,
                ..RenderConfig::default()
            };
            std::fs::write(&output, render_svg(&flower, &config))
                .with_context(|| format!("writing {output}"))?;
            info!("wrote {output}");
        }
        Commands::Geometry { points, size, jitter, seed } => {
            let ring = build_ring(points, size, jitter, seed)?;
            let flower = Flower::compute(&ring)?;
            println!("{}", serde_json::to_string_pretty(&flower)?);
        }
        Commands::Check { vertices, index, x, y, allow_non_convex } => {
            let coords: Vec<(f64, f64)> =
                serde_json::from_str(&vertices).context("parsing --vertices")?;
            let ring = VertexRing::new(coords.into_iter().map(|(vx, vy)| R2 { x: vx, y: vy }).collect())?;
            let candidate = ring.with_vertex(index, R2 { x, y });
            let verdict = check_move(&candidate, index, allow_non_convex);
            println!("{}", serde_json::to_string(&verdict)?);
        }
    }
    Ok(())
}

fn build_ring(points: usize, size: u32, jitter: Option<f64>, seed: Option<u64>) -> Result<VertexRing> {
    if !(3..=13).contains(&points) {
        bail!("--points must be between 3 and 13, got {points}");
    }
    let seed = seed.unwrap_or_else(rand::random);
    info!("seed: {seed}");
    Ok(scene::jittered_ring(points, size as f64, jitter, seed)?)
}
