//! raster-lab: run one rasterization algorithm and show how it got there.
//!
//! Prints the diagnostic report (header plus step-by-step trace) and can
//! additionally draw the result as ASCII, write a PNG of the grid canvas, or
//! write a labelled SVG of the same scene.
//!
//! Run: `raster-lab bres_line 2 3 8 6 --ascii`

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use trueno_raster::output::{AsciiGrid, PngEncoder};
use trueno_raster::prelude::*;
use trueno_raster::render::{render_scene, svg_scene};

/// raster-lab: classic scan-conversion algorithms, step by step
#[derive(Parser, Debug)]
#[command(name = "raster-lab")]
#[command(author = "PAIML Team")]
#[command(version)]
#[command(about = "Rasterize a line or circle and print every step", long_about = None)]
struct Cli {
    /// Algorithm: naive, dda, bres_line, bres_circle, wu
    algorithm: String,

    /// Start x, or circle center x
    #[arg(allow_hyphen_values = true)]
    x0: String,

    /// Start y, or circle center y
    #[arg(allow_hyphen_values = true)]
    y0: String,

    /// End x, or circle radius
    #[arg(allow_hyphen_values = true)]
    x1: String,

    /// End y (ignored for circles)
    #[arg(allow_hyphen_values = true, default_value = "0")]
    y1: String,

    /// Config file path (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pixels per grid unit for the PNG canvas
    #[arg(short, long)]
    scale: Option<u32>,

    /// Write the rendered grid canvas to this PNG file
    #[arg(long)]
    png: Option<PathBuf>,

    /// Write the labelled scene to this SVG file
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Print the raster as ASCII art after the report
    #[arg(long)]
    ascii: bool,

    /// Reject out-of-range coordinates instead of clamping them
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => RasterConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => RasterConfig::default(),
    };
    if let Some(scale) = cli.scale {
        config.set_scale(scale);
    }
    if cli.strict {
        config.input.clamp = false;
    }

    let algorithm: Algorithm = cli.algorithm.parse()?;
    let second = if algorithm.is_circle() { "r" } else { "x1" };
    let bounds = GridBounds::from_config(&config);
    let [x0, y0, x1, y1] = bounds.parse_all([
        ("x0", cli.x0.as_str()),
        ("y0", cli.y0.as_str()),
        (second, cli.x1.as_str()),
        ("y1", cli.y1.as_str()),
    ])?;

    let shape = algorithm.shape_from_coords(x0, y0, x1, y1);
    log::debug!("running {algorithm} on {shape:?}");

    let start = Instant::now();
    let raster = algorithm.rasterize(&shape)?;
    let elapsed = start.elapsed();

    print!("{}", Report::new(algorithm, shape, &raster, elapsed));

    if cli.ascii {
        println!();
        print!("{}", AsciiGrid::new().axes(true).render(&raster));
    }

    if let Some(path) = &cli.png {
        let fb = render_scene(&config, &shape, &raster)?;
        PngEncoder::write_to_file(&fb, path)
            .with_context(|| format!("writing {}", path.display()))?;
    }

    if let Some(path) = &cli.svg {
        svg_scene(&config, &shape, &raster)?
            .write_to_file(path)
            .with_context(|| format!("writing {}", path.display()))?;
    }

    Ok(())
}
