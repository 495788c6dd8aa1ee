#![forbid(unsafe_code)]
#![cfg_attr(not(debug_assertions), deny(warnings))] // Forbid warnings in release builds
#![warn(clippy::all, rust_2018_idioms)]

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use koch_fractal::{
    generate,
    render::{draw, SvgRenderer},
    ShapeKind,
};

/// Same bound the interactive depth selectors use; the library itself
/// accepts any non-negative depth.
const MAX_DEPTH: i64 = 10;

/// Render a Koch curve or snowflake as SVG.
#[derive(Debug, Parser)]
#[command(name = "koch_render", version, about)]
struct Args {
    /// Figure to render.
    #[arg(long, value_enum, default_value = "curve")]
    shape: Shape,

    /// Recursion depth (0 draws the undivided root segments).
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(i32).range(0..=MAX_DEPTH))]
    depth: i32,

    /// Canvas width.
    #[arg(long, default_value_t = 600.0)]
    width: f64,

    /// Canvas height.
    #[arg(long, default_value_t = 600.0)]
    height: f64,

    /// Output file; stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Shape {
    Curve,
    Snowflake,
}

impl From<Shape> for ShapeKind {
    fn from(shape: Shape) -> Self {
        match shape {
            Shape::Curve => ShapeKind::Curve,
            Shape::Snowflake => ShapeKind::Snowflake,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let segments = generate(args.shape.into(), args.depth, args.width, args.height)?;

    let out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut svg = SvgRenderer::new(BufWriter::new(out), args.width, args.height)?;
    draw(segments, &mut svg)?;
    svg.finish()?.flush()?;
    Ok(())
}
