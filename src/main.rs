//! `allthecolors` CLI - generate images that use every 24-bit RGB color once.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use allthecolors::fill::{Mode, PatternStyle};
use allthecolors::{Config, Generator};

/// Generate an image that uses every 24-bit RGB color exactly once.
#[derive(Parser, Debug)]
#[command(name = "allthecolors")]
#[command(version, about, long_about = None)]
struct Args {
    /// Image width in pixels.
    #[arg(short, long, default_value = "4096", value_name = "INT")]
    width: u32,

    /// Image height in pixels.
    #[arg(short = 'H', long, default_value = "4096", value_name = "INT")]
    height: u32,

    /// Output file name.
    #[arg(short, long, default_value = "allrgb.png", value_name = "PATH")]
    output: PathBuf,

    /// Fill strategy.
    #[arg(short, long, value_enum, default_value = "trivial")]
    mode: Mode,

    /// Random seed (only for random mode).
    #[arg(long, value_name = "INT")]
    seed: Option<u64>,

    /// Traversal style (only for pattern mode).
    #[arg(long, value_enum, default_value = "snake")]
    pattern_style: PatternStyle,

    /// Block size for the blocks pattern (minimum 4).
    #[arg(long, default_value = "64", value_name = "INT")]
    block_size: u32,

    /// Number of arms (only for mandala mode, minimum 1).
    #[arg(long, default_value = "8", value_name = "INT")]
    arms: u32,

    /// Mandala center x coordinate. Defaults to the image center.
    #[arg(long, value_name = "INT")]
    center_x: Option<u32>,

    /// Mandala center y coordinate. Defaults to the image center.
    #[arg(long, value_name = "INT")]
    center_y: Option<u32>,

    /// Recursion depth (only for ornament mode, minimum 1).
    #[arg(long, default_value = "5", value_name = "INT")]
    ornament_depth: u32,

    /// Minimum region size for ornament mode (minimum 8).
    #[arg(long, default_value = "16", value_name = "INT")]
    ornament_min_size: u32,

    /// Output JPEG quality (1-100).
    #[arg(short, long, default_value = "95", value_name = "INT")]
    quality: u8,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("allthecolors={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    if let Err(err) = run(&args) {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<()> {
    let center = match (args.center_x, args.center_y) {
        (None, None) => None,
        (x, y) => Some((x.unwrap_or(args.width / 2), y.unwrap_or(args.height / 2))),
    };

    let config = Config {
        width: args.width,
        height: args.height,
        output: args.output.clone(),
        mode: args.mode,
        seed: args.seed,
        pattern_style: args.pattern_style,
        block_size: args.block_size,
        arms: args.arms,
        center,
        ornament_depth: args.ornament_depth,
        ornament_min_size: args.ornament_min_size,
        quality: args.quality,
    };

    let generator = Generator::new(config).context("Failed to configure generator")?;
    generator.run().context("Failed to generate image")?;

    println!("Image '{}' created successfully.", args.output.display());

    Ok(())
}
