//! `allthecolors-check` CLI - check an image for all 2^24 unique colors.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use allthecolors::check_image;

/// Check whether an image contains every 24-bit RGB color exactly once.
#[derive(Parser, Debug)]
#[command(name = "allthecolors-check")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path of the image to check.
    #[arg(value_name = "IMAGE", default_value = "trivial.png")]
    image: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "allthecolors=info".into()),
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
    let report = check_image(&args.image)
        .with_context(|| format!("Failed to check {}", args.image.display()))?;

    println!("{report}");

    Ok(())
}
