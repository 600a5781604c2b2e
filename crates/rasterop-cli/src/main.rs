//! rasterop - packed-raster image operation CLI
//!
//! Applies pixelwise operations to ordinary image files.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "rasterop")]
#[command(author, version, about = "Packed-raster image operation CLI")]
#[command(long_about = "
Applies pixelwise operations to image files.

Examples:
  rasterop gray photo.png -o photo_gray.png   # BT.709 grayscale
  rasterop info photo.png                     # Show decoded image info
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an image to BT.709 grayscale
    #[command(visible_alias = "g")]
    Gray(GrayArgs),

    /// Display image information
    #[command(visible_alias = "i")]
    Info(InfoArgs),
}

#[derive(Args)]
struct GrayArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,
}

#[derive(Args)]
struct InfoArgs {
    /// Input image(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Gray(args) => commands::gray::run(args, cli.verbose),
        Commands::Info(args) => commands::info::run(args, cli.verbose),
    }
}
