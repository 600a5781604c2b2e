//! Gray command
//!
//! Converts an image file to BT.709 grayscale.

use crate::GrayArgs;
use anyhow::Result;
use rasterop_ops::{GrayscaleOp, ImageOp};
use tracing::{info, trace};

pub fn run(args: GrayArgs, verbose: bool) -> Result<()> {
    trace!(input = %args.input.display(), "gray::run");

    let src = super::load_image(&args.input)?;

    info!(
        width = src.width(),
        height = src.height(),
        format = %src.format(),
        "Applying grayscale"
    );

    if verbose {
        println!(
            "Applying BT.709 grayscale to {} ({}x{}, {})",
            args.input.display(),
            src.width(),
            src.height(),
            src.format()
        );
    }

    let out = GrayscaleOp::new().filter(&src)?;

    super::save_image(&args.output, &out)?;

    if verbose {
        println!("Done.");
    }

    Ok(())
}
