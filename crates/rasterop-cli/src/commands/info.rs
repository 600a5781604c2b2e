//! Info command
//!
//! Prints decoded image information.

use crate::InfoArgs;
use anyhow::Result;
use tracing::trace;

pub fn run(args: InfoArgs, verbose: bool) -> Result<()> {
    for path in &args.input {
        trace!(input = %path.display(), "info::run");

        let img = super::load_image(path)?;
        let size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);

        println!(
            "{}: {}x{}, {}, {}",
            path.display(),
            img.width(),
            img.height(),
            img.format(),
            super::format_size(size)
        );

        if verbose {
            println!(
                "  alpha: {}, premultiplied: {}, pixels: {}",
                img.color_model().has_alpha(),
                img.color_model().is_alpha_premultiplied(),
                img.pixel_count()
            );
        }
    }

    Ok(())
}
