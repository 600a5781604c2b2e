//! Argument-validation guards for image operations.
//!
//! Operations validate their inputs with these functions before touching
//! any pixel buffer, so a rejected call leaves every image unchanged.
//!
//! # Example
//!
//! ```rust,ignore
//! use rasterop_ops::guard::ensure_supported_format;
//!
//! // Fails if the image's format is outside the allowed set
//! ensure_supported_format(&image, &allowed, "grayscale")?;
//! ```

use crate::{OpsError, OpsResult};
use rasterop_core::{PackedImage, PixelFormat};

/// Validates that an allowed-format list is usable.
///
/// The list an operation is constructed with must be non-empty; there is
/// no further constraint, since [`PixelFormat`] is a closed enum.
///
/// # Errors
///
/// `Err(EmptyFormatList)` if `formats` is empty.
pub fn ensure_allowed_formats(formats: &[PixelFormat]) -> OpsResult<()> {
    if formats.is_empty() {
        return Err(OpsError::EmptyFormatList);
    }
    Ok(())
}

/// Validates that an image's format is a member of the allowed set.
///
/// # Arguments
///
/// * `image` - The image to validate
/// * `allowed` - The operation's allowed-format set
/// * `op` - Name of the operation (for error messages)
///
/// # Errors
///
/// `Err(UnsupportedFormat)` naming the format, the operation, and the
/// allowed set.
pub fn ensure_supported_format(
    image: &PackedImage,
    allowed: &[PixelFormat],
    op: &str,
) -> OpsResult<()> {
    if !allowed.contains(&image.format()) {
        return Err(OpsError::UnsupportedFormat {
            format: image.format(),
            op: op.to_string(),
            allowed: allowed
                .iter()
                .map(|f| f.name())
                .collect::<Vec<_>>()
                .join(", "),
        });
    }
    Ok(())
}

/// Validates that two images have exactly equal dimensions.
///
/// # Errors
///
/// `Err(DimensionMismatch)` naming both dimension pairs.
pub fn ensure_same_dimensions(src: &PackedImage, dst: &PackedImage) -> OpsResult<()> {
    if src.dimensions() != dst.dimensions() {
        return Err(OpsError::DimensionMismatch {
            src_width: src.width(),
            src_height: src.height(),
            dst_width: dst.width(),
            dst_height: dst.height(),
        });
    }
    Ok(())
}

/// Validates that two images have exactly equal pixel formats.
///
/// Equality with the source is the only requirement; the destination is
/// not re-checked against any allowed set.
///
/// # Errors
///
/// `Err(FormatMismatch)` naming both formats.
pub fn ensure_same_format(src: &PackedImage, dst: &PackedImage) -> OpsResult<()> {
    if src.format() != dst.format() {
        return Err(OpsError::FormatMismatch {
            src: src.format(),
            dst: dst.format(),
        });
    }
    Ok(())
}
