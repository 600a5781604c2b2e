//! Color model metadata.
//!
//! A [`ColorModel`] describes how the raw `u32` pixels of a raster map to
//! visual channels: which [`PixelFormat`] they use and whether color is
//! premultiplied by alpha. It also carries the capability to allocate a
//! compatible raster, which the operation framework uses when the caller
//! does not supply a destination image.

use crate::error::Result;
use crate::format::PixelFormat;
use crate::image::PackedImage;

/// Pixel-interpretation metadata of a packed raster.
///
/// # Example
///
/// ```
/// use rasterop_core::{ColorModel, PixelFormat};
///
/// let cm = ColorModel::new(PixelFormat::ArgbPre);
/// assert!(cm.is_alpha_premultiplied());
/// let img = cm.create_compatible_image(8, 8).unwrap();
/// assert_eq!(img.format(), PixelFormat::ArgbPre);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorModel {
    format: PixelFormat,
}

impl ColorModel {
    /// Creates a color model for the given format.
    #[inline]
    pub const fn new(format: PixelFormat) -> Self {
        Self { format }
    }

    /// Returns the pixel format.
    #[inline]
    pub const fn format(self) -> PixelFormat {
        self.format
    }

    /// Returns `true` if pixels carry an alpha channel.
    #[inline]
    pub const fn has_alpha(self) -> bool {
        self.format.has_alpha()
    }

    /// Returns `true` if color channels are premultiplied by alpha.
    #[inline]
    pub const fn is_alpha_premultiplied(self) -> bool {
        self.format.is_alpha_premultiplied()
    }

    /// Allocates a zeroed image of this color model and the given size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`](crate::Error::InvalidDimensions)
    /// if `width` or `height` is zero.
    pub fn create_compatible_image(self, width: u32, height: u32) -> Result<PackedImage> {
        PackedImage::with_color_model(width, height, self)
    }
}

impl From<PixelFormat> for ColorModel {
    #[inline]
    fn from(format: PixelFormat) -> Self {
        Self::new(format)
    }
}
