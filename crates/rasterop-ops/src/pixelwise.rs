//! Generic pixelwise transform pipeline.
//!
//! [`PixelwiseOp`] is the reusable skeleton for any "transform every pixel
//! independently" operation: it gates the source against an allow-list of
//! pixel formats, reads the raster into a flat buffer in one pass, hands
//! the buffer to a [`PixelKernel`], and writes the result into the
//! destination in one pass. Concrete operations only supply the kernel.
//!
//! # Example
//!
//! ```
//! use rasterop_core::{ColorModel, PackedImage, PixelFormat};
//! use rasterop_ops::{ImageOp, PixelwiseOp};
//!
//! // An op that strips the blue channel from ARGB/RGB images.
//! let drop_blue = PixelwiseOp::packed_rgb(|pixels: &mut [u32], _cm: &ColorModel| {
//!     for px in pixels.iter_mut() {
//!         *px &= 0xFFFF_FF00;
//!     }
//! });
//!
//! let src = PackedImage::from_pixels(1, 1, PixelFormat::Argb, vec![0xFF11_2233]).unwrap();
//! let out = drop_blue.filter(&src).unwrap();
//! assert_eq!(out.pixel(0, 0), 0xFF11_2200);
//! ```

use crate::op::{ImageOp, RenderingHints};
use crate::{guard, OpsResult};
use rasterop_core::{ColorModel, PackedImage, PixelFormat, Point, Rect};
use tracing::{debug, trace};

/// The per-pixel transform capability of a [`PixelwiseOp`].
///
/// Receives the entire flat pixel buffer (row-major, mutable in place) and
/// the source's color model; must leave the buffer the same length and
/// communicates solely through mutation.
///
/// A blanket implementation covers plain functions and closures of the
/// matching signature, so most callers never implement this by hand.
pub trait PixelKernel {
    /// Transforms every pixel of `pixels` in place.
    fn process(&self, pixels: &mut [u32], color_model: &ColorModel);
}

impl<F> PixelKernel for F
where
    F: Fn(&mut [u32], &ColorModel),
{
    #[inline]
    fn process(&self, pixels: &mut [u32], color_model: &ColorModel) {
        self(pixels, color_model)
    }
}

/// Pixelwise image operation: an allowed-format gate plus a kernel.
///
/// The only state is the allowed-format list, stored immutably at
/// construction, so one op value serves any number of
/// [`filter`](ImageOp::filter) calls, from any number of threads.
pub struct PixelwiseOp<K> {
    allowed: Vec<PixelFormat>,
    kernel: K,
}

impl<K: PixelKernel> PixelwiseOp<K> {
    /// Creates a pixelwise op gated on the given formats.
    ///
    /// Stores an immutable copy of `allowed_formats`.
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::EmptyFormatList`](crate::OpsError::EmptyFormatList)
    /// if the list is empty.
    pub fn new(allowed_formats: impl Into<Vec<PixelFormat>>, kernel: K) -> OpsResult<Self> {
        let allowed = allowed_formats.into();
        guard::ensure_allowed_formats(&allowed)?;
        Ok(Self { allowed, kernel })
    }

    /// Creates a pixelwise op restricted to exactly [`PixelFormat::Argb`]
    /// and [`PixelFormat::Rgb`].
    ///
    /// The list is never empty, so this cannot fail. No behavior beyond
    /// the fixed format set differs from [`new`](Self::new).
    pub fn packed_rgb(kernel: K) -> Self {
        Self {
            allowed: vec![PixelFormat::Argb, PixelFormat::Rgb],
            kernel,
        }
    }

    /// Returns the allowed-format set, in construction order.
    #[inline]
    pub fn allowed_formats(&self) -> &[PixelFormat] {
        &self.allowed
    }

    /// Read the whole source raster, run the kernel, write it back out.
    ///
    /// Callers have already validated formats and geometry; `src` and
    /// `dst` are known to share dimensions here.
    fn apply(&self, src: &PackedImage, dst: &mut PackedImage) -> OpsResult<()> {
        let bounds = src.bounds();
        let mut buffer = src.read_region(bounds)?;
        self.kernel.process(&mut buffer, &src.color_model());
        dst.write_region(bounds, &buffer)?;
        Ok(())
    }
}

impl<K: PixelKernel> ImageOp for PixelwiseOp<K> {
    fn filter(&self, src: &PackedImage) -> OpsResult<PackedImage> {
        trace!(
            width = src.width(),
            height = src.height(),
            format = %src.format(),
            "pixelwise filter"
        );
        // Gate before allocating anything.
        guard::ensure_supported_format(src, &self.allowed, "filter")?;
        let mut dst = self.create_compatible_dest_image(src, None)?;
        self.apply(src, &mut dst)?;
        Ok(dst)
    }

    fn filter_into(&self, src: &PackedImage, dst: &mut PackedImage) -> OpsResult<()> {
        trace!(
            width = src.width(),
            height = src.height(),
            format = %src.format(),
            "pixelwise filter into caller destination"
        );
        guard::ensure_supported_format(src, &self.allowed, "filter")?;
        guard::ensure_same_dimensions(src, dst)?;
        // Destination format must equal the source's; it is not re-checked
        // against the allowed set.
        guard::ensure_same_format(src, dst)?;
        self.apply(src, dst)
    }

    fn bounds(&self, src: &PackedImage) -> Rect {
        src.bounds()
    }

    fn create_compatible_dest_image(
        &self,
        src: &PackedImage,
        color_model: Option<&ColorModel>,
    ) -> OpsResult<PackedImage> {
        let cm = color_model.copied().unwrap_or_else(|| src.color_model());
        debug!(
            width = src.width(),
            height = src.height(),
            format = %cm.format(),
            "allocating compatible destination"
        );
        Ok(cm.create_compatible_image(src.width(), src.height())?)
    }

    fn map_point(&self, src: Point) -> Point {
        // Pixelwise ops do not alter geometry.
        src
    }

    fn rendering_hints(&self) -> Option<RenderingHints> {
        None
    }
}
