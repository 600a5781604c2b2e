//! BT.709 grayscale conversion.
//!
//! Replaces the color channels of every pixel with their shared luma while
//! preserving alpha. Restricted to the packed ARGB and RGB formats.
//!
//! # Example
//!
//! ```
//! use rasterop_core::{PackedImage, PixelFormat};
//! use rasterop_ops::{GrayscaleOp, ImageOp};
//!
//! let src = PackedImage::from_pixels(1, 1, PixelFormat::Argb, vec![0x80FF_0000]).unwrap();
//! let out = GrayscaleOp::new().filter(&src).unwrap();
//! // Alpha preserved, r = g = b = luma(red)
//! assert_eq!(out.pixel(0, 0), 0x8036_3636);
//! ```

use crate::op::{ImageOp, RenderingHints};
use crate::pixelwise::PixelwiseOp;
use crate::OpsResult;
use rasterop_core::{
    luma_bt709, pack_argb, unpack_argb, ColorModel, PackedImage, PixelFormat, Point, Rect,
};

/// Converts one packed pixel to grayscale.
///
/// Extracts alpha, red, green, blue; computes BT.709 luma of the color
/// channels; repacks as `(alpha, luma, luma, luma)`.
#[inline]
pub fn grayscale_pixel(pixel: u32) -> u32 {
    let [a, r, g, b] = unpack_argb(pixel);
    let y = luma_bt709(r, g, b);
    pack_argb(a, y, y, y)
}

fn grayscale_kernel(pixels: &mut [u32], _color_model: &ColorModel) {
    for px in pixels.iter_mut() {
        *px = grayscale_pixel(*px);
    }
}

/// Pixelwise BT.709 grayscale operation over ARGB/RGB images.
///
/// Stateless beyond its fixed allowed-format set; construct once and reuse
/// across calls and threads.
pub struct GrayscaleOp {
    inner: PixelwiseOp<fn(&mut [u32], &ColorModel)>,
}

impl GrayscaleOp {
    /// Creates the grayscale operation.
    pub fn new() -> Self {
        Self {
            inner: PixelwiseOp::packed_rgb(grayscale_kernel as fn(&mut [u32], &ColorModel)),
        }
    }

    /// Returns the allowed-format set: ARGB and RGB.
    #[inline]
    pub fn allowed_formats(&self) -> &[PixelFormat] {
        self.inner.allowed_formats()
    }
}

impl Default for GrayscaleOp {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageOp for GrayscaleOp {
    fn filter(&self, src: &PackedImage) -> OpsResult<PackedImage> {
        self.inner.filter(src)
    }

    fn filter_into(&self, src: &PackedImage, dst: &mut PackedImage) -> OpsResult<()> {
        self.inner.filter_into(src, dst)
    }

    fn bounds(&self, src: &PackedImage) -> Rect {
        self.inner.bounds(src)
    }

    fn create_compatible_dest_image(
        &self,
        src: &PackedImage,
        color_model: Option<&ColorModel>,
    ) -> OpsResult<PackedImage> {
        self.inner.create_compatible_dest_image(src, color_model)
    }

    fn map_point(&self, src: Point) -> Point {
        self.inner.map_point(src)
    }

    fn rendering_hints(&self) -> Option<RenderingHints> {
        self.inner.rendering_hints()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OpsError;

    #[test]
    fn test_white_stays_white() {
        assert_eq!(grayscale_pixel(0xFFFF_FFFF), 0xFFFF_FFFF);
    }

    #[test]
    fn test_pure_red() {
        // luma = round(0.2126 * 255) = 54 = 0x36
        assert_eq!(grayscale_pixel(0xFFFF_0000), 0xFF36_3636);
    }

    #[test]
    fn test_pure_green_and_blue() {
        // round(0.7152 * 255) = 182 = 0xB6
        assert_eq!(grayscale_pixel(0xFF00_FF00), 0xFFB6_B6B6);
        // round(0.0722 * 255) = 18 = 0x12
        assert_eq!(grayscale_pixel(0xFF00_00FF), 0xFF12_1212);
    }

    #[test]
    fn test_alpha_preserved() {
        assert_eq!(grayscale_pixel(0x00FF_0000) >> 24, 0x00);
        assert_eq!(grayscale_pixel(0x7FFF_0000) >> 24, 0x7F);
    }

    #[test]
    fn test_gray_input_is_fixed_point() {
        for k in [0u32, 1, 63, 128, 200, 255] {
            let px = 0xFF00_0000 | (k << 16) | (k << 8) | k;
            assert_eq!(grayscale_pixel(px), px);
        }
    }

    #[test]
    fn test_filter_whole_image() {
        let src = PackedImage::from_pixels(
            2,
            2,
            PixelFormat::Argb,
            vec![0xFFFF_0000, 0xFF00_FF00, 0xFF00_00FF, 0x80AA_AAAA],
        )
        .unwrap();
        let out = GrayscaleOp::new().filter(&src).unwrap();
        assert_eq!(out.format(), PixelFormat::Argb);
        assert_eq!(
            out.pixels(),
            &[0xFF36_3636, 0xFFB6_B6B6, 0xFF12_1212, 0x80AA_AAAA]
        );
    }

    #[test]
    fn test_gray_image_idempotent() {
        let src = PackedImage::from_pixels(
            2,
            1,
            PixelFormat::Argb,
            vec![0xFF40_4040, 0x10C8_C8C8],
        )
        .unwrap();
        let op = GrayscaleOp::new();
        let once = op.filter(&src).unwrap();
        assert_eq!(once.pixels(), src.pixels());
        let twice = op.filter(&once).unwrap();
        assert_eq!(twice.pixels(), once.pixels());
    }

    #[test]
    fn test_rejects_bgr() {
        let src = PackedImage::new(2, 2, PixelFormat::Bgr).unwrap();
        let err = GrayscaleOp::new().filter(&src).unwrap_err();
        assert!(matches!(err, OpsError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_allowed_formats() {
        assert_eq!(
            GrayscaleOp::new().allowed_formats(),
            &[PixelFormat::Argb, PixelFormat::Rgb]
        );
    }
}
