//! Packed image buffer.
//!
//! [`PackedImage`] is the raster type the whole workspace operates on: a
//! row-major buffer of packed `u32` pixels together with its dimensions and
//! a [`ColorModel`].
//!
//! # Memory Layout
//!
//! Pixels are stored row-major, top-to-bottom, one `u32` per pixel:
//!
//! ```text
//! index = y * width + x
//! ```
//!
//! # Invariants
//!
//! - `width >= 1` and `height >= 1`
//! - `pixels.len() == width * height`
//!
//! Both are established at construction and hold for the lifetime of the
//! value; no method can break them.
//!
//! # Usage
//!
//! ```
//! use rasterop_core::{PackedImage, PixelFormat, Rect};
//!
//! let mut img = PackedImage::new(4, 4, PixelFormat::Argb).unwrap();
//! img.set_pixel(1, 2, 0xFF00_FF00);
//! assert_eq!(img.pixel(1, 2), 0xFF00_FF00);
//!
//! // Bulk access over a rectangular region
//! let row = img.read_region(Rect::new(0, 2, 4, 1)).unwrap();
//! assert_eq!(row[1], 0xFF00_FF00);
//! ```
//!
//! # Used By
//!
//! - `rasterop-ops` - source/destination of image operations
//! - `rasterop-cli` - codec conversion

use crate::color::ColorModel;
use crate::error::{Error, Result};
use crate::format::PixelFormat;
use crate::rect::Rect;

/// Owned raster of packed 32-bit pixels.
///
/// See the [module documentation](self) for layout and invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedImage {
    color_model: ColorModel,
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl PackedImage {
    /// Creates a zeroed image of the given format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `width` or `height` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use rasterop_core::{PackedImage, PixelFormat};
    ///
    /// let img = PackedImage::new(640, 480, PixelFormat::Rgb).unwrap();
    /// assert_eq!(img.dimensions(), (640, 480));
    /// ```
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Result<Self> {
        Self::with_color_model(width, height, ColorModel::new(format))
    }

    /// Creates a zeroed image with the given color model.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `width` or `height` is zero.
    pub fn with_color_model(width: u32, height: u32, color_model: ColorModel) -> Result<Self> {
        Self::check_dimensions(width, height)?;
        let pixels = vec![0u32; width as usize * height as usize];
        Ok(Self {
            color_model,
            width,
            height,
            pixels,
        })
    }

    /// Creates an image from an existing pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `width` or `height` is zero,
    /// or [`Error::BufferSizeMismatch`] if `pixels.len()` is not exactly
    /// `width * height`.
    pub fn from_pixels(
        width: u32,
        height: u32,
        format: PixelFormat,
        pixels: Vec<u32>,
    ) -> Result<Self> {
        Self::check_dimensions(width, height)?;
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(Error::buffer_size_mismatch(expected, pixels.len()));
        }
        Ok(Self {
            color_model: ColorModel::new(format),
            width,
            height,
            pixels,
        })
    }

    fn check_dimensions(width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(Error::invalid_dimensions(
                width,
                height,
                "width and height must be positive",
            ));
        }
        Ok(())
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the image dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the pixel format tag.
    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.color_model.format()
    }

    /// Returns the color model.
    #[inline]
    pub fn color_model(&self) -> ColorModel {
        self.color_model
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns a rectangle covering the entire image: `[0, 0, width, height]`.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Returns the full pixel buffer, row-major.
    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Returns the full pixel buffer mutably.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// Returns the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the image, like slice indexing.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> u32 {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for image {}x{}",
            self.width,
            self.height
        );
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Sets the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the image, like slice indexing.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, value: u32) {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for image {}x{}",
            self.width,
            self.height
        );
        self.pixels[y as usize * self.width as usize + x as usize] = value;
    }

    /// Reads a rectangular region into a flat row-major buffer.
    ///
    /// The returned buffer has exactly `rect.width * rect.height` elements.
    /// Reading the full [`bounds`](Self::bounds) copies the entire raster
    /// in one pass.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRegion`] if the region is empty or extends
    /// beyond the image.
    pub fn read_region(&self, rect: Rect) -> Result<Vec<u32>> {
        self.check_region(rect)?;
        let mut out = Vec::with_capacity(rect.area() as usize);
        for row in rect.y..rect.bottom() {
            let start = row as usize * self.width as usize + rect.x as usize;
            out.extend_from_slice(&self.pixels[start..start + rect.width as usize]);
        }
        Ok(out)
    }

    /// Writes a flat row-major buffer into a rectangular region.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRegion`] if the region is empty or extends
    /// beyond the image, or [`Error::BufferSizeMismatch`] if `data.len()`
    /// is not exactly `rect.width * rect.height`. The image is unchanged
    /// on error.
    pub fn write_region(&mut self, rect: Rect, data: &[u32]) -> Result<()> {
        self.check_region(rect)?;
        let expected = rect.area() as usize;
        if data.len() != expected {
            return Err(Error::buffer_size_mismatch(expected, data.len()));
        }
        for (i, row) in (rect.y..rect.bottom()).enumerate() {
            let start = row as usize * self.width as usize + rect.x as usize;
            let src = &data[i * rect.width as usize..(i + 1) * rect.width as usize];
            self.pixels[start..start + rect.width as usize].copy_from_slice(src);
        }
        Ok(())
    }

    fn check_region(&self, rect: Rect) -> Result<()> {
        // Widened to u64 so corner coordinates near u32::MAX cannot wrap.
        let fits = rect.x as u64 + rect.width as u64 <= self.width as u64
            && rect.y as u64 + rect.height as u64 <= self.height as u64;
        if rect.is_empty() || !fits {
            return Err(Error::invalid_region(
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                self.width,
                self.height,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zeroed() {
        let img = PackedImage::new(3, 2, PixelFormat::Argb).unwrap();
        assert_eq!(img.pixel_count(), 6);
        assert!(img.pixels().iter().all(|&p| p == 0));
        assert_eq!(img.bounds(), Rect::from_size(3, 2));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            PackedImage::new(0, 2, PixelFormat::Argb),
            Err(Error::InvalidDimensions { .. })
        ));
        assert!(matches!(
            PackedImage::new(2, 0, PixelFormat::Argb),
            Err(Error::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_from_pixels_length_checked() {
        let img = PackedImage::from_pixels(2, 2, PixelFormat::Rgb, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(img.pixel(1, 1), 4);

        let err = PackedImage::from_pixels(2, 2, PixelFormat::Rgb, vec![1, 2, 3]).unwrap_err();
        assert!(matches!(err, Error::BufferSizeMismatch { expected: 4, got: 3 }));
    }

    #[test]
    fn test_pixel_accessors() {
        let mut img = PackedImage::new(4, 4, PixelFormat::Argb).unwrap();
        img.set_pixel(3, 0, 0xDEAD_BEEF);
        assert_eq!(img.pixel(3, 0), 0xDEAD_BEEF);
        assert_eq!(img.pixels()[3], 0xDEAD_BEEF);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_pixel_out_of_bounds_panics() {
        let img = PackedImage::new(4, 4, PixelFormat::Argb).unwrap();
        let _ = img.pixel(4, 0);
    }

    #[test]
    fn test_region_round_trip() {
        let mut img = PackedImage::new(4, 3, PixelFormat::Argb).unwrap();
        let rect = Rect::new(1, 1, 2, 2);
        img.write_region(rect, &[10, 20, 30, 40]).unwrap();
        assert_eq!(img.read_region(rect).unwrap(), vec![10, 20, 30, 40]);
        assert_eq!(img.pixel(1, 1), 10);
        assert_eq!(img.pixel(2, 2), 40);
        // Pixels outside the region untouched
        assert_eq!(img.pixel(0, 0), 0);
        assert_eq!(img.pixel(3, 2), 0);
    }

    #[test]
    fn test_full_bounds_round_trip() {
        let mut img = PackedImage::new(3, 2, PixelFormat::Rgb).unwrap();
        let data: Vec<u32> = (0..6).collect();
        img.write_region(img.bounds(), &data).unwrap();
        assert_eq!(img.read_region(img.bounds()).unwrap(), data);
        assert_eq!(img.pixels(), data.as_slice());
    }

    #[test]
    fn test_region_out_of_range() {
        let img = PackedImage::new(4, 3, PixelFormat::Argb).unwrap();
        assert!(matches!(
            img.read_region(Rect::new(2, 0, 3, 1)),
            Err(Error::InvalidRegion { .. })
        ));
        assert!(matches!(
            img.read_region(Rect::new(0, 0, 0, 1)),
            Err(Error::InvalidRegion { .. })
        ));
    }

    #[test]
    fn test_write_region_length_checked() {
        let mut img = PackedImage::new(4, 3, PixelFormat::Argb).unwrap();
        let err = img
            .write_region(Rect::new(0, 0, 2, 2), &[1, 2, 3])
            .unwrap_err();
        assert!(matches!(err, Error::BufferSizeMismatch { expected: 4, got: 3 }));
        assert!(img.pixels().iter().all(|&p| p == 0));
    }
}
