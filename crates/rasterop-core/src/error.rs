//! Error types for rasterop-core operations.
//!
//! # Overview
//!
//! [`Error`] covers the failure modes of the core buffer types:
//! - Construction with degenerate geometry
//! - Region access outside the raster
//! - Pixel buffers whose length disagrees with the declared geometry
//!
//! Every variant carries the offending values, so messages identify the
//! argument that was wrong and what it conflicted with.
//!
//! # Usage
//!
//! ```
//! use rasterop_core::{PackedImage, PixelFormat, Error};
//!
//! let err = PackedImage::new(0, 10, PixelFormat::Argb).unwrap_err();
//! assert!(matches!(err, Error::InvalidDimensions { .. }));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in core raster operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Image dimensions are zero.
    ///
    /// A [`PackedImage`](crate::image::PackedImage) always has positive
    /// width and height; construction is the only place this is checked.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Region of interest extends beyond image bounds.
    #[error("region ({rx}, {ry}, {rw}x{rh}) exceeds image bounds {width}x{height}")]
    InvalidRegion {
        /// Region X origin
        rx: u32,
        /// Region Y origin
        ry: u32,
        /// Region width
        rw: u32,
        /// Region height
        rh: u32,
        /// Image width
        width: u32,
        /// Image height
        height: u32,
    },

    /// Pixel coordinates are outside image bounds.
    #[error("pixel ({x}, {y}) out of bounds for image {width}x{height}")]
    OutOfBounds {
        /// X coordinate that was out of bounds
        x: u32,
        /// Y coordinate that was out of bounds
        y: u32,
        /// Image width
        width: u32,
        /// Image height
        height: u32,
    },

    /// A pixel buffer's length disagrees with the geometry it must cover.
    #[error("buffer length mismatch: expected {expected} pixels, got {got}")]
    BufferSizeMismatch {
        /// Expected element count
        expected: usize,
        /// Actual element count
        got: usize,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::InvalidRegion`] error.
    #[inline]
    pub fn invalid_region(rx: u32, ry: u32, rw: u32, rh: u32, width: u32, height: u32) -> Self {
        Self::InvalidRegion {
            rx,
            ry,
            rw,
            rh,
            width,
            height,
        }
    }

    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates an [`Error::BufferSizeMismatch`] error.
    #[inline]
    pub fn buffer_size_mismatch(expected: usize, got: usize) -> Self {
        Self::BufferSizeMismatch { expected, got }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimensions_message() {
        let err = Error::invalid_dimensions(0, 10, "width must be positive");
        let msg = err.to_string();
        assert!(msg.contains("0x10"));
        assert!(msg.contains("width must be positive"));
    }

    #[test]
    fn test_invalid_region_message() {
        let err = Error::invalid_region(8, 8, 16, 16, 10, 10);
        let msg = err.to_string();
        assert!(msg.contains("16x16"));
        assert!(msg.contains("10x10"));
    }

    #[test]
    fn test_buffer_size_mismatch_message() {
        let err = Error::buffer_size_mismatch(100, 99);
        let msg = err.to_string();
        assert!(msg.contains("100"));
        assert!(msg.contains("99"));
    }
}
