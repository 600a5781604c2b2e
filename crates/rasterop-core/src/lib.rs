//! # rasterop-core
//!
//! Core types for packed-raster image processing.
//!
//! This crate provides the foundational types used throughout the rasterop
//! workspace:
//!
//! - [`Channel`] - The fixed bit layout of a packed 32-bit ARGB pixel
//! - [`PixelFormat`] - Closed enumeration of supported packed-int formats
//! - [`ColorModel`] - Format plus alpha-premultiplication metadata
//! - [`PackedImage`] - Owned row-major raster of packed `u32` pixels
//! - [`Rect`], [`Point`] - Geometry primitives
//!
//! ## Design Philosophy
//!
//! Everything here is a plain value. A [`PackedImage`] always has positive
//! dimensions and a buffer of exactly `width * height` pixels - both are
//! enforced at construction, so downstream code never re-validates geometry:
//!
//! ```
//! use rasterop_core::{PackedImage, PixelFormat};
//!
//! let img = PackedImage::new(4, 3, PixelFormat::Argb).unwrap();
//! assert_eq!(img.pixel_count(), 12);
//! assert!(PackedImage::new(0, 3, PixelFormat::Argb).is_err());
//! ```
//!
//! ## Crate Structure
//!
//! This crate is the foundation of the workspace and has no internal
//! dependencies. `rasterop-ops` builds the operation framework on top of it;
//! `rasterop-cli` converts between file codecs and [`PackedImage`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod error;
pub mod format;
pub mod image;
pub mod pixel;
pub mod rect;

// Re-exports for convenience
pub use color::*;
pub use error::*;
pub use format::*;
pub use image::*;
pub use pixel::{
    luma_bt709, pack_argb, unpack_argb, Channel, REC709_LUMA, REC709_LUMA_B, REC709_LUMA_G,
    REC709_LUMA_R,
};
pub use rect::*;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use rasterop_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::ColorModel;
    pub use crate::error::{Error, Result};
    pub use crate::format::PixelFormat;
    pub use crate::image::PackedImage;
    pub use crate::pixel::{luma_bt709, pack_argb, unpack_argb, Channel};
    pub use crate::rect::{Point, Rect};
}
