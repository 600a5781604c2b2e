//! # rasterop-ops
//!
//! Image operations over packed rasters.
//!
//! This crate provides the operation contract and the pixelwise transform
//! pipeline for [`PackedImage`](rasterop_core::PackedImage) buffers.
//!
//! # Modules
//!
//! - [`op`] - The [`ImageOp`] contract every operation implements
//! - [`pixelwise`] - Generic "transform every pixel independently" pipeline
//! - [`grayscale`] - BT.709 grayscale conversion
//! - [`guard`] - Argument-validation guards shared by operations
//!
//! # Example
//!
//! ```
//! use rasterop_core::{PackedImage, PixelFormat};
//! use rasterop_ops::{GrayscaleOp, ImageOp};
//!
//! let src = PackedImage::from_pixels(
//!     2, 1,
//!     PixelFormat::Argb,
//!     vec![0xFFFF_0000, 0xFF00_FF00],
//! ).unwrap();
//!
//! let gray = GrayscaleOp::new().filter(&src).unwrap();
//! assert_eq!(gray.pixel(0, 0), 0xFF36_3636);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod grayscale;
pub mod guard;
pub mod op;
pub mod pixelwise;

pub use error::{OpsError, OpsResult};
pub use grayscale::{grayscale_pixel, GrayscaleOp};
pub use op::{ImageOp, RenderingHints};
pub use pixelwise::{PixelKernel, PixelwiseOp};
