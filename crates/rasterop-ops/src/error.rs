//! Error types for image operations.

use rasterop_core::PixelFormat;
use thiserror::Error;

/// Error type for image operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// An operation was constructed with an empty allowed-format list.
    #[error("allowed-format list must not be empty")]
    EmptyFormatList,

    /// The source image's format is not in the operation's allowed set.
    #[error("{op}: unsupported pixel format {format} (allowed: {allowed})")]
    UnsupportedFormat {
        /// The rejected format.
        format: PixelFormat,
        /// Name of the operation that rejected it.
        op: String,
        /// The formats the operation accepts.
        allowed: String,
    },

    /// Source and destination dimensions differ.
    #[error(
        "dimension mismatch: source {src_width}x{src_height} vs destination {dst_width}x{dst_height}"
    )]
    DimensionMismatch {
        /// Source width.
        src_width: u32,
        /// Source height.
        src_height: u32,
        /// Destination width.
        dst_width: u32,
        /// Destination height.
        dst_height: u32,
    },

    /// Source and destination pixel formats differ.
    #[error("format mismatch: source is {src}, destination is {dst}")]
    FormatMismatch {
        /// Source format.
        src: PixelFormat,
        /// Destination format.
        dst: PixelFormat,
    },

    /// Error propagated from the core raster types.
    #[error(transparent)]
    Core(#[from] rasterop_core::Error),
}

/// Result type for image operations.
pub type OpsResult<T> = Result<T, OpsError>;
