//! Supported packed-pixel formats.
//!
//! [`PixelFormat`] is a closed enumeration: every [`PackedImage`] carries
//! exactly one of these tags, and operations gate their inputs against an
//! allow-list of them. All formats store one pixel per `u32`; they differ
//! only in how the bytes are interpreted.
//!
//! [`PackedImage`]: crate::image::PackedImage

use std::fmt;

/// Pixel format tag of a packed 32-bit raster.
///
/// # Example
///
/// ```
/// use rasterop_core::PixelFormat;
///
/// assert!(PixelFormat::Argb.has_alpha());
/// assert!(!PixelFormat::Rgb.has_alpha());
/// assert_eq!(PixelFormat::Argb.to_string(), "ARGB");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// 8-bit alpha, red, green, blue; straight (non-premultiplied) alpha.
    Argb,
    /// 8-bit alpha, red, green, blue; color channels premultiplied by alpha.
    ArgbPre,
    /// 8-bit red, green, blue; the high byte is unused and treated as opaque.
    Rgb,
    /// 8-bit blue, green, red in the low three bytes; no alpha.
    Bgr,
}

impl PixelFormat {
    /// Returns `true` if this format carries an alpha channel.
    #[inline]
    pub const fn has_alpha(self) -> bool {
        matches!(self, PixelFormat::Argb | PixelFormat::ArgbPre)
    }

    /// Returns `true` if color channels are premultiplied by alpha.
    #[inline]
    pub const fn is_alpha_premultiplied(self) -> bool {
        matches!(self, PixelFormat::ArgbPre)
    }

    /// Returns the format name used in error messages and CLI output.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            PixelFormat::Argb => "ARGB",
            PixelFormat::ArgbPre => "ARGB_PRE",
            PixelFormat::Rgb => "RGB",
            PixelFormat::Bgr => "BGR",
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
