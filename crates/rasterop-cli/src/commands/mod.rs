//! CLI command implementations

pub mod gray;
pub mod info;

use anyhow::{Context, Result};
use rasterop_core::{pack_argb, unpack_argb, PackedImage, PixelFormat};
use std::path::Path;

/// Load an image file into a packed raster.
///
/// Sources with an alpha channel become [`PixelFormat::Argb`]; everything
/// else becomes [`PixelFormat::Rgb`] with the unused high byte zero.
pub fn load_image(path: &Path) -> Result<PackedImage> {
    let decoded = image::open(path).with_context(|| format!("Failed to load: {}", path.display()))?;
    let (width, height) = (decoded.width(), decoded.height());

    let img = if decoded.color().has_alpha() {
        let rgba = decoded.to_rgba8();
        let pixels = rgba
            .pixels()
            .map(|p| pack_argb(p[3], p[0], p[1], p[2]))
            .collect();
        PackedImage::from_pixels(width, height, PixelFormat::Argb, pixels)
    } else {
        let rgb = decoded.to_rgb8();
        let pixels = rgb
            .pixels()
            .map(|p| pack_argb(0, p[0], p[1], p[2]))
            .collect();
        PackedImage::from_pixels(width, height, PixelFormat::Rgb, pixels)
    };

    img.with_context(|| format!("Failed to convert: {}", path.display()))
}

/// Save a packed raster to an image file; the format is chosen from the
/// output extension by the codec.
pub fn save_image(path: &Path, img: &PackedImage) -> Result<()> {
    let (width, height) = img.dimensions();

    match img.format() {
        PixelFormat::Argb | PixelFormat::ArgbPre => {
            let out = image::RgbaImage::from_fn(width, height, |x, y| {
                let [a, r, g, b] = unpack_argb(img.pixel(x, y));
                image::Rgba([r, g, b, a])
            });
            out.save(path)
        }
        PixelFormat::Rgb => {
            let out = image::RgbImage::from_fn(width, height, |x, y| {
                let [_, r, g, b] = unpack_argb(img.pixel(x, y));
                image::Rgb([r, g, b])
            });
            out.save(path)
        }
        PixelFormat::Bgr => {
            // Packed byte order is reversed relative to ARGB.
            let out = image::RgbImage::from_fn(width, height, |x, y| {
                let [_, b, g, r] = unpack_argb(img.pixel(x, y));
                image::Rgb([r, g, b])
            });
            out.save(path)
        }
    }
    .with_context(|| format!("Failed to save: {}", path.display()))
}

/// Format file size for display
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
