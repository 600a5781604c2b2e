//! Integration tests for rasterop crates.
//!
//! This crate contains end-to-end tests that verify the interaction
//! between rasterop-core, rasterop-ops, and on-disk image files.

#[cfg(test)]
mod tests {
    use rasterop_core::{pack_argb, unpack_argb, luma_bt709, PackedImage, PixelFormat, Rect};
    use rasterop_ops::{GrayscaleOp, ImageOp};
    use tempfile::tempdir;

    /// A small ARGB test card: color gradient with a varying alpha ramp.
    fn gradient_image(width: u32, height: u32) -> PackedImage {
        let mut img = PackedImage::new(width, height, PixelFormat::Argb).unwrap();
        for y in 0..height {
            for x in 0..width {
                let r = (x * 255 / width.max(1)) as u8;
                let g = (y * 255 / height.max(1)) as u8;
                let b = ((x + y) * 255 / (width + height)) as u8;
                let a = 255 - (y * 128 / height) as u8;
                img.set_pixel(x, y, pack_argb(a, r, g, b));
            }
        }
        img
    }

    #[test]
    fn test_grayscale_end_to_end() {
        let src = gradient_image(32, 24);
        let op = GrayscaleOp::new();

        let out = op.filter(&src).unwrap();
        assert_eq!(out.dimensions(), src.dimensions());
        assert_eq!(out.format(), PixelFormat::Argb);

        for (src_px, out_px) in src.pixels().iter().zip(out.pixels()) {
            let [a, r, g, b] = unpack_argb(*src_px);
            let y = luma_bt709(r, g, b);
            assert_eq!(unpack_argb(*out_px), [a, y, y, y]);
        }
    }

    #[test]
    fn test_filter_into_matches_allocating_path() {
        let src = gradient_image(16, 16);
        let op = GrayscaleOp::new();

        let allocated = op.filter(&src).unwrap();
        let mut supplied = PackedImage::new(16, 16, PixelFormat::Argb).unwrap();
        op.filter_into(&src, &mut supplied).unwrap();

        assert_eq!(allocated.pixels(), supplied.pixels());
    }

    #[test]
    fn test_op_contract_through_trait_object() {
        let src = gradient_image(8, 4);
        let op: &dyn ImageOp = &GrayscaleOp::new();

        assert_eq!(op.bounds(&src), Rect::from_size(8, 4));
        let p = rasterop_core::Point::new(2.0, 3.0);
        assert_eq!(op.map_point(p), p);
        assert!(op.rendering_hints().is_none());

        let dst = op
            .create_compatible_dest_image(&src, None)
            .unwrap();
        assert_eq!(dst.dimensions(), (8, 4));
        assert_eq!(dst.color_model(), src.color_model());
    }

    /// Full pipeline: raster -> PNG on disk -> decode -> grayscale ->
    /// encode -> decode -> verify gray with alpha preserved.
    #[test]
    fn test_png_round_trip_grayscale() {
        let dir = tempdir().unwrap();
        let src_path = dir.path().join("card.png");
        let out_path = dir.path().join("card_gray.png");

        let src = gradient_image(20, 10);
        packed_to_rgba(&src).save(&src_path).expect("Failed to write PNG");

        let decoded = rgba_to_packed(&image::open(&src_path).expect("Failed to read PNG").to_rgba8());
        assert_eq!(decoded.pixels(), src.pixels());

        let gray = GrayscaleOp::new().filter(&decoded).unwrap();
        packed_to_rgba(&gray).save(&out_path).expect("Failed to write PNG");

        let reloaded = rgba_to_packed(&image::open(&out_path).expect("Failed to read PNG").to_rgba8());
        for (px, orig) in reloaded.pixels().iter().zip(src.pixels()) {
            let [a, r, g, b] = unpack_argb(*px);
            assert_eq!(r, g);
            assert_eq!(g, b);
            assert_eq!(a, unpack_argb(*orig)[0]);
        }
    }

    fn packed_to_rgba(img: &PackedImage) -> image::RgbaImage {
        image::RgbaImage::from_fn(img.width(), img.height(), |x, y| {
            let [a, r, g, b] = unpack_argb(img.pixel(x, y));
            image::Rgba([r, g, b, a])
        })
    }

    fn rgba_to_packed(img: &image::RgbaImage) -> PackedImage {
        let pixels = img.pixels().map(|p| pack_argb(p[3], p[0], p[1], p[2])).collect();
        PackedImage::from_pixels(img.width(), img.height(), PixelFormat::Argb, pixels).unwrap()
    }
}
