//! Tests for decode, resize, and encode operations

#[cfg(test)]
mod tests {
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;
    use tesserae::imaging::OutputFormat;
    use tesserae::imaging::ops::{decode_oriented, encode, resize_exact_rgba, resize_to_width};

    fn png_bytes(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
        let image = RgbaImage::from_pixel(width, height, Rgba(rgba));
        let mut cursor = Cursor::new(Vec::new());
        image
            .write_to(&mut cursor, ImageFormat::Png)
            .map_err(|e| e.to_string())
            .unwrap();
        cursor.into_inner()
    }

    // Tests decoding preserves dimensions and pixel content
    #[test]
    fn test_decode_oriented_round_trip() {
        let bytes = png_bytes(6, 4, [10, 20, 30, 255]);
        let decoded = decode_oriented(&bytes).unwrap();
        assert_eq!(decoded.width(), 6);
        assert_eq!(decoded.height(), 4);
        assert_eq!(decoded.into_rgba8().get_pixel(3, 2).0, [10, 20, 30, 255]);
    }

    // Tests garbage bytes are rejected rather than decoded
    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_oriented(&[0u8, 1, 2, 3, 4]).is_err());
    }

    // Tests aspect ratio preservation through width-only resizing
    // Verified by changing the rounding of the derived height
    #[test]
    fn test_resize_to_width_preserves_aspect() {
        let source = decode_oriented(&png_bytes(200, 100, [5, 5, 5, 255])).unwrap();
        let resized = resize_to_width(&source, 50).unwrap();
        assert_eq!(resized.width(), 50);
        assert_eq!(resized.height(), 25);
    }

    #[test]
    fn test_resize_to_zero_width_is_rejected() {
        let source = decode_oriented(&png_bytes(4, 4, [0, 0, 0, 255])).unwrap();
        assert!(resize_to_width(&source, 0).is_err());
    }

    // Tests exact resizing ignores the aspect ratio
    #[test]
    fn test_resize_exact_forces_dimensions() {
        let source = decode_oriented(&png_bytes(10, 10, [7, 7, 7, 255])).unwrap();
        let resized = resize_exact_rgba(&source, 3, 9);
        assert_eq!(resized.dimensions(), (3, 9));
    }

    // Tests PNG output decodes back to the same canvas
    #[test]
    fn test_encode_png_round_trip() {
        let canvas = RgbaImage::from_pixel(5, 7, Rgba([1, 2, 3, 200]));
        let buffer = encode(&canvas, OutputFormat::Png).unwrap();

        let decoded = image::load_from_memory(&buffer).unwrap();
        assert_eq!(decoded.width(), 5);
        assert_eq!(decoded.height(), 7);
    }

    // Tests the JPEG path flattens alpha instead of failing to encode
    #[test]
    fn test_encode_jpeg_flattens_alpha() {
        let canvas = RgbaImage::from_pixel(8, 8, Rgba([100, 150, 200, 128]));
        let buffer = encode(&canvas, OutputFormat::Jpeg).unwrap();

        let decoded = image::load_from_memory(&buffer).unwrap();
        assert_eq!(decoded.color().channel_count(), 3);
    }

    // Tests format identifiers and extensions stay in sync
    #[test]
    fn test_output_format_mapping() {
        assert_eq!(OutputFormat::Png.image_format(), ImageFormat::Png);
        assert_eq!(OutputFormat::Jpeg.image_format(), ImageFormat::Jpeg);
        assert_eq!(OutputFormat::Png.extension(), "png");
        assert_eq!(OutputFormat::Jpeg.extension(), "jpg");
        assert_eq!(OutputFormat::default(), OutputFormat::Png);
    }
}
