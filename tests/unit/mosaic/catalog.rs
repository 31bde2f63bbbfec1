//! Tests for catalog construction and luminance ordering

#[cfg(test)]
mod tests {
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;
    use tesserae::MosaicError;
    use tesserae::imaging::CellColor;
    use tesserae::mosaic::catalog::{Catalog, CatalogEntry};
    use tesserae::mosaic::{Algorithm, GridGeometry};

    fn png_bytes(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
        let image = RgbaImage::from_pixel(width, height, Rgba(rgba));
        let mut cursor = Cursor::new(Vec::new());
        image
            .write_to(&mut cursor, ImageFormat::Png)
            .map_err(|e| e.to_string())
            .unwrap();
        cursor.into_inner()
    }

    fn gray_entry(value: u8) -> CatalogEntry {
        let stats = CellColor {
            r: f64::from(value),
            g: f64::from(value),
            b: f64::from(value),
            a: 255.0,
        };
        CatalogEntry {
            image: RgbaImage::from_pixel(2, 2, Rgba([value, value, value, 255])),
            luma: stats.luminance(),
            stats,
        }
    }

    fn geometry() -> GridGeometry {
        GridGeometry::compute(400, 300, 10, 400).map_err(|e| e.to_string()).unwrap()
    }

    // Tests every entry is normalized to exactly one cell
    #[test]
    fn test_entries_are_resized_to_cell_dimensions() {
        let buffers = vec![
            png_bytes(100, 30, [40, 40, 40, 255]),
            png_bytes(3, 200, [200, 200, 200, 255]),
        ];
        let catalog = Catalog::build(&buffers, &geometry(), Algorithm::Random)
            .map_err(|e| e.to_string())
            .unwrap();

        assert_eq!(catalog.len(), 2);
        for entry in catalog.entries() {
            assert_eq!(entry.image.dimensions(), (40, 30));
        }
    }

    // Tests the stats of a solid tile equal its color
    #[test]
    fn test_entry_stats_reflect_pixel_means() {
        let buffers = vec![png_bytes(10, 10, [50, 100, 150, 255])];
        let catalog = Catalog::build(&buffers, &geometry(), Algorithm::Random)
            .map_err(|e| e.to_string())
            .unwrap();

        let entry = catalog.get(0).map(|e| e.stats);
        assert!(entry.is_some_and(|stats| (stats.r - 50.0).abs() < 1.0
            && (stats.g - 100.0).abs() < 1.0
            && (stats.b - 150.0).abs() < 1.0));
    }

    // Tests the closest-color strategy sorts ascending by luminance
    // Verified by inverting the comparator
    #[test]
    fn test_closest_color_catalog_is_luma_sorted() {
        let entries = vec![gray_entry(200), gray_entry(0), gray_entry(90)];
        let catalog = Catalog::from_entries(entries, Algorithm::ClosestColor)
            .map_err(|e| e.to_string())
            .unwrap();

        let lumas: Vec<f64> = catalog.entries().iter().map(|e| e.luma).collect();
        assert!(lumas.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    // Tests the random strategy keeps input order
    #[test]
    fn test_random_catalog_keeps_input_order() {
        let entries = vec![gray_entry(200), gray_entry(0)];
        let catalog = Catalog::from_entries(entries, Algorithm::Random)
            .map_err(|e| e.to_string())
            .unwrap();
        assert!(catalog.get(0).is_some_and(|e| e.luma > 100.0));
    }

    // Tests the empty collection is rejected up front
    #[test]
    fn test_empty_catalog_is_rejected() {
        assert!(matches!(
            Catalog::build(&[], &geometry(), Algorithm::Random),
            Err(MosaicError::NoSubImages)
        ));
        assert!(matches!(
            Catalog::from_entries(Vec::new(), Algorithm::ClosestColor),
            Err(MosaicError::NoSubImages)
        ));
    }

    // Tests undecodable sub-image bytes abort catalog construction
    #[test]
    fn test_undecodable_sub_image_fails() {
        let buffers = vec![vec![0u8, 1, 2]];
        assert!(Catalog::build(&buffers, &geometry(), Algorithm::Random).is_err());
    }
}
