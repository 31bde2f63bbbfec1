//! Tests for proxy-based per-cell color sampling

#[cfg(test)]
mod tests {
    use image::{DynamicImage, Rgba, RgbaImage};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tesserae::io::progress::{MosaicObserver, ProgressEmitter};
    use tesserae::mosaic::GridGeometry;
    use tesserae::mosaic::sampler::sample_grid;

    #[derive(Clone, Default)]
    struct Tally {
        processing: Arc<AtomicUsize>,
    }

    impl MosaicObserver for Tally {
        fn processing(&self, _iteration: usize) {
            self.processing.fetch_add(1, Ordering::SeqCst);
        }

        fn complete(&self, _buffer: &[u8]) {}
    }

    fn quadrant_source() -> DynamicImage {
        // Quadrants: black, white (top), red, blue (bottom).
        let mut image = RgbaImage::from_pixel(80, 80, Rgba([0, 0, 0, 255]));
        for y in 0..80 {
            for x in 0..80 {
                let pixel = match (x >= 40, y >= 40) {
                    (false, false) => [0, 0, 0, 255],
                    (true, false) => [255, 255, 255, 255],
                    (false, true) => [255, 0, 0, 255],
                    (true, true) => [0, 0, 255, 255],
                };
                image.put_pixel(x, y, Rgba(pixel));
            }
        }
        DynamicImage::ImageRgba8(image)
    }

    fn geometry(grid_num: u32) -> GridGeometry {
        GridGeometry::compute(80, 80, grid_num, 80).map_err(|e| e.to_string()).unwrap()
    }

    // Tests cell means land on the dominant quadrant colors
    // Verified by swapping the row/column rectangle origins
    #[test]
    fn test_quadrant_means() {
        let emitter = ProgressEmitter::new();
        let mut iteration = 0;
        let colors = sample_grid(&quadrant_source(), &geometry(2), &emitter, &mut iteration)
            .map_err(|e| e.to_string())
            .unwrap();

        // (row, col) indexing: top-right is white, bottom-left is red.
        assert!(colors.get((0, 0)).is_some_and(|c| c.r < 10.0 && c.a > 250.0));
        assert!(colors.get((0, 1)).is_some_and(|c| c.r > 245.0 && c.g > 245.0));
        assert!(colors.get((1, 0)).is_some_and(|c| c.r > 245.0 && c.g < 10.0));
        assert!(colors.get((1, 1)).is_some_and(|c| c.b > 245.0 && c.r < 10.0));
    }

    // Tests one processing notification per sampled cell
    #[test]
    fn test_emits_once_per_cell() {
        let tally = Tally::default();
        let mut emitter = ProgressEmitter::new();
        emitter.register(Box::new(tally.clone()));

        let mut iteration = 5;
        let colors = sample_grid(&quadrant_source(), &geometry(4), &emitter, &mut iteration)
            .map_err(|e| e.to_string())
            .unwrap();

        assert_eq!(colors.len(), 16);
        assert_eq!(tally.processing.load(Ordering::SeqCst), 16);
        // The shared counter keeps climbing from where the session left it.
        assert_eq!(iteration, 21);
    }

    // Tests an over-fine grid is rejected before sampling
    #[test]
    fn test_grid_finer_than_proxy_is_rejected() {
        let emitter = ProgressEmitter::new();
        let mut iteration = 0;
        // 500 cells per side cannot fit a 400 pixel wide proxy.
        let geometry = GridGeometry {
            grid_num: 500,
            cell_width: 1,
            cell_height: 1,
            canvas_width: 500,
            canvas_height: 500,
        };
        assert!(sample_grid(&quadrant_source(), &geometry, &emitter, &mut iteration).is_err());
    }
}
