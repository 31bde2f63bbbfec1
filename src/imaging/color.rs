//! Channel statistics, luminance, and tint compositing

use image::{Pixel, Rgba, RgbaImage};

/// Per-channel mean color of a pixel region, each channel in `[0, 255]`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CellColor {
    /// Red channel mean
    pub r: f64,
    /// Green channel mean
    pub g: f64,
    /// Blue channel mean
    pub b: f64,
    /// Alpha channel mean
    pub a: f64,
}

impl CellColor {
    /// Perceptual brightness approximation `0.3 R + 0.59 G + 0.11 B`
    ///
    /// The single-axis key the sorted catalog is ordered and matched on.
    pub fn luminance(&self) -> f64 {
        self.r.mul_add(0.3, self.g.mul_add(0.59, self.b * 0.11))
    }
}

/// Mean RGBA over a pixel rectangle
///
/// Pixels outside the image are ignored; an empty rectangle yields the
/// default (fully transparent black) color.
pub fn region_mean(image: &RgbaImage, left: u32, top: u32, width: u32, height: u32) -> CellColor {
    let mut sums = [0.0f64; 4];
    let mut count = 0u64;

    for y in top..top.saturating_add(height) {
        for x in left..left.saturating_add(width) {
            let Some(Rgba(channels)) = image.get_pixel_checked(x, y) else {
                continue;
            };
            sums[0] += f64::from(channels[0]);
            sums[1] += f64::from(channels[1]);
            sums[2] += f64::from(channels[2]);
            sums[3] += f64::from(channels[3]);
            count += 1;
        }
    }

    if count == 0 {
        return CellColor::default();
    }
    let denom = count as f64;
    CellColor {
        r: sums[0] / denom,
        g: sums[1] / denom,
        b: sums[2] / denom,
        a: sums[3] / denom,
    }
}

/// Mean RGBA over a whole image
pub fn channel_means(image: &RgbaImage) -> CellColor {
    region_mean(image, 0, 0, image.width(), image.height())
}

/// Source-over composite a solid color rectangle onto a clone of the tile
///
/// The overlay covers the full tile at alpha `round(intensity * 255)`,
/// pulling the tile toward the target cell color.
pub fn tint(tile: &RgbaImage, color: CellColor, intensity: f32) -> RgbaImage {
    let alpha = (f32::from(u8::MAX) * intensity.clamp(0.0, 1.0)).round() as u8;
    let overlay = Rgba([
        color.r.clamp(0.0, 255.0).round() as u8,
        color.g.clamp(0.0, 255.0).round() as u8,
        color.b.clamp(0.0, 255.0).round() as u8,
        alpha,
    ]);

    let mut tinted = tile.clone();
    for pixel in tinted.pixels_mut() {
        pixel.blend(&overlay);
    }
    tinted
}
