//! Per-cell average color sampling over a downsized proxy
//!
//! Sampling never touches the full-resolution canvas: the source is first
//! downsized to a fixed reference width, trading color-estimate precision
//! for throughput. The proxy's usable area is re-snapped to exact sub-cell
//! multiples the same way the canvas geometry is.

use crate::imaging::color::{CellColor, region_mean};
use crate::imaging::ops::resize_to_width;
use crate::io::configuration::SAMPLING_PROXY_WIDTH;
use crate::io::error::{Result, invalid_grid};
use crate::io::progress::ProgressEmitter;
use crate::mosaic::geometry::GridGeometry;
use image::DynamicImage;
use ndarray::Array2;

/// Sample the average color of every grid cell of the source
///
/// Returns a `(row, col)` indexed grid of channel means. One `processing`
/// notification fires per sampled cell, continuing the session's
/// monotonic iteration count.
///
/// # Errors
///
/// Returns [`crate::MosaicError::InvalidGrid`] when the grid is so fine
/// that proxy sub-cells collapse to zero pixels.
pub fn sample_grid(
    source: &DynamicImage,
    geometry: &GridGeometry,
    emitter: &ProgressEmitter,
    iteration: &mut usize,
) -> Result<Array2<CellColor>> {
    let grid_num = geometry.grid_num;
    let proxy = resize_to_width(source, SAMPLING_PROXY_WIDTH)?.into_rgba8();

    let sub_width = proxy.width() / grid_num;
    let sub_height = proxy.height() / grid_num;
    if sub_width == 0 || sub_height == 0 {
        return Err(invalid_grid(
            "grid_num",
            &grid_num,
            &"sampling proxy cells collapse to zero pixels",
        ));
    }

    // Only the re-snapped sub_width * grid_num by sub_height * grid_num
    // area is read; the proxy margin beyond it is discarded.
    let side = grid_num as usize;
    let mut colors = Array2::from_elem((side, side), CellColor::default());
    for row in 0..grid_num {
        for col in 0..grid_num {
            *iteration += 1;
            emitter.processing(*iteration);

            let color = region_mean(
                &proxy,
                col * sub_width,
                row * sub_height,
                sub_width,
                sub_height,
            );
            if let Some(slot) = colors.get_mut((row as usize, col as usize)) {
                *slot = color;
            }
        }
    }

    Ok(colors)
}
