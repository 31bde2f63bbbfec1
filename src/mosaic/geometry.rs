//! Cell and canvas geometry derivation

use crate::io::configuration::MAX_GRID_NUM;
use crate::io::error::{Result, invalid_grid};

/// Fixed geometry of one mosaic build
///
/// Canvas dimensions are exact integer multiples of the cell dimensions:
/// the canvas is re-derived from the floored cell size rather than taken
/// from the resized source, so any sub-cell remainder is discarded instead
/// of being distributed across cells.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GridGeometry {
    /// Grid cells per side
    pub grid_num: u32,
    /// Width of one cell in pixels
    pub cell_width: u32,
    /// Height of one cell in pixels
    pub cell_height: u32,
    /// Canvas width, `cell_width * grid_num`
    pub canvas_width: u32,
    /// Canvas height, `cell_height * grid_num`
    pub canvas_height: u32,
}

impl GridGeometry {
    /// Derive cell and canvas dimensions from the resized source dimensions
    ///
    /// `cell_width = floor(output_width / grid_num)`; the cell height
    /// preserves the source aspect ratio:
    /// `cell_height = floor(cell_width * source_height / output_width)`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MosaicError::InvalidGrid`] when `grid_num` is zero
    /// or above [`MAX_GRID_NUM`], when the source dimensions are
    /// unavailable, or when the grid is so fine that cells collapse to
    /// zero pixels.
    pub fn compute(
        source_width: u32,
        source_height: u32,
        grid_num: u32,
        output_width: u32,
    ) -> Result<Self> {
        if grid_num == 0 {
            return Err(invalid_grid(
                "grid_num",
                &grid_num,
                &"must be greater than zero",
            ));
        }
        if grid_num > MAX_GRID_NUM {
            return Err(invalid_grid(
                "grid_num",
                &grid_num,
                &format!("must not exceed {MAX_GRID_NUM}"),
            ));
        }
        if source_width == 0 || source_height == 0 {
            return Err(invalid_grid(
                "source",
                &format!("{source_width}x{source_height}"),
                &"source dimensions unavailable",
            ));
        }
        if output_width == 0 {
            return Err(invalid_grid(
                "output_width",
                &output_width,
                &"must be greater than zero",
            ));
        }

        let cell_width = output_width / grid_num;
        let cell_height = (f64::from(cell_width) * f64::from(source_height)
            / f64::from(output_width))
        .floor() as u32;
        if cell_width == 0 || cell_height == 0 {
            return Err(invalid_grid(
                "grid_num",
                &grid_num,
                &"grid cells collapse to zero pixels at this output width",
            ));
        }

        Ok(Self {
            grid_num,
            cell_width,
            cell_height,
            canvas_width: cell_width * grid_num,
            canvas_height: cell_height * grid_num,
        })
    }

    /// Top-left pixel of the cell at `(col, row)` grid indices
    pub const fn cell_origin(&self, col: u32, row: u32) -> (i64, i64) {
        (
            (col * self.cell_width) as i64,
            (row * self.cell_height) as i64,
        )
    }
}
