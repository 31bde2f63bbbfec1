//! Tinted tile accumulation and batched canvas flushing
//!
//! Finished tiles are staged as pending placements and merged onto the
//! canvas in bounded batches. Batching bounds the peak number of pending
//! overlays; the flush order matches cell-processing order, so the final
//! pixels are deterministic for deterministic strategies.

use crate::imaging::color::{CellColor, tint};
use crate::mosaic::geometry::GridGeometry;
use image::{RgbaImage, imageops};

/// One pending tile placement awaiting a flush
struct Placement {
    tile: RgbaImage,
    left: i64,
    top: i64,
}

/// Accumulates tinted tiles and merges them onto the destination canvas
///
/// The canvas starts fully transparent, so skipped cells stay transparent
/// in the output. Exclusively owned by one build session.
pub struct Compositor {
    canvas: RgbaImage,
    batch: Vec<Placement>,
    flush_threshold: usize,
}

impl Compositor {
    /// Create a compositor with a transparent canvas of canvas dimensions
    pub fn new(geometry: &GridGeometry, flush_threshold: usize) -> Self {
        Self {
            canvas: RgbaImage::new(geometry.canvas_width, geometry.canvas_height),
            batch: Vec::new(),
            flush_threshold: flush_threshold.max(1),
        }
    }

    /// Tint the selected tile toward the target color and stage it
    ///
    /// Returns `true` when staging filled the batch and triggered a flush.
    pub fn place_tile(
        &mut self,
        tile: &RgbaImage,
        target: CellColor,
        intensity: f32,
        col: u32,
        row: u32,
        geometry: &GridGeometry,
    ) -> bool {
        let (left, top) = geometry.cell_origin(col, row);
        self.batch.push(Placement {
            tile: tint(tile, target, intensity),
            left,
            top,
        });

        if self.batch.len() >= self.flush_threshold {
            self.flush();
            true
        } else {
            false
        }
    }

    /// Merge all pending placements onto the canvas in staging order
    pub fn flush(&mut self) {
        for placement in self.batch.drain(..) {
            imageops::overlay(&mut self.canvas, &placement.tile, placement.left, placement.top);
        }
    }

    /// Number of placements awaiting the next flush
    pub fn pending(&self) -> usize {
        self.batch.len()
    }

    /// Flush any remaining placements and yield the finished canvas
    pub fn into_canvas(mut self) -> RgbaImage {
        self.flush();
        self.canvas
    }
}
