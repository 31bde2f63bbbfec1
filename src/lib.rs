//! Photomosaic generation: a source image is partitioned into a uniform grid
//! and each cell is replaced by a candidate sub-image tinted toward the cell's
//! average color.
//!
//! The pipeline derives grid geometry, samples per-cell colors from a
//! downsized proxy, normalizes candidate sub-images into a statistic-annotated
//! catalog, selects a tile per cell (uniformly without immediate repeats, or
//! by nearest luminance over a sorted catalog), and composites tinted tiles
//! onto a transparent canvas in bounded batches.

#![forbid(unsafe_code)]

/// Wrappers over the `image` crate: decoding, orientation, resizing, color
/// statistics, tinting, and encoding
pub mod imaging;
/// Input/output operations, configuration defaults, and error handling
pub mod io;
/// Core mosaic pipeline: geometry, catalog, sampling, selection, compositing
pub mod mosaic;

pub use io::error::{MosaicError, Result};
