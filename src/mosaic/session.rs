//! Per-build session orchestration
//!
//! A session owns every piece of in-flight build state: the selection
//! cache, the pending composite batch, the canvas, and the iteration
//! counter. `build` consumes the session, so state is never shared across
//! builds and reentrant invocation is rejected by the type system.
//! Independent sessions are fully independent and may run in parallel.

use crate::imaging::ops::{OutputFormat, decode_oriented, encode, resize_to_width};
use crate::io::configuration::{
    DEFAULT_ALPHA_SKIP, DEFAULT_FLUSH_THRESHOLD, DEFAULT_GRID_NUM, DEFAULT_INTENSITY,
    DEFAULT_OUTPUT_WIDTH, DEFAULT_SEED,
};
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::io::input::ImageInput;
use crate::io::progress::{MosaicObserver, ProgressEmitter};
use crate::mosaic::catalog::Catalog;
use crate::mosaic::compositor::Compositor;
use crate::mosaic::geometry::GridGeometry;
use crate::mosaic::sampler::sample_grid;
use crate::mosaic::selector::{Algorithm, TileSelector};

/// Build parameters recognized by a mosaic session
///
/// The selection algorithm is an explicit required choice; everything else
/// carries a documented default.
#[derive(Clone, Copy, Debug)]
pub struct MosaicConfig {
    /// Grid cells per side
    pub grid_num: u32,
    /// Tint alpha in `[0, 1]` overlaying the cell color onto a tile
    pub intensity: f32,
    /// Target canvas width in pixels
    pub output_width: u32,
    /// Tile-selection strategy
    pub algorithm: Algorithm,
    /// Raster format of the output buffer
    pub output_format: OutputFormat,
    /// Alpha mean below which a cell is skipped entirely
    pub alpha_skip: u8,
    /// Pending tile placements merged per canvas flush
    pub flush_threshold: usize,
    /// Seed for the random strategy's RNG
    pub seed: u64,
}

impl MosaicConfig {
    /// Defaults for everything but the required algorithm choice
    pub const fn new(algorithm: Algorithm) -> Self {
        Self {
            grid_num: DEFAULT_GRID_NUM,
            intensity: DEFAULT_INTENSITY,
            output_width: DEFAULT_OUTPUT_WIDTH,
            algorithm,
            output_format: OutputFormat::Png,
            alpha_skip: DEFAULT_ALPHA_SKIP,
            flush_threshold: DEFAULT_FLUSH_THRESHOLD,
            seed: DEFAULT_SEED,
        }
    }

    /// Validate parameter ranges before a build starts
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::InvalidParameter`] when `intensity` leaves
    /// `[0, 1]` or `flush_threshold` is zero. Grid bounds are validated by
    /// [`GridGeometry::compute`] once the source dimensions are known.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.intensity) {
            return Err(invalid_parameter(
                "intensity",
                &self.intensity,
                &"must be within [0, 1]",
            ));
        }
        if self.flush_threshold == 0 {
            return Err(invalid_parameter(
                "flush_threshold",
                &self.flush_threshold,
                &"must be at least 1",
            ));
        }
        Ok(())
    }
}

/// One in-flight mosaic build
///
/// Constructed fresh per invocation; `build` consumes the session and
/// returns either the complete encoded buffer or an error, never a
/// partial result.
pub struct MosaicSession {
    config: MosaicConfig,
    emitter: ProgressEmitter,
    iteration: usize,
}

impl MosaicSession {
    /// Create a session with the given configuration and no observers
    pub const fn new(config: MosaicConfig) -> Self {
        Self {
            config,
            emitter: ProgressEmitter::new(),
            iteration: 0,
        }
    }

    /// Register an observer for progress and completion notifications
    pub fn observe(&mut self, observer: Box<dyn MosaicObserver>) {
        self.emitter.register(observer);
    }

    /// Upper bound on `processing` notifications this build will emit
    ///
    /// One per sampled cell, one per placement decision, and one per
    /// flush.
    pub const fn expected_iterations(&self) -> usize {
        let cells = (self.config.grid_num as usize).pow(2);
        cells * 2 + cells.div_ceil(self.config.flush_threshold)
    }

    /// Build the mosaic and return the encoded output buffer
    ///
    /// Pipeline: materialize and normalize the source, fix the grid
    /// geometry, build the catalog, sample per-cell colors from the proxy,
    /// then select, tint, and stage one tile per opaque cell, flushing
    /// batches row-major onto the canvas.
    ///
    /// # Errors
    ///
    /// Any failure aborts the build: [`MosaicError::InvalidSource`] for an
    /// unreadable or undecodable source, [`MosaicError::NoSubImages`] for
    /// an empty sub-image collection, [`MosaicError::InvalidGrid`] for
    /// unusable geometry, and capability failures propagated unchanged.
    pub fn build(mut self, source: ImageInput, sub_images: Vec<ImageInput>) -> Result<Vec<u8>> {
        self.config.validate()?;

        let source_bytes = source.materialize()?;
        let decoded = decode_oriented(&source_bytes).map_err(|e| MosaicError::InvalidSource {
            reason: e.to_string(),
        })?;
        let resized = resize_to_width(&decoded, self.config.output_width)?;

        let geometry = GridGeometry::compute(
            resized.width(),
            resized.height(),
            self.config.grid_num,
            self.config.output_width,
        )?;

        if sub_images.is_empty() {
            return Err(MosaicError::NoSubImages);
        }
        let mut buffers = Vec::with_capacity(sub_images.len());
        for input in sub_images {
            buffers.push(input.materialize()?);
        }
        let catalog = Catalog::build(&buffers, &geometry, self.config.algorithm)?;

        let colors = sample_grid(&resized, &geometry, &self.emitter, &mut self.iteration)?;

        let mut selector = TileSelector::new(self.config.algorithm, self.config.seed);
        let mut compositor = Compositor::new(&geometry, self.config.flush_threshold);
        let alpha_skip = f64::from(self.config.alpha_skip);

        // Rows strictly in sequence, columns left to right within a row:
        // the selection cache and the batch are mutated per cell, and the
        // flush order fixes the final pixel output.
        for row in 0..geometry.grid_num {
            for col in 0..geometry.grid_num {
                self.iteration += 1;
                self.emitter.processing(self.iteration);

                let Some(color) = colors.get((row as usize, col as usize)).copied() else {
                    continue;
                };
                // Transparent cells get no tile at all; the canvas stays
                // transparent there.
                if color.a < alpha_skip {
                    continue;
                }

                let Some(index) = selector.select(&catalog, color) else {
                    continue;
                };
                let Some(entry) = catalog.get(index) else {
                    continue;
                };

                let flushed = compositor.place_tile(
                    &entry.image,
                    color,
                    self.config.intensity,
                    col,
                    row,
                    &geometry,
                );
                if flushed {
                    self.iteration += 1;
                    self.emitter.processing(self.iteration);
                }
            }
        }

        if compositor.pending() > 0 {
            compositor.flush();
            self.iteration += 1;
            self.emitter.processing(self.iteration);
        }

        let buffer = encode(&compositor.into_canvas(), self.config.output_format)?;
        self.emitter.complete(&buffer);
        Ok(buffer)
    }
}
