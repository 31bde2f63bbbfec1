//! Core mosaic pipeline
//!
//! This module contains the algorithmic heart of the crate:
//! - Grid geometry derivation
//! - Sub-image catalog construction and luminance ordering
//! - Per-cell color sampling over a downsized proxy
//! - Tile selection strategies
//! - Tinted overlay compositing with bounded batches
//! - The per-build session orchestrating all of the above

/// Sub-image catalog construction and luminance ordering
pub mod catalog;
/// Tinted tile accumulation and batched canvas flushing
pub mod compositor;
/// Cell and canvas geometry derivation
pub mod geometry;
/// Per-cell average color sampling over a downsized proxy
pub mod sampler;
/// Tile selection strategies
pub mod selector;
/// Per-build session orchestration
pub mod session;

pub use geometry::GridGeometry;
pub use selector::Algorithm;
pub use session::{MosaicConfig, MosaicSession};
