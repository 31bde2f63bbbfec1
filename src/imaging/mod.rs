//! Wrappers over the `image` crate
//!
//! Everything the mosaic core needs from its image-processing collaborator
//! lives here: decoding with orientation normalization, resizing, channel
//! statistics, tint compositing, and format encoding. The core treats each
//! operation as opaque and side-effect free.

/// Channel statistics, luminance, and tint compositing
pub mod color;
/// Decode, orientation, resize, and encode operations
pub mod ops;

pub use color::CellColor;
pub use ops::OutputFormat;
