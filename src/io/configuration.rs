//! Named constants and runtime configuration defaults

// Default values for configurable parameters
/// Default number of grid cells per side
pub const DEFAULT_GRID_NUM: u32 = 10;

/// Default tint alpha applied when overlaying the cell color onto a tile
pub const DEFAULT_INTENSITY: f32 = 0.5;

/// Default output canvas width in pixels
pub const DEFAULT_OUTPUT_WIDTH: u32 = 400;

/// Fixed seed for reproducible random tile selection
pub const DEFAULT_SEED: u64 = 42;

// Cells whose sampled alpha mean falls below this stay transparent.
/// Default alpha mean below which a cell is skipped entirely
pub const DEFAULT_ALPHA_SKIP: u8 = 10;

/// Default number of pending tile placements merged per canvas flush
pub const DEFAULT_FLUSH_THRESHOLD: usize = 100;

// Color sampling runs on a downsized proxy of the source rather than the
// full canvas, trading estimate precision for throughput. Independent of
// the configured output width.
/// Width in pixels of the color-sampling proxy image
pub const SAMPLING_PROXY_WIDTH: u32 = 400;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid cells per side
pub const MAX_GRID_NUM: u32 = 1_000;

// Output settings
/// Suffix added to derived output filenames
pub const OUTPUT_SUFFIX: &str = "_mosaic";

// Progress bar display settings
/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
