//! Command-line interface for building mosaics from files on disk

use crate::imaging::ops::OutputFormat;
use crate::io::configuration::{
    DEFAULT_ALPHA_SKIP, DEFAULT_FLUSH_THRESHOLD, DEFAULT_GRID_NUM, DEFAULT_INTENSITY,
    DEFAULT_OUTPUT_WIDTH, DEFAULT_SEED, OUTPUT_SUFFIX,
};
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::io::input::ImageInput;
use crate::io::progress::RenderProgress;
use crate::mosaic::selector::Algorithm;
use crate::mosaic::session::{MosaicConfig, MosaicSession};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

/// File extensions recognized when scanning the sub-image directory
const SUPPORTED_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Tile-selection strategy choice on the command line
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum AlgorithmArg {
    /// Uniform random draws without repeats until the catalog is exhausted
    Random,
    /// Nearest luminance over the sorted catalog
    ClosestColor,
}

impl AlgorithmArg {
    /// The core strategy this flag maps to
    pub const fn algorithm(self) -> Algorithm {
        match self {
            Self::Random => Algorithm::Random,
            Self::ClosestColor => Algorithm::ClosestColor,
        }
    }
}

/// Output format choice on the command line
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    /// Lossless PNG with alpha
    Png,
    /// Lossy JPEG without alpha
    Jpeg,
}

impl FormatArg {
    /// The encoder format this flag maps to
    pub const fn format(self) -> OutputFormat {
        match self {
            Self::Png => OutputFormat::Png,
            Self::Jpeg => OutputFormat::Jpeg,
        }
    }
}

#[derive(Parser)]
#[command(name = "tesserae")]
#[command(
    author,
    version,
    about = "Build a photomosaic from a source image and a directory of sub-images"
)]
/// Command-line arguments for the mosaic builder
pub struct Cli {
    /// Source image to mosaic
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Directory holding candidate sub-images
    #[arg(value_name = "TILES")]
    pub tiles: PathBuf,

    /// Output file (defaults to <source>_mosaic.<ext> next to the source)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Tile-selection strategy
    #[arg(short, long, value_enum)]
    pub algorithm: AlgorithmArg,

    /// Number of grid cells per side
    #[arg(short, long, default_value_t = DEFAULT_GRID_NUM)]
    pub grid_num: u32,

    /// Tint intensity in [0, 1]
    #[arg(short, long, default_value_t = DEFAULT_INTENSITY)]
    pub intensity: f32,

    /// Output canvas width in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_OUTPUT_WIDTH)]
    pub width: u32,

    /// Encoded output format
    #[arg(short, long, value_enum, default_value = "png")]
    pub format: FormatArg,

    /// Alpha mean below which a cell stays empty
    #[arg(long, default_value_t = DEFAULT_ALPHA_SKIP)]
    pub alpha_skip: u8,

    /// Pending tile placements merged per canvas flush
    #[arg(long, default_value_t = DEFAULT_FLUSH_THRESHOLD)]
    pub flush_threshold: usize,

    /// Random seed for reproducible tile draws
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Session configuration assembled from the parsed arguments
    pub const fn config(&self) -> MosaicConfig {
        let mut config = MosaicConfig::new(self.algorithm.algorithm());
        config.grid_num = self.grid_num;
        config.intensity = self.intensity;
        config.output_width = self.width;
        config.output_format = self.format.format();
        config.alpha_skip = self.alpha_skip;
        config.flush_threshold = self.flush_threshold;
        config.seed = self.seed;
        config
    }
}

/// Collect the sub-image files of a directory, sorted by path
///
/// Only files with a recognized raster extension are included.
///
/// # Errors
///
/// Returns an error when the path is not a directory, the directory
/// cannot be read, or no usable sub-image files are found.
pub fn collect_tile_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(invalid_parameter(
            "tiles",
            &dir.display(),
            &"must be a directory of sub-images",
        ));
    }

    let entries = std::fs::read_dir(dir).map_err(|e| MosaicError::FileSystem {
        path: dir.to_path_buf(),
        operation: "read directory",
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| MosaicError::FileSystem {
                path: dir.to_path_buf(),
                operation: "read directory entry",
                source: e,
            })?
            .path();
        let recognized = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                let lower = ext.to_ascii_lowercase();
                SUPPORTED_EXTENSIONS.contains(&lower.as_str())
            });
        if recognized && path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    if files.is_empty() {
        return Err(MosaicError::NoSubImages);
    }
    Ok(files)
}

/// Runs one mosaic build from parsed command-line arguments
pub struct MosaicRunner {
    cli: Cli,
}

impl MosaicRunner {
    /// Create a runner over parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Build the mosaic and write the encoded buffer to the output path
    ///
    /// # Errors
    ///
    /// Returns an error when tile collection, the build itself, or writing
    /// the output file fails.
    pub fn process(&self) -> Result<()> {
        let tile_paths = collect_tile_files(&self.cli.tiles)?;

        let mut session = MosaicSession::new(self.cli.config());
        if self.cli.should_show_progress() {
            let bar = RenderProgress::new(session.expected_iterations());
            session.observe(Box::new(bar));
        }

        let sub_images = tile_paths.into_iter().map(ImageInput::Path).collect();
        let buffer = session.build(ImageInput::Path(self.cli.source.clone()), sub_images)?;

        let output_path = self.output_path();
        std::fs::write(&output_path, buffer).map_err(|e| MosaicError::FileSystem {
            path: output_path.clone(),
            operation: "write output",
            source: e,
        })?;
        Ok(())
    }

    /// The explicit output path, or one derived from the source filename
    pub fn output_path(&self) -> PathBuf {
        self.cli.output.clone().unwrap_or_else(|| {
            let stem = self.cli.source.file_stem().unwrap_or_default();
            let name = format!(
                "{}{}.{}",
                stem.to_string_lossy(),
                OUTPUT_SUFFIX,
                self.cli.format.format().extension()
            );
            self.cli
                .source
                .parent()
                .map_or_else(|| PathBuf::from(&name), |parent| parent.join(&name))
        })
    }
}
