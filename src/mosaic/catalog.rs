//! Sub-image catalog construction and luminance ordering

use crate::imaging::color::{CellColor, channel_means};
use crate::imaging::ops::{decode_oriented, resize_exact_rgba};
use crate::io::error::{MosaicError, Result};
use crate::mosaic::geometry::GridGeometry;
use crate::mosaic::selector::Algorithm;
use image::RgbaImage;

/// One normalized candidate sub-image with its color statistics
///
/// Immutable after catalog construction; selection clones the image when
/// a tile is placed.
pub struct CatalogEntry {
    /// Sub-image resized to exactly one cell
    pub image: RgbaImage,
    /// Per-channel means of the resized sub-image
    pub stats: CellColor,
    /// Luminance derived from the channel means, the sort and match key
    pub luma: f64,
}

/// The normalized, statistic-annotated collection of candidate sub-images
///
/// For the closest-color strategy the entries are sorted ascending by
/// luminance; ties keep their original input order.
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Normalize every sub-image to cell size and annotate it with stats
    ///
    /// Entries are produced in input order; a stable luminance sort is
    /// applied afterwards when the closest-color strategy will consult
    /// the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::NoSubImages`] for an empty input collection;
    /// decode failures propagate unchanged.
    pub fn build(
        byte_buffers: &[Vec<u8>],
        geometry: &GridGeometry,
        algorithm: Algorithm,
    ) -> Result<Self> {
        if byte_buffers.is_empty() {
            return Err(MosaicError::NoSubImages);
        }

        let mut entries = Vec::with_capacity(byte_buffers.len());
        for bytes in byte_buffers {
            let decoded = decode_oriented(bytes)?;
            let image = resize_exact_rgba(&decoded, geometry.cell_width, geometry.cell_height);
            let stats = channel_means(&image);
            let luma = stats.luminance();
            entries.push(CatalogEntry { image, stats, luma });
        }

        Self::from_entries(entries, algorithm)
    }

    /// Assemble a catalog from prepared entries, sorting when required
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::NoSubImages`] when `entries` is empty.
    pub fn from_entries(entries: Vec<CatalogEntry>, algorithm: Algorithm) -> Result<Self> {
        if entries.is_empty() {
            return Err(MosaicError::NoSubImages);
        }
        let mut catalog = Self { entries };
        if algorithm == Algorithm::ClosestColor {
            // Stable: equal lumas keep input order, so the binary search
            // tie-break is well defined over continuous channel means.
            catalog.entries.sort_by(|a, b| a.luma.total_cmp(&b.luma));
        }
        Ok(catalog)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in catalog order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Entry at `index`, if present
    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }
}
