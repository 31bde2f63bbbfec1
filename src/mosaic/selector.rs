//! Tile selection strategies
//!
//! Two interchangeable strategies choose a catalog entry per grid cell:
//! uniformly at random without repeats within an exhaustion cycle, or the
//! entry with the nearest luminance found by binary search over the sorted
//! catalog.

use crate::imaging::color::CellColor;
use crate::mosaic::catalog::Catalog;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// How sub-images are dispersed over the mosaic grid
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Algorithm {
    /// Uniform random draws without repeats until the catalog is exhausted
    Random,
    /// Nearest luminance via binary search over the sorted catalog
    ClosestColor,
}

/// Chooses a catalog entry approximating each cell's target color
///
/// Owned by exactly one build session; the random strategy mutates its
/// selection cache and RNG on every draw, the closest-color strategy is a
/// pure lookup.
pub struct TileSelector {
    algorithm: Algorithm,
    /// Catalog indices not yet drawn in the current exhaustion cycle
    cache: Vec<usize>,
    rng: StdRng,
}

impl TileSelector {
    /// Create a selector for one build session
    pub fn new(algorithm: Algorithm, seed: u64) -> Self {
        Self {
            algorithm,
            cache: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Choose a catalog index for the target cell color
    ///
    /// Returns `None` only when the catalog is empty, which a validated
    /// build never presents.
    pub fn select(&mut self, catalog: &Catalog, target: CellColor) -> Option<usize> {
        if catalog.is_empty() {
            return None;
        }
        match self.algorithm {
            Algorithm::Random => Some(self.draw_without_repeat(catalog.len())),
            Algorithm::ClosestColor => Some(closest_by_luminance(catalog, target.luminance())),
        }
    }

    // Within one exhaustion cycle of catalog_len draws no index repeats;
    // the cache refills from the full catalog once drained.
    fn draw_without_repeat(&mut self, catalog_len: usize) -> usize {
        if self.cache.is_empty() {
            self.cache.extend(0..catalog_len);
        }
        let position = self.rng.random_range(0..self.cache.len());
        self.cache.swap_remove(position)
    }
}

/// Index of the entry whose luminance is nearest to `target`
///
/// Brackets the target between two adjacent entries of the sorted catalog,
/// then breaks the tie linearly by absolute luminance difference (the
/// lower index wins on an exact tie). A single-entry catalog returns that
/// entry unconditionally.
pub fn closest_by_luminance(catalog: &Catalog, target: f64) -> usize {
    let entries = catalog.entries();
    let mut low = 0usize;
    let mut high = entries.len().saturating_sub(1);

    while high - low > 1 {
        let mid = usize::midpoint(low, high);
        let Some(mid_luma) = entries.get(mid).map(|entry| entry.luma) else {
            break;
        };
        if (mid_luma - target).abs() < f64::EPSILON {
            return mid;
        }
        if target < mid_luma {
            high = mid;
        } else {
            low = mid;
        }
    }

    let low_diff = entries
        .get(low)
        .map_or(f64::INFINITY, |entry| (entry.luma - target).abs());
    let high_diff = entries
        .get(high)
        .map_or(f64::INFINITY, |entry| (entry.luma - target).abs());
    if low_diff <= high_diff { low } else { high }
}
