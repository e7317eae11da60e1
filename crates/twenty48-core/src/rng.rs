//! Random source for tile spawning.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engine::Tile;

/// Randomness for spawn placement and spawn values.
///
/// Wraps a seedable PRNG so a whole session can be reproduced from one
/// seed. Seed once at process start; restarts keep drawing from the same
/// stream.
///
/// ```
/// use twenty48_core::rng::TileRng;
///
/// let mut rng = TileRng::seed_from_u64(7);
/// assert!(rng.uniform_index(16) < 16);
/// let tile = rng.biased_value(90, 2, 4);
/// assert!(tile == 2 || tile == 4);
/// ```
pub struct TileRng {
    inner: StdRng,
}

impl TileRng {
    /// Seed from OS entropy.
    pub fn from_entropy() -> Self {
        TileRng {
            inner: StdRng::from_entropy(),
        }
    }

    /// Seed deterministically, for reproducible runs and tests.
    pub fn seed_from_u64(seed: u64) -> Self {
        TileRng {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform index in `[0, bound)`.
    ///
    /// `bound` must be positive; callers gate on a non-empty cell list.
    pub fn uniform_index(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "uniform_index requires a positive bound");
        self.inner.gen_range(0..bound)
    }

    /// Either `low` or `high`: `low` with probability `percent_low` / 100.
    /// Rates above 100 are clamped to 100.
    pub fn biased_value(&mut self, percent_low: u8, low: Tile, high: Tile) -> Tile {
        let rate = u32::from(percent_low.min(100));
        if self.inner.gen_range(0..100u32) < rate {
            low
        } else {
            high
        }
    }
}
