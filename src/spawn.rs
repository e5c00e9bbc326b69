//! Source of randomness for tile spawning.

use rand::Rng;

use crate::config::FOUR_PROBABILITY;

/// Decisions the board needs when it places a tile.
///
/// Every [`rand::Rng`] is a spawn source, so a seeded `SmallRng` gives
/// reproducible games. Tests can implement the trait directly to script
/// exact spawn sequences.
pub trait SpawnSource {
    /// Uniform index in `0..candidates`. `candidates` is never zero.
    fn pick_cell(&mut self, candidates: usize) -> usize;

    /// Whether the next spawned tile is a 4 rather than a 2.
    fn spawn_four(&mut self) -> bool;

    /// Value for a tile placed without an explicit one.
    fn spawn_value(&mut self) -> u32 {
        if self.spawn_four() {
            4
        } else {
            2
        }
    }
}

impl<R: Rng + ?Sized> SpawnSource for R {
    fn pick_cell(&mut self, candidates: usize) -> usize {
        self.random_range(0..candidates)
    }

    fn spawn_four(&mut self) -> bool {
        self.random_bool(FOUR_PROBABILITY)
    }
}
