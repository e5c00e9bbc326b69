/// Side length of the default square board.
pub const GRID_SIZE: usize = 4;
/// Chance that a freshly spawned tile is a 4 instead of a 2.
pub const FOUR_PROBABILITY: f64 = 0.1;
/// Tile value that wins the game.
pub const TARGET_TILE: u32 = 512;
/// Tiles placed before the first move.
pub const INITIAL_TILES: usize = 2;

/// Settings for a single game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    /// Reaching a tile of at least this value wins.
    pub target: u32,
    pub initial_tiles: usize,
    /// Fixed RNG seed for reproducible games; `None` seeds from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: GRID_SIZE,
            cols: GRID_SIZE,
            target: TARGET_TILE,
            initial_tiles: INITIAL_TILES,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
