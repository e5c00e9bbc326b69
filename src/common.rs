//! Common types for FiveTwelve: board errors.

/// Errors returned by Board and game operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// No empty cell is left to place a tile in.
    Full,
    /// Position lies outside the grid.
    OutOfBounds { x: i32, y: i32 },
    /// Grid rows have differing lengths.
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Tile values must be positive.
    InvalidValue(u32),
    /// Spawn source picked a cell index past the free cells.
    SpawnOutOfRange { index: usize, candidates: usize },
    /// Move requested after the game already ended.
    GameOver,
    /// Character in a move list is not one of `u`, `d`, `l`, `r`.
    UnknownMove(char),
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::Full => write!(f, "No empty cell left on the board"),
            BoardError::OutOfBounds { x, y } => {
                write!(f, "Position ({}, {}) is outside the board", x, y)
            }
            BoardError::RaggedGrid {
                row,
                expected,
                found,
            } => write!(
                f,
                "Grid row {} has {} cells, expected {}",
                row, found, expected
            ),
            BoardError::InvalidValue(v) => write!(f, "Invalid tile value {}", v),
            BoardError::SpawnOutOfRange { index, candidates } => write!(
                f,
                "Spawn index {} out of range for {} free cells",
                index, candidates
            ),
            BoardError::GameOver => write!(f, "The game is already over"),
            BoardError::UnknownMove(c) => write!(f, "Unknown move '{}'", c),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
