//! Commonly used types and utilities for ease of import.

pub use crate::{
    Board, BoardError, Direction, EventKind, EventLog, GameConfig, GameEngine, GameStatus,
    Listener, Player, Position, SpawnSource, Tile, TileEvent,
};

#[cfg(feature = "std")]
pub use crate::init_logging;
