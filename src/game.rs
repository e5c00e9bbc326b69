use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::{
    board::{Board, Grid},
    common::BoardError,
    config::GameConfig,
    player::Player,
    position::{Direction, Position},
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// What a single call to [`GameEngine::play`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Whether any tile slid or merged.
    pub moved: bool,
    /// Where the follow-up tile landed, if there was room for one.
    pub spawned: Option<Position>,
    pub score: u64,
}

/// Final or intermediate picture of a game, as printed by the binaries.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSummary {
    pub status: GameStatus,
    pub score: u64,
    pub moves: usize,
    pub max_tile: u32,
    pub grid: Grid,
}

/// One game session: the board, its random source and the win/loss state.
pub struct GameEngine {
    board: Board,
    rng: SmallRng,
    target: u32,
    status: GameStatus,
    moves: usize,
}

impl GameEngine {
    /// Start a game: empty board plus `config.initial_tiles` random tiles.
    pub fn new(config: GameConfig) -> Result<Self, BoardError> {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => unseeded_rng(),
        };
        Self::with_rng(config, rng)
    }

    /// Start a game drawing from an existing generator.
    pub fn with_rng(config: GameConfig, rng: SmallRng) -> Result<Self, BoardError> {
        let mut engine = Self {
            board: Board::new(config.rows, config.cols),
            rng,
            target: config.target,
            status: GameStatus::InProgress,
            moves: 0,
        };
        for _ in 0..config.initial_tiles {
            engine.board.place_tile(&mut engine.rng, None)?;
        }
        engine.refresh_status();
        Ok(engine)
    }

    /// Resume from a prepared board, e.g. one built with [`Board::from_grid`].
    pub fn from_board(board: Board, target: u32, rng: SmallRng) -> Self {
        let mut engine = Self {
            board,
            rng,
            target,
            status: GameStatus::InProgress,
            moves: 0,
        };
        engine.refresh_status();
        engine
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access, e.g. for subscribing listeners.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of moves played so far.
    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn score(&self) -> u64 {
        self.board.score()
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    /// Apply one move, then drop a new tile on a free cell if there is one.
    pub fn play(&mut self, dir: Direction) -> Result<MoveOutcome, BoardError> {
        if self.status != GameStatus::InProgress {
            return Err(BoardError::GameOver);
        }
        let moved = self.board.shift(dir);
        self.moves += 1;
        let spawned = if self.board.has_empty() {
            Some(self.board.place_tile(&mut self.rng, None)?)
        } else {
            None
        };
        log::debug!(
            "move {} {}: moved={} spawned={:?} score={}",
            self.moves,
            dir,
            moved,
            spawned,
            self.board.score()
        );
        self.refresh_status();
        Ok(MoveOutcome {
            moved,
            spawned,
            score: self.board.score(),
        })
    }

    /// Let `player` drive until the game ends, the player stops, or
    /// `max_moves` moves have been played.
    pub fn run(
        &mut self,
        player: &mut dyn Player,
        rng: &mut SmallRng,
        max_moves: Option<usize>,
    ) -> Result<GameStatus, BoardError> {
        while self.status == GameStatus::InProgress {
            if max_moves.is_some_and(|max| self.moves >= max) {
                break;
            }
            let Some(dir) = player.select_move(rng, &self.board) else {
                break;
            };
            self.play(dir)?;
        }
        Ok(self.status)
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            status: self.status,
            score: self.board.score(),
            moves: self.moves,
            max_tile: self.board.max_tile(),
            grid: self.board.to_grid(),
        }
    }

    fn refresh_status(&mut self) {
        let status = if self.board.max_tile() >= self.target {
            GameStatus::Won
        } else if !self.board.can_move() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };
        if status != self.status {
            log::info!(
                "game {:?} after {} moves with score {}",
                status,
                self.moves,
                self.board.score()
            );
        }
        self.status = status;
    }
}

#[cfg(feature = "std")]
fn unseeded_rng() -> SmallRng {
    let mut seed_rng = rand::rng();
    SmallRng::from_rng(&mut seed_rng)
}

#[cfg(not(feature = "std"))]
fn unseeded_rng() -> SmallRng {
    SmallRng::seed_from_u64(0)
}
