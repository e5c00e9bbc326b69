use alloc::vec::Vec;

use rand::rngs::SmallRng;
use rand::Rng;

use crate::{board::Board, common::BoardError, position::Direction};

/// Interface implemented by the different move drivers.
pub trait Player {
    /// Choose the next move, or `None` to stop playing.
    fn select_move(&mut self, rng: &mut SmallRng, board: &Board) -> Option<Direction>;
}

/// Replays a fixed list of moves, then stops.
#[derive(Debug, Clone)]
pub struct ScriptedPlayer {
    moves: Vec<Direction>,
    next: usize,
}

impl ScriptedPlayer {
    pub fn new(moves: Vec<Direction>) -> Self {
        Self { moves, next: 0 }
    }

    /// Build from a compact move list like `"uldr"`.
    pub fn parse(moves: &str) -> Result<Self, BoardError> {
        Ok(Self::new(Direction::parse_moves(moves)?))
    }

    pub fn remaining(&self) -> usize {
        self.moves.len() - self.next
    }
}

impl Player for ScriptedPlayer {
    fn select_move(&mut self, _rng: &mut SmallRng, _board: &Board) -> Option<Direction> {
        let dir = self.moves.get(self.next).copied()?;
        self.next += 1;
        Some(dir)
    }
}

/// Picks one of the four directions uniformly at random, forever.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for RandomPlayer {
    fn select_move(&mut self, rng: &mut SmallRng, _board: &Board) -> Option<Direction> {
        Some(Direction::ALL[rng.random_range(0..Direction::ALL.len())])
    }
}
