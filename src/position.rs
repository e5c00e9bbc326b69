//! Grid coordinates and movement directions.
//!
//! A [`Position`] doubles as an absolute cell coordinate (distance from the
//! top-left corner) and as a relative offset, so stepping a tile one cell is
//! just `pos + dir.offset()`.

use core::fmt;
use core::ops::Add;
use core::str::FromStr;

use alloc::vec::Vec;

use crate::common::BoardError;

/// Row (`x`) and column (`y`) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, other: Position) -> Position {
        Position::new(self.x + other.x, self.y + other.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four moves a player can make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Single-cell step taken by a tile sliding this way.
    pub const fn offset(self) -> Position {
        match self {
            Direction::Up => Position::new(-1, 0),
            Direction::Down => Position::new(1, 0),
            Direction::Left => Position::new(0, -1),
            Direction::Right => Position::new(0, 1),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Parse a compact move list such as `"uurdl"`. Whitespace and commas are
    /// ignored.
    pub fn parse_moves(moves: &str) -> Result<Vec<Direction>, BoardError> {
        moves
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(Direction::try_from)
            .collect()
    }
}

impl TryFrom<char> for Direction {
    type Error = BoardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'u' => Ok(Direction::Up),
            'd' => Ok(Direction::Down),
            'l' => Ok(Direction::Left),
            'r' => Ok(Direction::Right),
            _ => Err(BoardError::UnknownMove(c)),
        }
    }
}

impl FromStr for Direction {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Direction::ALL
            .into_iter()
            .find(|dir| dir.name().eq_ignore_ascii_case(s))
            .map(Ok)
            .unwrap_or_else(|| {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Direction::try_from(c),
                    (first, _) => Err(BoardError::UnknownMove(first.unwrap_or(' '))),
                }
            })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
