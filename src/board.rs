//! The game grid: sliding, merging, spawning and scoring.
//!
//! Cells are stored row-major in a flat `Vec<Option<Tile>>`. A tile only ever
//! changes cell through `move_tile` or `merge_tile`, which take it out of its
//! source cell, update its cached position and store it in the destination,
//! so a tile's position always names the cell that holds it.

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;

use crate::common::BoardError;
use crate::config::GRID_SIZE;
use crate::event::{EventKind, Listener, ListenerId, Notifier, TileEvent};
use crate::position::{Direction, Position};
use crate::spawn::SpawnSource;
use crate::tile::{Tile, TileId};

/// Plain integer picture of a board, `0` meaning empty.
pub type Grid = Vec<Vec<u32>>;

/// What a sliding tile does with the next cell along its path.
enum Step {
    Slide,
    Merge,
    Blocked,
}

pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Tile>>,
    // Cells whose tile already absorbed another during the current sweep.
    merged: Vec<bool>,
    notifier: Notifier,
    next_id: u64,
}

impl Board {
    /// Create an empty `rows`×`cols` board.
    pub fn new(rows: usize, cols: usize) -> Self {
        let size = rows * cols;
        Board {
            rows,
            cols,
            cells: (0..size).map(|_| None).collect(),
            merged: vec![false; size],
            notifier: Notifier::new(),
            next_id: 0,
        }
    }

    /// Build a board from an integer grid; `0` cells stay empty.
    pub fn from_grid<R: AsRef<[u32]>>(values: &[R]) -> Result<Self, BoardError> {
        let mut board = Board::new(0, 0);
        board.load_grid(values)?;
        Ok(board)
    }

    /// Replace the whole board state, dimensions included, with `values`.
    ///
    /// Listeners stay subscribed but are not told about the new tiles. On a
    /// ragged grid the board is left untouched.
    pub fn load_grid<R: AsRef<[u32]>>(&mut self, values: &[R]) -> Result<(), BoardError> {
        let cols = values.first().map_or(0, |row| row.as_ref().len());
        for (row, line) in values.iter().enumerate() {
            let found = line.as_ref().len();
            if found != cols {
                return Err(BoardError::RaggedGrid {
                    row,
                    expected: cols,
                    found,
                });
            }
        }

        let mut cells = Vec::with_capacity(values.len() * cols);
        for (x, line) in values.iter().enumerate() {
            for (y, &value) in line.as_ref().iter().enumerate() {
                if value == 0 {
                    cells.push(None);
                } else {
                    let id = self.fresh_id();
                    cells.push(Some(Tile::new(id, cell(x, y), value)));
                }
            }
        }
        self.rows = values.len();
        self.cols = cols;
        self.merged = vec![false; cells.len()];
        self.cells = cells;
        Ok(())
    }

    /// Integer picture of the board, `0` for empty cells.
    pub fn to_grid(&self) -> Grid {
        (0..self.rows)
            .map(|row| {
                self.cells[row * self.cols..(row + 1) * self.cols]
                    .iter()
                    .map(|slot| slot.as_ref().map_or(0, Tile::value))
                    .collect()
            })
            .collect()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Register a listener for tile events.
    pub fn subscribe<L: Listener + 'static>(&mut self, listener: L) -> ListenerId {
        self.notifier.subscribe(Box::new(listener))
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Is `pos` a cell of this board?
    pub fn in_bounds(&self, pos: Position) -> bool {
        self.cell_index(pos).is_some()
    }

    /// Bounds-checked lookup.
    pub fn get(&self, pos: Position) -> Result<Option<&Tile>, BoardError> {
        self.cell_index(pos)
            .map(|i| self.cells[i].as_ref())
            .ok_or(BoardError::OutOfBounds { x: pos.x, y: pos.y })
    }

    /// All tiles currently on the board, row by row.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.cells.iter().flatten()
    }

    /// Unoccupied cells in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .map(|(i, _)| self.position_of(i))
            .collect()
    }

    pub fn has_empty(&self) -> bool {
        self.cells.iter().any(Option::is_none)
    }

    /// Place a tile on a uniformly chosen empty cell.
    ///
    /// Without an explicit `value` the tile is a 2, or a 4 when the source
    /// says so. Fails with [`BoardError::Full`] when no cell is free, leaving
    /// the board unchanged, or with [`BoardError::SpawnOutOfRange`] when the
    /// source picks an index past the free cells.
    pub fn place_tile<S: SpawnSource + ?Sized>(
        &mut self,
        source: &mut S,
        value: Option<u32>,
    ) -> Result<Position, BoardError> {
        if value == Some(0) {
            return Err(BoardError::InvalidValue(0));
        }
        let empties = self.empty_positions();
        if empties.is_empty() {
            return Err(BoardError::Full);
        }
        let index = source.pick_cell(empties.len());
        let pos = *empties.get(index).ok_or(BoardError::SpawnOutOfRange {
            index,
            candidates: empties.len(),
        })?;
        let value = value.unwrap_or_else(|| source.spawn_value());

        let id = self.fresh_id();
        let tile = Tile::new(id, pos, value);
        let event = TileEvent::new(EventKind::Created, &tile);
        if let Some(i) = self.cell_index(pos) {
            self.cells[i] = Some(tile);
        }
        self.notifier.emit(event);
        Ok(pos)
    }

    /// Sum of all tile values.
    pub fn score(&self) -> u64 {
        self.tiles().map(|tile| u64::from(tile.value())).sum()
    }

    /// Largest tile value, `0` on an empty board.
    pub fn max_tile(&self) -> u32 {
        self.tiles().map(Tile::value).max().unwrap_or(0)
    }

    /// Whether any move could still change the board.
    pub fn can_move(&self) -> bool {
        if self.has_empty() {
            return true;
        }
        self.tiles().any(|tile| {
            [Direction::Down, Direction::Right].iter().any(|dir| {
                matches!(
                    self.get(tile.position() + dir.offset()),
                    Ok(Some(neighbour)) if neighbour.can_merge(tile)
                )
            })
        })
    }

    /// Apply a full-board move. Returns whether any tile moved or merged.
    pub fn shift(&mut self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.up(),
            Direction::Down => self.down(),
            Direction::Left => self.left(),
            Direction::Right => self.right(),
        }
    }

    /// Move every tile up; the top row settles first.
    pub fn up(&mut self) -> bool {
        self.begin_sweep();
        let mut moved = false;
        for col in 0..self.cols {
            for row in 0..self.rows {
                moved |= self.slide_tile(cell(row, col), Direction::Up);
            }
        }
        moved
    }

    /// Move every tile down; the bottom row settles first.
    pub fn down(&mut self) -> bool {
        self.begin_sweep();
        let mut moved = false;
        for col in 0..self.cols {
            for row in (0..self.rows).rev() {
                moved |= self.slide_tile(cell(row, col), Direction::Down);
            }
        }
        moved
    }

    /// Move every tile left; the leftmost column settles first.
    pub fn left(&mut self) -> bool {
        self.begin_sweep();
        let mut moved = false;
        for row in 0..self.rows {
            for col in 0..self.cols {
                moved |= self.slide_tile(cell(row, col), Direction::Left);
            }
        }
        moved
    }

    /// Move every tile right; the rightmost column settles first.
    pub fn right(&mut self) -> bool {
        self.begin_sweep();
        let mut moved = false;
        for row in 0..self.rows {
            for col in (0..self.cols).rev() {
                moved |= self.slide_tile(cell(row, col), Direction::Right);
            }
        }
        moved
    }

    /// Slide the single tile at `start` (if any) until it hits the edge,
    /// an unequal tile, or merges once.
    pub fn slide(&mut self, start: Position, dir: Direction) -> bool {
        self.begin_sweep();
        self.slide_tile(start, dir)
    }

    fn slide_tile(&mut self, start: Position, dir: Direction) -> bool {
        let Some(mut from) = self.cell_index(start) else {
            return false;
        };
        if self.cells[from].is_none() {
            return false;
        }
        let mut current = start;
        loop {
            let next = current + dir.offset();
            let Some(to) = self.cell_index(next) else {
                break;
            };
            match self.step(from, to) {
                Step::Slide => {
                    self.move_tile(from, to, next);
                    from = to;
                    current = next;
                }
                Step::Merge => {
                    self.merge_tile(from, to, next);
                    current = next;
                    break;
                }
                Step::Blocked => break,
            }
        }
        current != start
    }

    fn step(&self, from: usize, to: usize) -> Step {
        match (&self.cells[from], &self.cells[to]) {
            (_, None) => Step::Slide,
            (Some(moving), Some(target)) if !self.merged[to] && moving.can_merge(target) => {
                Step::Merge
            }
            _ => Step::Blocked,
        }
    }

    fn move_tile(&mut self, from: usize, to: usize, dest: Position) {
        if let Some(mut tile) = self.cells[from].take() {
            tile.relocate(dest, &mut self.notifier);
            self.cells[to] = Some(tile);
        }
    }

    // The moving tile travels onto the destination and is absorbed there by
    // the stationary tile, which stays put and is marked for this sweep.
    fn merge_tile(&mut self, from: usize, to: usize, dest: Position) {
        if let Some(mut donor) = self.cells[from].take() {
            donor.relocate(dest, &mut self.notifier);
            if let Some(survivor) = self.cells[to].as_mut() {
                if survivor.merge_into(donor, &mut self.notifier).is_ok() {
                    self.merged[to] = true;
                }
            }
        }
    }

    fn begin_sweep(&mut self) {
        self.merged.iter_mut().for_each(|m| *m = false);
    }

    fn fresh_id(&mut self) -> TileId {
        let id = TileId(self.next_id);
        self.next_id += 1;
        id
    }

    fn cell_index(&self, pos: Position) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        let (x, y) = (pos.x as usize, pos.y as usize);
        if x >= self.rows || y >= self.cols {
            return None;
        }
        Some(x * self.cols + y)
    }

    fn position_of(&self, index: usize) -> Position {
        cell(index / self.cols, index % self.cols)
    }
}

fn cell(row: usize, col: usize) -> Position {
    Position::new(row as i32, col as i32)
}

impl Default for Board {
    fn default() -> Self {
        Board::new(GRID_SIZE, GRID_SIZE)
    }
}

/// Panics when `pos` is off the board; use [`Board::get`] to check instead.
impl Index<Position> for Board {
    type Output = Option<Tile>;

    fn index(&self, pos: Position) -> &Option<Tile> {
        match self.cell_index(pos) {
            Some(i) => &self.cells[i],
            None => panic!(
                "position {} is outside the {}x{} board",
                pos, self.rows, self.cols
            ),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.to_grid().iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                if *value == 0 {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{:>5}", value)?;
                }
            }
            if r + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("grid", &self.to_grid())
            .field("notifier", &self.notifier)
            .finish()
    }
}
