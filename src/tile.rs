//! Numbered tiles and their two mutations.

use core::fmt;

use crate::common::BoardError;
use crate::event::{EventKind, Notifier, TileEvent};
use crate::position::Position;

/// Identity of a tile, unique within the board that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TileId(pub u64);

/// A slidy numbered thing.
///
/// Tiles deliberately do not implement `PartialEq`: two tiles are the same
/// tile only if their [`TileId`]s match, and merge eligibility is the
/// separate [`Tile::can_merge`] check.
#[derive(Debug, Clone)]
pub struct Tile {
    id: TileId,
    position: Position,
    value: u32,
}

impl Tile {
    pub fn new(id: TileId, position: Position, value: u32) -> Self {
        Self {
            id,
            position,
            value,
        }
    }

    pub fn id(&self) -> TileId {
        self.id
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// True when both tiles carry the same number, wherever they are.
    pub fn same_value(&self, other: &Tile) -> bool {
        self.value == other.value
    }

    /// Equal values whose sum still fits in a `u32`.
    pub fn can_merge(&self, other: &Tile) -> bool {
        self.same_value(other) && self.value.checked_add(other.value).is_some()
    }

    /// Move to `to` and announce it. Bounds are the board's business.
    pub fn relocate(&mut self, to: Position, notifier: &mut Notifier) {
        self.position = to;
        notifier.emit(TileEvent::new(EventKind::Updated, self));
    }

    /// Absorb `other`, which is consumed. Callers check [`Tile::can_merge`]
    /// first; a sum past `u32::MAX` fails with
    /// [`BoardError::InvalidValue`] and emits nothing.
    pub fn merge_into(&mut self, other: Tile, notifier: &mut Notifier) -> Result<(), BoardError> {
        self.value = self
            .value
            .checked_add(other.value)
            .ok_or(BoardError::InvalidValue(other.value))?;
        notifier.emit(TileEvent::new(EventKind::Updated, self));
        notifier.emit(TileEvent::new(EventKind::Removed, &other));
        Ok(())
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
