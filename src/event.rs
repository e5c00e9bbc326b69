//! Change notifications for presentation layers.
//!
//! The board owns a single [`Notifier`]. Every tile mutation pushes a
//! [`TileEvent`] through it, and the notifier hands that event to each
//! registered [`Listener`] in subscription order before the mutation
//! returns. Listeners only ever see a snapshot, never the board itself.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use crate::position::Position;
use crate::tile::{Tile, TileId};

/// What happened to a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    Created,
    Updated,
    Removed,
}

/// Snapshot of a tile at the moment something happened to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TileEvent {
    pub kind: EventKind,
    pub id: TileId,
    pub position: Position,
    pub value: u32,
}

impl TileEvent {
    pub fn new(kind: EventKind, tile: &Tile) -> Self {
        Self {
            kind,
            id: tile.id(),
            position: tile.position(),
            value: tile.value(),
        }
    }
}

/// Receiver of tile notifications.
pub trait Listener {
    fn notify(&mut self, event: &TileEvent);
}

impl<F> Listener for F
where
    F: FnMut(&TileEvent),
{
    fn notify(&mut self, event: &TileEvent) {
        self(event)
    }
}

/// Handle returned by [`Notifier::subscribe`], used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Registry of listeners with synchronous fan-out.
#[derive(Default)]
pub struct Notifier {
    listeners: Vec<(ListenerId, Box<dyn Listener>)>,
    next_id: u64,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: Box<dyn Listener>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Remove a listener. Returns `false` if the handle was unknown.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn emit(&mut self, event: TileEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener.notify(&event);
        }
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Listener that records every event into a shared buffer.
///
/// Clones share the same buffer, so a test can keep one handle and give the
/// other to the board.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<TileEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    pub fn events(&self) -> Vec<TileEvent> {
        self.events.borrow().clone()
    }

    /// Drain the buffer, returning what was recorded.
    pub fn take(&self) -> Vec<TileEvent> {
        core::mem::take(&mut *self.events.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl Listener for EventLog {
    fn notify(&mut self, event: &TileEvent) {
        self.events.borrow_mut().push(*event);
    }
}

/// Forwards events to the `log` facade at trace level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogListener;

impl Listener for LogListener {
    fn notify(&mut self, event: &TileEvent) {
        log::trace!(
            "tile {:?} {:?} at {} value {}",
            event.id,
            event.kind,
            event.position,
            event.value
        );
    }
}
