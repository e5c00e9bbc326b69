#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
pub mod event;
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
mod position;
pub mod prelude;
mod spawn;
mod tile;

pub use board::*;
pub use common::*;
pub use config::*;
pub use event::{EventKind, EventLog, Listener, ListenerId, LogListener, Notifier, TileEvent};
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from_env, parse_level, LOG_ENV};
pub use player::*;
pub use position::*;
pub use spawn::*;
pub use tile::*;
