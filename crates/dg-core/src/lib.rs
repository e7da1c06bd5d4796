//! dg-core: room-and-corridor dungeon generator
//!
//! This crate contains the generation algorithm with no terminal I/O.
//! A run resets the grid, places a start room at the grid center, places
//! further rooms by bounded rejection sampling, links each new room to an
//! earlier one with an L-shaped corridor and finally marks the room farthest
//! from the entrance as the exit.
//!
//! The renderer consumes the finished [`dungeon::DungeonState`] read-only.

pub mod config;
pub mod dungeon;
pub mod error;

mod consts;
mod rng;

pub use config::GeneratorConfig;
pub use consts::*;
pub use dungeon::{DungeonGenerator, DungeonState, GenerationReport};
pub use error::{ConfigError, DungeonError};
pub use rng::DungeonRng;
