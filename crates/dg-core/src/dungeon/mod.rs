//! Dungeon model and generation phases
//!
//! A run is a strict sequence over one [`DungeonState`]:
//! reset, room placement (with a corridor per new room), exit selection.

mod grid;
mod room;
mod state;
mod tile;

pub mod analysis;
pub mod corridor;
pub mod exit;
pub mod generator;
pub mod placement;

pub use analysis::{
    Reachability, all_rooms_reachable, flood_fill, reachable_rooms, stair_counts, unreachable_rooms,
};
pub use corridor::{
    BreachPolicy, CorridorOrder, connect_rooms, dig_corridor, horizontal_tunnel, vertical_tunnel,
};
pub use exit::{ExitChoice, select_exit};
pub use generator::{DungeonGenerator, GenerationReport};
pub use grid::{Grid, Position};
pub use placement::{can_place_room, carve_room, place_start_room, try_place_room};
pub use room::Room;
pub use state::DungeonState;
pub use tile::{Tile, TileType};
