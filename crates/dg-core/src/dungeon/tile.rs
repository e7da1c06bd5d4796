//! Map tile types

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::{S_DOOR, S_EMPTY, S_FLOOR, S_STAIRS_DOWN, S_STAIRS_UP, S_WALL};

/// Tile/terrain type
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum TileType {
    #[default]
    Empty = 0,
    Wall = 1,
    Floor = 2,
    Door = 3,
    StairsDown = 4,
    StairsUp = 5,
}

impl TileType {
    /// Check if a walker can stand here
    pub const fn is_passable(&self) -> bool {
        matches!(
            self,
            TileType::Floor | TileType::Door | TileType::StairsDown | TileType::StairsUp
        )
    }

    /// Get the display character for this tile type
    pub const fn symbol(&self) -> char {
        match self {
            TileType::Empty => S_EMPTY,
            TileType::Wall => S_WALL,
            TileType::Floor => S_FLOOR,
            TileType::Door => S_DOOR,
            TileType::StairsDown => S_STAIRS_DOWN,
            TileType::StairsUp => S_STAIRS_UP,
        }
    }
}

/// A single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Terrain type
    pub typ: TileType,

    /// Reserved for fog of war; every tile is explored for now
    pub explored: bool,
}

impl Tile {
    /// Create a new empty cell
    pub const fn empty() -> Self {
        Self {
            typ: TileType::Empty,
            explored: true,
        }
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::empty()
    }
}
