//! Corridor carving
//!
//! Rooms are joined center to center by one horizontal and one vertical run.
//! Carving follows a three-state rule per tile:
//! - on the corridor path, Empty and Wall become Floor (or Door, see
//!   [`BreachPolicy`]); Floor, Door and stairs are never touched
//! - beside the path, Empty becomes Wall; anything else is left alone
//!
//! The side rule gives corridors a visible border without clobbering the
//! geometry of rooms they pass.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::debug;

use super::{DungeonState, Grid, Room, TileType};
use crate::rng::DungeonRng;

/// What a corridor turns a crossed wall into
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
    EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BreachPolicy {
    /// Every crossed wall becomes floor
    #[default]
    Open,
    /// Crossed room walls become doors, corridor walls become floor
    Doors,
}

/// Which run is dug first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum CorridorOrder {
    /// Horizontal along the first room's row, then vertical along the second room's column
    HorizontalFirst,
    /// Vertical along the first room's column, then horizontal along the second room's row
    VerticalFirst,
}

impl CorridorOrder {
    /// Pick an order with an unbiased coin flip
    pub fn random(rng: &mut DungeonRng) -> Self {
        if rng.coin_flip() {
            CorridorOrder::HorizontalFirst
        } else {
            CorridorOrder::VerticalFirst
        }
    }
}

/// Carve one tile of the corridor path
fn carve_path_tile(grid: &mut Grid, rooms: &[Room], x: usize, y: usize, policy: BreachPolicy) {
    let Some(current) = grid.typ(x, y) else {
        return;
    };
    let carved = match current {
        TileType::Empty => TileType::Floor,
        TileType::Wall => match policy {
            BreachPolicy::Doors if rooms.iter().any(|room| room.is_border(x, y)) => TileType::Door,
            _ => TileType::Floor,
        },
        // Floor, doors and stairs are already open.
        _ => return,
    };
    grid.set(x, y, carved);
}

/// Raise a wall beside the path, only over empty tiles
fn infer_wall(grid: &mut Grid, x: usize, y: usize) {
    if grid.typ(x, y) == Some(TileType::Empty) {
        grid.set(x, y, TileType::Wall);
    }
}

/// Dig along row `y` from `x1` to `x2` inclusive, in either order
pub fn horizontal_tunnel(
    state: &mut DungeonState,
    x1: usize,
    x2: usize,
    y: usize,
    policy: BreachPolicy,
) {
    let (grid, rooms) = state.grid_and_rooms();
    for x in x1.min(x2)..=x1.max(x2) {
        carve_path_tile(grid, rooms, x, y, policy);
        if let Some(above) = y.checked_sub(1) {
            infer_wall(grid, x, above);
        }
        infer_wall(grid, x, y + 1);
    }
}

/// Dig along column `x` from `y1` to `y2` inclusive, in either order
pub fn vertical_tunnel(
    state: &mut DungeonState,
    y1: usize,
    y2: usize,
    x: usize,
    policy: BreachPolicy,
) {
    let (grid, rooms) = state.grid_and_rooms();
    for y in y1.min(y2)..=y1.max(y2) {
        carve_path_tile(grid, rooms, x, y, policy);
        if let Some(left) = x.checked_sub(1) {
            infer_wall(grid, left, y);
        }
        infer_wall(grid, x + 1, y);
    }
}

/// Join the centers of rooms `a` and `b` with an L-shaped corridor
///
/// Out-of-range indices are ignored.
pub fn connect_rooms(
    state: &mut DungeonState,
    a: usize,
    b: usize,
    policy: BreachPolicy,
    rng: &mut DungeonRng,
) -> Option<CorridorOrder> {
    let (Some(from), Some(to)) = (state.rooms().get(a).copied(), state.rooms().get(b).copied())
    else {
        return None;
    };
    let order = CorridorOrder::random(rng);
    dig_corridor(state, &from, &to, order, policy);
    debug!(from = a, to = b, %order, "connected rooms");
    Some(order)
}

/// Dig the two runs between two room centers in the given order
pub fn dig_corridor(
    state: &mut DungeonState,
    from: &Room,
    to: &Room,
    order: CorridorOrder,
    policy: BreachPolicy,
) {
    match order {
        CorridorOrder::HorizontalFirst => {
            horizontal_tunnel(state, from.center_x, to.center_x, from.center_y, policy);
            vertical_tunnel(state, from.center_y, to.center_y, to.center_x, policy);
        }
        CorridorOrder::VerticalFirst => {
            vertical_tunnel(state, from.center_y, to.center_y, from.center_x, policy);
            horizontal_tunnel(state, from.center_x, to.center_x, to.center_y, policy);
        }
    }
}
