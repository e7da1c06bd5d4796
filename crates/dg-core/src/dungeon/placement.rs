//! Room placement
//!
//! The start room is centered on the grid and always accepted. Every other
//! room is found by rejection sampling: draw a size and a position, keep the
//! candidate if it clears every placed room by [`ROOM_BUFFER`] tiles, and
//! give up on the slot after `max_placement_attempts` draws.

use tracing::debug;

use super::{DungeonState, Grid, Room, TileType};
use crate::config::GeneratorConfig;
use crate::error::DungeonError;
use crate::rng::DungeonRng;
use crate::ROOM_BUFFER;

/// Draw width and height independently from the configured size range
fn sample_room_size(config: &GeneratorConfig, rng: &mut DungeonRng) -> (usize, usize) {
    let width = rng.range(config.room_min_size, config.room_max_size);
    let height = rng.range(config.room_min_size, config.room_max_size);
    (width, height)
}

/// Stamp a room onto the grid: wall ring, floor inside
///
/// Placement only checks other rooms, so an earlier corridor may run through
/// the new rectangle. Passable tiles on the ring are kept open so that
/// corridor stays connected.
pub fn carve_room(grid: &mut Grid, room: &Room) {
    for x in room.x..room.right() {
        for y in room.y..room.bottom() {
            if !room.is_border(x, y) {
                grid.set(x, y, TileType::Floor);
            } else if !grid.typ(x, y).is_some_and(|typ| typ.is_passable()) {
                grid.set(x, y, TileType::Wall);
            }
        }
    }
}

/// Check a candidate against the grid margin and every placed room
pub fn can_place_room(state: &DungeonState, room: &Room) -> bool {
    let grid = state.grid();
    if !room.fits_grid(grid.width(), grid.height()) {
        return false;
    }
    !state
        .rooms()
        .iter()
        .any(|placed| room.overlaps(placed, ROOM_BUFFER))
}

/// Place the mandatory start room at the grid center
///
/// Its center becomes the StairsUp tile and the entrance marker.
pub fn place_start_room(
    state: &mut DungeonState,
    config: &GeneratorConfig,
    rng: &mut DungeonRng,
) -> Result<Room, DungeonError> {
    let (width, height) = sample_room_size(config, rng);
    let x = state.grid().width() / 2 - width / 2;
    let y = state.grid().height() / 2 - height / 2;
    let room = Room::new(x, y, width, height);

    carve_room(state.grid_mut(), &room);
    state.push_room(room)?;

    let entrance = room.center();
    state.grid_mut().set(entrance.x, entrance.y, TileType::StairsUp);
    state.set_entrance(entrance);

    debug!(x, y, width, height, %entrance, "placed start room");
    Ok(room)
}

/// Try to place one more room
///
/// Returns the 1-based attempt that was accepted, or `Ok(None)` when all
/// `max_placement_attempts` draws were rejected; the slot is then skipped
/// and the grid is left untouched.
pub fn try_place_room(
    state: &mut DungeonState,
    config: &GeneratorConfig,
    rng: &mut DungeonRng,
) -> Result<Option<u32>, DungeonError> {
    let grid_width = state.grid().width();
    let grid_height = state.grid().height();

    for attempt in 1..=config.max_placement_attempts {
        let (width, height) = sample_room_size(config, rng);
        // Leave the wall border plus one tile of clearance to the edge.
        let x = rng.range(1, grid_width.saturating_sub(width + 2));
        let y = rng.range(1, grid_height.saturating_sub(height + 2));
        let room = Room::new(x, y, width, height);

        if !can_place_room(state, &room) {
            continue;
        }

        carve_room(state.grid_mut(), &room);
        let index = state.push_room(room)?;
        debug!(index, attempt, x, y, width, height, "placed room");
        return Ok(Some(attempt));
    }

    debug!(
        attempts = config.max_placement_attempts,
        placed = state.room_count(),
        "room slot skipped, no free position"
    );
    Ok(None)
}
