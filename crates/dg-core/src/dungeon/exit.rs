//! Exit selection
//!
//! The exit goes to the center of the room farthest (straight-line) from the
//! entrance. The start room is never a candidate unless it is the only room.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{DungeonState, Position, TileType};

/// Outcome of exit selection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExitChoice {
    /// Index of the chosen room in placement order
    pub room_index: usize,
    /// Center of the chosen room
    pub position: Position,
    /// Distance from the entrance to `position`
    pub distance: f64,
    /// Set when only the start room exists and the exit falls back to it
    pub fallback: bool,
}

/// Find the room farthest from `entrance` among rooms `1..`
///
/// Ties keep the earliest room. Returns `None` when there is no such room.
pub fn farthest_room(state: &DungeonState, entrance: Position) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (index, room) in state.rooms().iter().enumerate().skip(1) {
        let dist = entrance.distance(room.center());
        match best {
            Some((_, best_dist)) if dist <= best_dist => {}
            _ => best = Some((index, dist)),
        }
    }
    best
}

/// Mark the exit: StairsDown at the farthest room's center
///
/// With only the start room placed the exit marker reuses the entrance and
/// the StairsUp tile is kept. Returns `None` if no room has been placed.
pub fn select_exit(state: &mut DungeonState) -> Option<ExitChoice> {
    let start = *state.rooms().first()?;
    let entrance = state.entrance().unwrap_or_else(|| start.center());

    let choice = match farthest_room(state, entrance) {
        Some((room_index, distance)) => {
            let position = state.rooms()[room_index].center();
            state
                .grid_mut()
                .set(position.x, position.y, TileType::StairsDown);
            ExitChoice {
                room_index,
                position,
                distance,
                fallback: false,
            }
        }
        None => {
            warn!(%entrance, "only the start room was placed, exit reuses the entrance");
            ExitChoice {
                room_index: 0,
                position: entrance,
                distance: 0.0,
                fallback: true,
            }
        }
    };

    state.set_exit(choice.position);
    Some(choice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::Room;
    use crate::dungeon::placement::carve_room;

    fn state_with_rooms(rooms: &[Room]) -> DungeonState {
        let mut state = DungeonState::new(80, 50, 20);
        for room in rooms {
            carve_room(state.grid_mut(), room);
            state.push_room(*room).unwrap();
        }
        let entrance = rooms[0].center();
        state.grid_mut().set(entrance.x, entrance.y, TileType::StairsUp);
        state.set_entrance(entrance);
        state
    }

    #[test]
    fn test_picks_farthest_room() {
        let mut state = state_with_rooms(&[
            Room::new(35, 20, 6, 6),
            Room::new(50, 20, 6, 6),
            Room::new(2, 2, 6, 6),
            Room::new(60, 30, 6, 6),
        ]);

        let choice = select_exit(&mut state).unwrap();

        assert_eq!(choice.room_index, 2);
        assert!(!choice.fallback);
        assert_eq!(choice.position, Position::new(5, 5));
        assert_eq!(state.exit(), Some(Position::new(5, 5)));
        assert_eq!(state.grid().typ(5, 5), Some(TileType::StairsDown));
        assert_eq!(state.grid().count(TileType::StairsDown), 1);
        assert_eq!(state.grid().count(TileType::StairsUp), 1);
    }

    #[test]
    fn test_ties_keep_first_room() {
        // Rooms 1 and 2 are mirror images around the entrance.
        let mut state = state_with_rooms(&[
            Room::new(37, 22, 6, 6),
            Room::new(57, 22, 6, 6),
            Room::new(17, 22, 6, 6),
        ]);

        let choice = select_exit(&mut state).unwrap();

        assert_eq!(choice.room_index, 1);
        assert_eq!(choice.distance, 20.0);
    }

    #[test]
    fn test_single_room_falls_back_to_entrance() {
        let mut state = state_with_rooms(&[Room::new(37, 22, 6, 6)]);

        let choice = select_exit(&mut state).unwrap();

        assert!(choice.fallback);
        assert_eq!(choice.room_index, 0);
        assert_eq!(choice.position, Position::new(40, 25));
        assert_eq!(state.exit(), state.entrance());
        assert_eq!(state.grid().count(TileType::StairsUp), 1);
        assert_eq!(state.grid().count(TileType::StairsDown), 0);
    }

    #[test]
    fn test_no_rooms_selects_nothing() {
        let mut state = DungeonState::new(80, 50, 20);
        assert_eq!(select_exit(&mut state), None);
        assert_eq!(state.exit(), None);
    }
}
