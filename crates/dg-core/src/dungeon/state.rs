//! Dungeon state: the grid, the placed rooms and the two stair markers

use serde::{Deserialize, Serialize};

use super::{Grid, Position, Room};
use crate::error::DungeonError;

/// Everything one generation run produces
///
/// Owned by the generator and lent read-only to the renderer. The markers are
/// `None` between a reset and the end of the run that sets them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DungeonState {
    grid: Grid,
    rooms: Vec<Room>,
    room_capacity: usize,
    entrance: Option<Position>,
    exit: Option<Position>,
}

impl DungeonState {
    /// Create an empty state; `room_capacity` bounds the room sequence
    pub fn new(width: usize, height: usize, room_capacity: usize) -> Self {
        Self {
            grid: Grid::new(width, height),
            rooms: Vec::with_capacity(room_capacity),
            room_capacity,
            entrance: None,
            exit: None,
        }
    }

    /// Clear every tile to empty, drop all rooms and forget both markers
    pub fn reset(&mut self) {
        self.grid.clear();
        self.rooms.clear();
        self.entrance = None;
        self.exit = None;
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Rooms in placement order; index 0 is the start room
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn room_capacity(&self) -> usize {
        self.room_capacity
    }

    /// Append a room, failing if the sequence is full
    pub fn push_room(&mut self, room: Room) -> Result<usize, DungeonError> {
        if self.rooms.len() >= self.room_capacity {
            return Err(DungeonError::RoomCapacityExceeded {
                capacity: self.room_capacity,
            });
        }
        self.rooms.push(room);
        Ok(self.rooms.len() - 1)
    }

    /// Start room center, once a run has placed it
    pub fn entrance(&self) -> Option<Position> {
        self.entrance
    }

    /// Exit room center, once a run has selected it
    pub fn exit(&self) -> Option<Position> {
        self.exit
    }

    pub(crate) fn set_entrance(&mut self, pos: Position) {
        self.entrance = Some(pos);
    }

    pub(crate) fn set_exit(&mut self, pos: Position) {
        self.exit = Some(pos);
    }

    /// Split borrow for carving code that reads rooms while writing tiles
    pub(crate) fn grid_and_rooms(&mut self) -> (&mut Grid, &[Room]) {
        (&mut self.grid, &self.rooms)
    }
}
