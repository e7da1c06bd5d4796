//! Generator constants
//!
//! Defaults for [`crate::GeneratorConfig`]. The grid dimensions are fixed for
//! the lifetime of a generator.

/// Grid dimensions
pub const GRID_WIDTH: usize = 80;
pub const GRID_HEIGHT: usize = 50;

/// Room side length limits (inclusive, wall border included)
pub const ROOM_MIN_SIZE: usize = 4;
pub const ROOM_MAX_SIZE: usize = 10;

/// Target room count limits (inclusive)
pub const MIN_ROOMS: usize = 5;
pub const MAX_ROOMS: usize = 20;

/// Room count used when the caller does not ask for one
pub const DEFAULT_ROOM_COUNT: usize = 10;

/// Rejection-sampling ceiling per room slot
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 100;

/// Clearance kept around every placed room
pub const ROOM_BUFFER: usize = 1;

/// Smallest side that still leaves an interior cell for the center
pub const ROOM_SIZE_FLOOR: usize = 3;

/// Map symbols
pub const S_EMPTY: char = ' ';
pub const S_WALL: char = '#';
pub const S_FLOOR: char = '.';
pub const S_DOOR: char = '+';
pub const S_STAIRS_DOWN: char = '>';
pub const S_STAIRS_UP: char = '<';
