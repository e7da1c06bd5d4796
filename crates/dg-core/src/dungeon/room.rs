//! Room geometry
//!
//! A room is an axis-aligned rectangle whose outermost ring of tiles is wall
//! and whose remaining tiles are floor. `x`/`y` name the top-left wall tile.

use serde::{Deserialize, Serialize};

use super::Position;

/// Rectangle representing a placed room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// X coordinate of the top-left wall tile
    pub x: usize,
    /// Y coordinate of the top-left wall tile
    pub y: usize,
    /// Width including both side walls
    pub width: usize,
    /// Height including top and bottom walls
    pub height: usize,
    /// Midpoint column, fixed at creation
    pub center_x: usize,
    /// Midpoint row, fixed at creation
    pub center_y: usize,
}

impl Room {
    /// Create a room and derive its center
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            center_x: x + width / 2,
            center_y: y + height / 2,
        }
    }

    /// Get center point of room
    pub fn center(&self) -> Position {
        Position::new(self.center_x, self.center_y)
    }

    /// One past the rightmost column
    pub fn right(&self) -> usize {
        self.x + self.width
    }

    /// One past the bottom row
    pub fn bottom(&self) -> usize {
        self.y + self.height
    }

    /// Check if this room intersects `other` grown by `buffer` on every side
    pub fn overlaps(&self, other: &Room, buffer: usize) -> bool {
        self.x < other.right() + buffer
            && self.right() > other.x.saturating_sub(buffer)
            && self.y < other.bottom() + buffer
            && self.bottom() > other.y.saturating_sub(buffer)
    }

    /// Check the 1-tile margin to every grid edge
    pub fn fits_grid(&self, grid_width: usize, grid_height: usize) -> bool {
        self.x >= 1
            && self.y >= 1
            && self.right() + 1 < grid_width
            && self.bottom() + 1 < grid_height
    }

    /// Check if point is inside the room's bounding box
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Check if point lies on the wall ring
    pub fn is_border(&self, x: usize, y: usize) -> bool {
        self.contains(x, y)
            && (x == self.x || y == self.y || x + 1 == self.right() || y + 1 == self.bottom())
    }

    /// Check if point lies strictly inside the wall ring
    pub fn is_interior(&self, x: usize, y: usize) -> bool {
        self.contains(x, y) && !self.is_border(x, y)
    }

    /// Every interior position, column by column
    pub fn interior(&self) -> impl Iterator<Item = Position> + '_ {
        (self.x + 1..self.right().saturating_sub(1)).flat_map(move |x| {
            (self.y + 1..self.bottom().saturating_sub(1)).map(move |y| Position::new(x, y))
        })
    }
}
