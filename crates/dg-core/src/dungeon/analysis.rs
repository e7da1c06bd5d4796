//! Post-run layout analysis
//!
//! Nothing here changes the grid. Connectivity is guaranteed by the way
//! corridors are dug; these helpers let callers check it.

use super::{DungeonState, Grid, Position, TileType};

/// Tiles reached by a 4-connected flood fill over passable tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reachability {
    visited: Vec<Vec<bool>>,
    count: usize,
}

impl Reachability {
    /// Check if a tile was reached
    pub fn contains(&self, pos: Position) -> bool {
        self.visited
            .get(pos.x)
            .and_then(|col| col.get(pos.y))
            .copied()
            .unwrap_or(false)
    }

    /// Number of tiles reached
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Flood fill from `start` across Floor, Door and stair tiles
///
/// A start tile that is off the grid or impassable reaches nothing.
pub fn flood_fill(grid: &Grid, start: Position) -> Reachability {
    let (width, height) = (grid.width(), grid.height());
    let mut visited = vec![vec![false; height]; width];
    let mut stack = vec![(start.x, start.y)];
    let mut count = 0;

    while let Some((x, y)) = stack.pop() {
        if x >= width || y >= height || visited[x][y] {
            continue;
        }
        if !grid.typ(x, y).is_some_and(|typ| typ.is_passable()) {
            continue;
        }
        visited[x][y] = true;
        count += 1;

        if x > 0 {
            stack.push((x - 1, y));
        }
        if x + 1 < width {
            stack.push((x + 1, y));
        }
        if y > 0 {
            stack.push((x, y - 1));
        }
        if y + 1 < height {
            stack.push((x, y + 1));
        }
    }

    Reachability { visited, count }
}

fn room_reach(state: &DungeonState) -> Vec<bool> {
    let Some(entrance) = state.entrance() else {
        return vec![false; state.room_count()];
    };
    let reach = flood_fill(state.grid(), entrance);
    state
        .rooms()
        .iter()
        .map(|room| room.interior().any(|pos| reach.contains(pos)))
        .collect()
}

/// Indices of rooms whose interior the entrance can reach
pub fn reachable_rooms(state: &DungeonState) -> Vec<usize> {
    room_reach(state)
        .into_iter()
        .enumerate()
        .filter_map(|(i, hit)| hit.then_some(i))
        .collect()
}

/// Indices of rooms cut off from the entrance
pub fn unreachable_rooms(state: &DungeonState) -> Vec<usize> {
    room_reach(state)
        .into_iter()
        .enumerate()
        .filter_map(|(i, hit)| (!hit).then_some(i))
        .collect()
}

/// Check that every placed room can be walked to from the entrance
pub fn all_rooms_reachable(state: &DungeonState) -> bool {
    state.room_count() > 0 && room_reach(state).into_iter().all(|hit| hit)
}

/// Count of (StairsUp, StairsDown) tiles
pub fn stair_counts(grid: &Grid) -> (usize, usize) {
    (
        grid.count(TileType::StairsUp),
        grid.count(TileType::StairsDown),
    )
}
