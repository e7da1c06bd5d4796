//! Tile grid and grid coordinates

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Tile, TileType};

/// Grid coordinates of a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to another position
    pub fn distance(&self, other: Position) -> f64 {
        let dx = self.x as f64 - other.x as f64;
        let dy = self.y as f64 - other.y as f64;
        dx.hypot(dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Fixed-size 2D tile array, indexed `cells[x][y]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Vec<Tile>>,
}

impl Grid {
    /// Create an all-empty grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![Tile::empty(); height]; width],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&Tile> {
        self.cells.get(x).and_then(|col| col.get(y))
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut Tile> {
        self.cells.get_mut(x).and_then(|col| col.get_mut(y))
    }

    /// Tile type at a coordinate, `None` off the grid
    pub fn typ(&self, x: usize, y: usize) -> Option<TileType> {
        self.get(x, y).map(|tile| tile.typ)
    }

    /// Overwrite a tile type; returns false off the grid
    pub fn set(&mut self, x: usize, y: usize, typ: TileType) -> bool {
        match self.get_mut(x, y) {
            Some(tile) => {
                tile.typ = typ;
                true
            }
            None => false,
        }
    }

    /// Set every cell back to an explored empty tile
    pub fn clear(&mut self) {
        for col in &mut self.cells {
            for tile in col.iter_mut() {
                *tile = Tile::empty();
            }
        }
    }

    /// Number of tiles of a type
    pub fn count(&self, typ: TileType) -> usize {
        self.cells
            .iter()
            .flat_map(|col| col.iter())
            .filter(|tile| tile.typ == typ)
            .count()
    }

    /// Coordinates of every tile of a type, column by column
    pub fn positions_of(&self, typ: TileType) -> Vec<Position> {
        let mut found = Vec::new();
        for (x, col) in self.cells.iter().enumerate() {
            for (y, tile) in col.iter().enumerate() {
                if tile.typ == typ {
                    found.push(Position::new(x, y));
                }
            }
        }
        found
    }

    /// Check if every cell is empty
    pub fn is_blank(&self) -> bool {
        self.count(TileType::Empty) == self.width * self.height
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                write!(f, "{}", self.cells[x][y].typ.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_blank() {
        let grid = Grid::new(80, 50);
        assert_eq!(grid.width(), 80);
        assert_eq!(grid.height(), 50);
        assert!(grid.is_blank());
        assert!(grid.get(79, 49).is_some_and(|t| t.explored));
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut grid = Grid::new(10, 5);
        assert!(grid.get(9, 4).is_some());
        assert!(grid.get(10, 4).is_none());
        assert!(grid.get(9, 5).is_none());
        assert_eq!(grid.typ(10, 0), None);
        assert!(!grid.set(0, 5, TileType::Wall));
    }

    #[test]
    fn test_set_count_and_positions() {
        let mut grid = Grid::new(10, 5);
        assert!(grid.set(2, 3, TileType::StairsUp));
        assert!(grid.set(4, 1, TileType::Floor));
        assert!(grid.set(4, 2, TileType::Floor));

        assert_eq!(grid.count(TileType::Floor), 2);
        assert_eq!(grid.positions_of(TileType::StairsUp), vec![Position::new(2, 3)]);
        assert!(!grid.is_blank());

        grid.clear();
        assert!(grid.is_blank());
    }

    #[test]
    fn test_display_rows() {
        let mut grid = Grid::new(3, 2);
        grid.set(0, 0, TileType::Wall);
        grid.set(1, 0, TileType::Floor);
        grid.set(2, 1, TileType::StairsDown);
        assert_eq!(grid.to_string(), "#. \n  >\n");
    }

    #[test]
    fn test_position_distance() {
        let a = Position::new(0, 0);
        let b = Position::new(3, 4);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
        assert_eq!(a.distance(a), 0.0);
    }
}
