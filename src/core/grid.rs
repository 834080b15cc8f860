//! The 4×4 tile grid.
//!
//! ## Tiles
//!
//! A tile is a plain `u32`: `0` is an empty cell, anything else is a power
//! of two between 2 and [`MAX_TILE`]. `Grid::from_rows` rejects grids that
//! break this rule; every transformation in `rules` preserves it.
//!
//! ## Tilt
//!
//! Vertical moves are processed as horizontal ones on a rotated grid:
//!
//! ```
//! use rust_2048::core::Grid;
//!
//! let grid = Grid::from_rows([
//!     [2, 0, 0, 0],
//!     [4, 0, 0, 0],
//!     [8, 0, 0, 0],
//!     [16, 0, 0, 0],
//! ]).unwrap();
//!
//! // Column 0 becomes row 0, read bottom-to-top.
//! assert_eq!(grid.tilt().rows()[0], [16, 8, 4, 2]);
//! assert_eq!(grid.tilt().untilt(), grid);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::GameError;

/// A single cell value. `0` means empty.
pub type Tile = u32;

/// Board edge length.
pub const SIZE: usize = 4;

/// Value of an empty cell.
pub const EMPTY_TILE: Tile = 0;

/// Largest tile a 4×4 game can build. Two of these never merge.
pub const MAX_TILE: Tile = 1 << 17;

/// Returns true if `value` may appear on a grid.
#[must_use]
pub const fn is_valid_tile(value: Tile) -> bool {
    value == EMPTY_TILE || (value >= 2 && value <= MAX_TILE && value.is_power_of_two())
}

/// A (row, column) cell coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Fixed 4×4 grid, row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Grid {
    cells: [[Tile; SIZE]; SIZE],
}

impl Grid {
    /// A grid with every cell empty.
    pub const EMPTY: Grid = Grid {
        cells: [[EMPTY_TILE; SIZE]; SIZE],
    };

    /// Build a grid from rows, checking every tile.
    pub fn from_rows(rows: [[Tile; SIZE]; SIZE]) -> Result<Self, GameError> {
        for (row, line) in rows.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(GameError::InvalidTile { value, row, col });
                }
            }
        }
        Ok(Self { cells: rows })
    }

    /// Borrow the rows.
    #[must_use]
    pub fn rows(&self) -> &[[Tile; SIZE]; SIZE] {
        &self.cells
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [[Tile; SIZE]; SIZE] {
        &mut self.cells
    }

    /// Value at `pos`.
    #[must_use]
    pub fn get(&self, pos: Position) -> Tile {
        self.cells[pos.row][pos.col]
    }

    /// Callers must keep `value` a valid tile.
    pub(crate) fn set(&mut self, pos: Position, value: Tile) {
        debug_assert!(is_valid_tile(value), "invalid tile {value}");
        self.cells[pos.row][pos.col] = value;
    }

    /// Iterate over every cell with its position, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(move |(col, &value)| (Position::new(row, col), value))
        })
    }

    /// Positions of all empty cells, row-major.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<Position> {
        self.cells()
            .filter(|&(_, value)| value == EMPTY_TILE)
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells().filter(|&(_, value)| value != EMPTY_TILE).count()
    }

    /// Highest tile on the grid (0 if empty).
    #[must_use]
    pub fn max_tile(&self) -> Tile {
        self.cells().map(|(_, value)| value).max().unwrap_or(EMPTY_TILE)
    }

    /// Rotate forward: (row, col) moves to (col, 3 - row).
    #[must_use]
    pub fn tilt(&self) -> Self {
        let mut out = Self::EMPTY;
        for row in 0..SIZE {
            for col in 0..SIZE {
                out.cells[col][SIZE - 1 - row] = self.cells[row][col];
            }
        }
        out
    }

    /// Inverse of [`Grid::tilt`]: (row, col) moves to (3 - col, row).
    #[must_use]
    pub fn untilt(&self) -> Self {
        let mut out = Self::EMPTY;
        for row in 0..SIZE {
            for col in 0..SIZE {
                out.cells[SIZE - 1 - col][row] = self.cells[row][col];
            }
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = "-".repeat(SIZE * 7 + 1);
        writeln!(f, "{separator}")?;
        for line in &self.cells {
            for &value in line {
                if value == EMPTY_TILE {
                    write!(f, "|{:^6}", ".")?;
                } else {
                    write!(f, "|{value:^6}")?;
                }
            }
            writeln!(f, "|")?;
            writeln!(f, "{separator}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered() -> Grid {
        // Distinct values so every permutation is observable.
        let mut rows = [[0; SIZE]; SIZE];
        for (i, cell) in rows.iter_mut().flatten().enumerate() {
            *cell = 2 << i;
        }
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn test_from_rows_accepts_powers_of_two() {
        let grid = Grid::from_rows([[0, 2, 4, 8], [16, 32, 64, 128], [0; 4], [2048, 0, 0, 0]]);
        assert!(grid.is_ok());
    }

    #[test]
    fn test_from_rows_rejects_invalid_tiles() {
        let err = Grid::from_rows([[0, 3, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap_err();
        assert!(matches!(err, GameError::InvalidTile { value: 3, row: 0, col: 1 }));

        let err = Grid::from_rows([[0; 4], [0; 4], [0; 4], [0, 0, 0, 1]]).unwrap_err();
        assert!(matches!(err, GameError::InvalidTile { value: 1, row: 3, col: 3 }));
    }

    #[test]
    fn test_from_rows_bounds_tile_size() {
        assert!(Grid::from_rows([[MAX_TILE, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).is_ok());

        let err = Grid::from_rows([[0; 4], [0, MAX_TILE * 2, 0, 0], [0; 4], [0; 4]]).unwrap_err();
        assert!(matches!(err, GameError::InvalidTile { value, row: 1, col: 1 } if value == MAX_TILE * 2));

        let err = Grid::from_rows([[1 << 31, 1 << 31, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap_err();
        assert!(matches!(err, GameError::InvalidTile { row: 0, col: 0, .. }));
    }

    #[test]
    fn test_tilt_mapping() {
        let grid = numbered();
        let tilted = grid.tilt();
        for row in 0..SIZE {
            for col in 0..SIZE {
                assert_eq!(tilted.rows()[col][SIZE - 1 - row], grid.rows()[row][col]);
            }
        }
    }

    #[test]
    fn test_untilt_mapping() {
        let grid = numbered();
        let untilted = grid.untilt();
        for row in 0..SIZE {
            for col in 0..SIZE {
                assert_eq!(untilted.rows()[SIZE - 1 - col][row], grid.rows()[row][col]);
            }
        }
    }

    #[test]
    fn test_tilt_round_trip() {
        let grid = numbered();
        assert_eq!(grid.tilt().untilt(), grid);
        assert_eq!(grid.untilt().tilt(), grid);
    }

    #[test]
    fn test_four_tilts_is_identity() {
        let grid = numbered();
        assert_eq!(grid.tilt().tilt().tilt().tilt(), grid);
    }

    #[test]
    fn test_empty_cells_and_counts() {
        let grid = Grid::from_rows([[2, 0, 0, 0], [0, 0, 0, 0], [0, 0, 4, 0], [0, 0, 0, 0]]).unwrap();
        let empty = grid.empty_cells();
        assert_eq!(empty.len(), 14);
        assert!(!empty.contains(&Position::new(0, 0)));
        assert!(!empty.contains(&Position::new(2, 2)));
        assert_eq!(grid.occupied_count(), 2);
        assert_eq!(grid.max_tile(), 4);
        assert_eq!(Grid::EMPTY.max_tile(), 0);
    }

    #[test]
    fn test_display_marks_empty_cells() {
        let grid = Grid::from_rows([[2048, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
        let text = grid.to_string();
        assert!(text.contains("2048"));
        assert!(text.contains('.'));
        assert_eq!(text.lines().count(), SIZE * 2 + 1);
    }
}
