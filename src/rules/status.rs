//! Win/loss detection.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::pipeline::can_merge;
use crate::core::{Grid, Tile, EMPTY_TILE, SIZE};

/// Game outcome, derived from a grid on demand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// Moves remain and the target has not been reached.
    Ongoing,
    /// The target tile is on the board.
    Won,
    /// The board is full and no neighbors can merge.
    Lost,
}

impl GameState {
    /// True for `Won` and `Lost`.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameState::Ongoing)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameState::Ongoing => "ongoing",
            GameState::Won => "won",
            GameState::Lost => "lost",
        };
        f.write_str(name)
    }
}

/// Any cell equals `target`.
#[must_use]
pub fn has_target_tile(grid: &Grid, target: Tile) -> bool {
    grid.cells().any(|(_, value)| value == target)
}

/// Any cell is empty.
#[must_use]
pub fn has_empty_tile(grid: &Grid) -> bool {
    grid.cells().any(|(_, value)| value == EMPTY_TILE)
}

/// Two 4-connected neighbors hold the same non-zero value.
///
/// Each cell is compared with its right and lower neighbor only, so every
/// adjacent pair is looked at exactly once.
#[must_use]
pub fn is_mergeable(grid: &Grid) -> bool {
    let rows = grid.rows();
    for row in 0..SIZE {
        for col in 0..SIZE {
            let value = rows[row][col];
            if value == EMPTY_TILE {
                continue;
            }
            if col + 1 < SIZE && can_merge(value, rows[row][col + 1]) {
                return true;
            }
            if row + 1 < SIZE && can_merge(value, rows[row + 1][col]) {
                return true;
            }
        }
    }
    false
}

/// Classify `grid`. Won takes priority over Lost.
#[must_use]
pub fn evaluate(grid: &Grid, target: Tile) -> GameState {
    if has_target_tile(grid, target) {
        GameState::Won
    } else if !has_empty_tile(grid) && !is_mergeable(grid) {
        GameState::Lost
    } else {
        GameState::Ongoing
    }
}
