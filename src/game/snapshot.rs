//! Save and restore a whole game.
//!
//! A snapshot holds the grid, score, move count, configuration and the RNG
//! stream position, so a restored board spawns exactly the tiles the
//! original would have.

use serde::{Deserialize, Serialize};

use super::board::Board;
use crate::core::{GameConfig, GameError, GameRng, GameRngState, Grid};

/// Serializable capture of a [`Board`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub grid: Grid,
    pub score: u64,
    pub moves: u32,
    pub config: GameConfig,
    pub rng: GameRngState,
}

impl BoardSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, GameError> {
        bincode::serialize(self).map_err(|e| GameError::Snapshot {
            message: e.to_string(),
        })
    }

    /// Decode from bincode. The grid is checked when restoring, not here.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GameError> {
        bincode::deserialize(bytes).map_err(|e| GameError::Snapshot {
            message: e.to_string(),
        })
    }
}

impl Board {
    /// Capture the full game state.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            grid: *self.grid(),
            score: self.score(),
            moves: self.moves(),
            config: self.config().clone(),
            rng: self.rng().state(),
        }
    }

    /// Rebuild a board from a snapshot, re-checking tiles and configuration.
    pub fn restore(snapshot: &BoardSnapshot) -> Result<Self, GameError> {
        snapshot.config.validate()?;
        let grid = Grid::from_rows(*snapshot.grid.rows())?;
        Ok(Self::from_parts(
            grid,
            snapshot.score,
            snapshot.moves,
            snapshot.config.clone(),
            GameRng::from_state(&snapshot.rng),
        ))
    }
}
