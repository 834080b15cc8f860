//! Error types.
//!
//! Moves, spawns and state queries never fail. Errors only come from
//! building a board out of external data: grids, configuration, snapshots.

use derive_more::{Display, Error};

use super::grid::Tile;

/// Errors raised at the engine's construction and I/O boundaries.
#[derive(Debug, Clone, PartialEq, Display, Error)]
pub enum GameError {
    /// A cell holds something other than 0 or a power of two ≥ 2.
    #[display("invalid tile {value} at ({row}, {col})")]
    InvalidTile { value: Tile, row: usize, col: usize },

    /// A configuration value is out of range.
    #[display("invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// A configuration file could not be read or parsed.
    #[display("config file error: {message}")]
    ConfigFile { message: String },

    /// A snapshot could not be encoded or decoded.
    #[display("snapshot error: {message}")]
    Snapshot { message: String },
}

impl GameError {
    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
