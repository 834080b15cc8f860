//! Core types: grid, directions, RNG, configuration, errors.
//!
//! Everything here is plain data. The move rules live in `rules` and the
//! stateful engine in `game`.

pub mod config;
pub mod direction;
pub mod error;
pub mod grid;
pub mod rng;

pub use config::GameConfig;
pub use direction::{Direction, Orientation};
pub use error::GameError;
pub use grid::{Grid, Position, Tile, EMPTY_TILE, MAX_TILE, SIZE};
pub use rng::{GameRng, GameRngState};
