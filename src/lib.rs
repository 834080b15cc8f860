//! # rust-2048
//!
//! A 2048 sliding-tile board engine.
//!
//! ## Design
//!
//! 1. **One pipeline**: every move is processed as a horizontal
//!    shift → merge → shift on each row. Vertical moves tilt the grid
//!    first and tilt it back afterwards.
//!
//! 2. **Derived state**: Won / Lost / Ongoing is computed from the grid on
//!    demand, never stored.
//!
//! 3. **Deterministic spawning**: tiles come from a seeded ChaCha8 RNG
//!    whose position is part of a snapshot, so games replay exactly.
//!
//! ## Modules
//!
//! - `core`: grid, directions, RNG, configuration, errors
//! - `rules`: the move pipeline and win/loss detection
//! - `game`: the `Board` engine and snapshots
//!
//! ```
//! use rust_2048::{Board, Direction, GameState};
//!
//! let mut board = Board::new(7);
//! let outcome = board.step(Direction::Left);
//! if outcome.changed {
//!     assert!(outcome.spawned);
//! }
//! assert_eq!(board.get_state(), GameState::Ongoing);
//! ```

pub mod core;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Direction, GameConfig, GameError, GameRng, GameRngState, Grid, Position, Tile};
pub use crate::game::{Board, BoardSnapshot, MoveOutcome};
pub use crate::rules::GameState;
