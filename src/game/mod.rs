//! The stateful board engine and its snapshots.

mod board;
mod snapshot;

pub use board::{Board, MoveOutcome};
pub use snapshot::BoardSnapshot;
