//! Game rules as pure functions over a `Grid`.
//!
//! - `pipeline`: shift, merge, and direction dispatch
//! - `status`: win/loss detection
//!
//! `game::Board` wires these to a score, an RNG and a configuration.

pub mod pipeline;
pub mod status;

pub use pipeline::{apply_direction, merge_row, shift_row, slide_row, slide_rows, Slide};
pub use status::{evaluate, has_empty_tile, has_target_tile, is_mergeable, GameState};
