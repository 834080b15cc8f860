//! Move directions and their dispatch onto the row pipeline.
//!
//! Every direction is reduced to two flags:
//!
//! | Direction | tilt  | reverse |
//! |-----------|-------|---------|
//! | Up        | true  | false   |
//! | Down      | true  | true    |
//! | Left      | false | true    |
//! | Right     | false | false   |
//!
//! `tilt` rotates the grid so columns become rows; `reverse` makes the row
//! pipeline compact toward column 0 instead of column 3.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A direction to slide tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The (tilt, reverse) pair a direction dispatches to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Orientation {
    /// Rotate before and after processing.
    pub tilt: bool,
    /// Compact toward column 0.
    pub reverse: bool,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Dispatch table entry for this direction.
    #[must_use]
    pub const fn orientation(self) -> Orientation {
        match self {
            Direction::Up => Orientation { tilt: true, reverse: false },
            Direction::Down => Orientation { tilt: true, reverse: true },
            Direction::Left => Orientation { tilt: false, reverse: true },
            Direction::Right => Orientation { tilt: false, reverse: false },
        }
    }

    /// Map a key to a direction: `u`, `d`, `l`, `r` in either case.
    ///
    /// ```
    /// use rust_2048::core::Direction;
    ///
    /// assert_eq!(Direction::from_key('u'), Some(Direction::Up));
    /// assert_eq!(Direction::from_key('R'), Some(Direction::Right));
    /// assert_eq!(Direction::from_key('x'), None);
    /// ```
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'u' => Some(Direction::Up),
            'd' => Some(Direction::Down),
            'l' => Some(Direction::Left),
            'r' => Some(Direction::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}
