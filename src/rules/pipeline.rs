//! Shift-and-merge pipeline.
//!
//! All four moves run through one row routine. A row is scanned from its
//! near edge (the edge tiles slide toward) to its far edge; `reverse` puts
//! the near edge at column 0, otherwise at column 3. Vertical moves tilt the
//! grid first so their columns become rows.
//!
//! Each row goes through shift, merge, shift, in that order. The second
//! shift closes the gaps merges leave behind.

use crate::core::{Direction, Grid, Tile, EMPTY_TILE, MAX_TILE, SIZE};

/// Number of shift sweeps. Enough to carry a tile across a full row.
const SHIFT_SWEEPS: usize = SIZE - 1;

/// What a pipeline run did to the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Slide {
    /// Any cell changed.
    pub changed: bool,
    /// Sum of the values of every merged tile.
    pub score_delta: u64,
}

/// Column indices from the near edge to the far edge.
const fn scan_order(reverse: bool) -> [usize; SIZE] {
    if reverse {
        [0, 1, 2, 3]
    } else {
        [3, 2, 1, 0]
    }
}

/// Compact non-zero tiles toward the near edge, keeping their order.
///
/// Returns true if any cell changed.
pub fn shift_row(row: &mut [Tile; SIZE], reverse: bool) -> bool {
    let order = scan_order(reverse);
    let mut changed = false;

    for _ in 0..SHIFT_SWEEPS {
        for pair in order.windows(2) {
            let (near, far) = (pair[0], pair[1]);
            if row[near] == EMPTY_TILE && row[far] != EMPTY_TILE {
                row.swap(near, far);
                changed = true;
            }
        }
    }

    changed
}

/// Returns true if `a` and `b` merge into a valid tile.
pub(crate) const fn can_merge(a: Tile, b: Tile) -> bool {
    a != EMPTY_TILE && a == b && a < MAX_TILE
}

/// Merge equal neighbors, walking from the near edge.
///
/// The near cell of a merged pair doubles and the far cell empties. A
/// merged pair is stepped over, so a tile merges at most once per call.
/// A pair of [`MAX_TILE`]s stays put.
/// Returns the total value of the merged tiles; zero means nothing merged.
pub fn merge_row(row: &mut [Tile; SIZE], reverse: bool) -> u64 {
    let order = scan_order(reverse);
    let mut gained = 0u64;
    let mut i = 0;

    while i + 1 < SIZE {
        let (near, far) = (order[i], order[i + 1]);
        if can_merge(row[near], row[far]) {
            row[near] *= 2;
            row[far] = EMPTY_TILE;
            gained += u64::from(row[near]);
            i += 2;
        } else {
            i += 1;
        }
    }

    gained
}

/// Run shift, merge, shift on one row.
pub fn slide_row(row: &mut [Tile; SIZE], reverse: bool) -> Slide {
    let shifted = shift_row(row, reverse);
    let score_delta = merge_row(row, reverse);
    let shifted_again = shift_row(row, reverse);

    Slide {
        changed: shifted || score_delta > 0 || shifted_again,
        score_delta,
    }
}

/// Run the row pipeline on every row of `grid`.
pub fn slide_rows(grid: &mut Grid, reverse: bool) -> Slide {
    grid.rows_mut()
        .iter_mut()
        .map(|row| slide_row(row, reverse))
        .fold(Slide::default(), |acc, slide| Slide {
            changed: acc.changed || slide.changed,
            score_delta: acc.score_delta + slide.score_delta,
        })
}

/// Apply a full move to `grid` in place.
///
/// ```
/// use rust_2048::core::{Direction, Grid};
/// use rust_2048::rules::apply_direction;
///
/// let mut grid = Grid::from_rows([
///     [2, 0, 0, 0],
///     [2, 0, 0, 0],
///     [4, 0, 0, 0],
///     [0, 0, 0, 0],
/// ]).unwrap();
///
/// let slide = apply_direction(&mut grid, Direction::Up);
/// assert!(slide.changed);
/// assert_eq!(slide.score_delta, 4);
/// assert_eq!(grid.rows()[0][0], 4);
/// assert_eq!(grid.rows()[1][0], 4);
/// ```
pub fn apply_direction(grid: &mut Grid, direction: Direction) -> Slide {
    let orientation = direction.orientation();

    if orientation.tilt {
        *grid = grid.tilt();
    }
    let slide = slide_rows(grid, orientation.reverse);
    if orientation.tilt {
        *grid = grid.untilt();
    }

    slide
}
