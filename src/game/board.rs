//! The board engine.
//!
//! A `Board` owns the grid, the score and the spawn RNG. The front end
//! calls [`Board::step`] once per input event and redraws from the
//! returned [`MoveOutcome`].
//!
//! ```
//! use rust_2048::core::Direction;
//! use rust_2048::game::Board;
//! use rust_2048::rules::GameState;
//!
//! let mut board = Board::new(42);
//! assert_eq!(board.grid().occupied_count(), 2);
//!
//! for direction in Direction::ALL {
//!     let outcome = board.step(direction);
//!     assert_eq!(outcome.spawned, outcome.changed);
//! }
//! assert_eq!(board.get_state(), GameState::Ongoing);
//! ```

use std::fmt;

use tracing::{debug, info, instrument, trace};

use crate::core::{Direction, GameConfig, GameError, GameRng, Grid, Position, Tile};
use crate::rules::{self, GameState};

/// Result of one [`Board::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The move changed the grid.
    pub changed: bool,
    /// Score gained by merges during the move.
    pub score_delta: u64,
    /// A new tile was placed after the move.
    pub spawned: bool,
    /// State after the move and spawn.
    pub state: GameState,
}

/// A 2048 game in progress.
#[derive(Clone, Debug)]
pub struct Board {
    grid: Grid,
    score: u64,
    moves: u32,
    config: GameConfig,
    rng: GameRng,
}

impl Board {
    /// Start a game with the default configuration and a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let config = GameConfig::default().with_seed(seed);
        let mut board = Self::from_parts(Grid::EMPTY, 0, 0, config, GameRng::new(seed));
        board.place_initial_tiles();
        board
    }

    /// Start a game from a configuration.
    ///
    /// Without a configured seed, one is drawn from OS entropy.
    pub fn with_config(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut board = Self::from_parts(Grid::EMPTY, 0, 0, config, GameRng::new(seed));
        board.place_initial_tiles();
        Ok(board)
    }

    /// Wrap an existing grid with a zero score. No tiles are added.
    pub fn from_grid(grid: Grid, config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        Ok(Self::from_parts(grid, 0, 0, config, GameRng::new(seed)))
    }

    pub(crate) fn from_parts(grid: Grid, score: u64, moves: u32, config: GameConfig, rng: GameRng) -> Self {
        Self {
            grid,
            score,
            moves,
            config,
            rng,
        }
    }

    /// Clear the board and place two fresh tiles.
    ///
    /// The RNG stream carries on, so consecutive games differ.
    #[instrument(level = "debug", skip(self))]
    pub fn new_game(&mut self) {
        self.grid = Grid::EMPTY;
        self.score = 0;
        self.moves = 0;
        self.place_initial_tiles();
        info!("new game started");
    }

    fn place_initial_tiles(&mut self) {
        // Each spawn samples among the cells still empty, so the two
        // starting tiles always land on distinct cells.
        for _ in 0..2 {
            self.spawn_tile();
        }
    }

    // === Moves ===

    /// Slide and merge toward `direction`.
    ///
    /// Returns true if the grid changed. No tile is spawned; see
    /// [`Board::step`] for the full turn.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        let slide = rules::apply_direction(&mut self.grid, direction);
        self.score += slide.score_delta;
        if slide.changed {
            debug!(%direction, score_delta = slide.score_delta, score = self.score, "move applied");
        } else {
            trace!(%direction, "move changed nothing");
        }
        slide.changed
    }

    /// Apply the move bound to `key` (`u`, `d`, `l`, `r`).
    ///
    /// Unknown keys are a no-op and return false.
    pub fn apply_key(&mut self, key: char) -> bool {
        match Direction::from_key(key) {
            Some(direction) => self.apply_move(direction),
            None => {
                trace!(?key, "ignoring unmapped key");
                false
            }
        }
    }

    /// Place a 2 or a 4 on a uniformly chosen empty cell.
    ///
    /// Returns false, leaving the grid untouched, if no cell is empty.
    pub fn spawn_tile(&mut self) -> bool {
        let empty = self.grid.empty_cells();
        if empty.is_empty() {
            return false;
        }

        let pos = empty[self.rng.gen_index(empty.len())];
        let exponent = if self.rng.gen_bool(self.config.four_probability) { 2 } else { 1 };
        let value: Tile = 1 << exponent;
        self.grid.set(pos, value);

        trace!(%pos, value, "tile spawned");
        true
    }

    /// Play one turn: move, then spawn a tile if the move changed anything.
    #[instrument(level = "debug", skip(self))]
    pub fn step(&mut self, direction: Direction) -> MoveOutcome {
        let before = self.score;
        let previous = self.get_state();
        let changed = self.apply_move(direction);
        let spawned = changed && self.spawn_tile();
        if changed {
            self.moves += 1;
        }

        let state = self.get_state();
        if game_ended(previous, state) {
            info!(%state, score = self.score, moves = self.moves, max_tile = self.max_tile(), "game over");
        }

        MoveOutcome {
            changed,
            score_delta: self.score - before,
            spawned,
            state,
        }
    }

    // === State Queries ===

    /// The target tile is on the board.
    #[must_use]
    pub fn has_target_tile(&self) -> bool {
        rules::has_target_tile(&self.grid, self.config.target_tile)
    }

    /// At least one cell is empty.
    #[must_use]
    pub fn has_empty_tile(&self) -> bool {
        rules::has_empty_tile(&self.grid)
    }

    /// Two adjacent non-zero cells are equal.
    #[must_use]
    pub fn is_mergeable(&self) -> bool {
        rules::is_mergeable(&self.grid)
    }

    /// Current outcome. Won takes priority over Lost.
    #[must_use]
    pub fn get_state(&self) -> GameState {
        rules::evaluate(&self.grid, self.config.target_tile)
    }

    /// Directions that would change the grid, checked on a copy.
    #[must_use]
    pub fn legal_directions(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&direction| {
                let mut scratch = self.grid;
                rules::apply_direction(&mut scratch, direction).changed
            })
            .collect()
    }

    // === Accessors ===

    /// Current grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Total score from merges.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Moves that changed the grid since the game started.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Seed of the spawn RNG, for replaying this game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Configuration this game runs under.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Highest tile on the grid.
    #[must_use]
    pub fn max_tile(&self) -> Tile {
        self.grid.max_tile()
    }

    /// Positions of the empty cells, row-major.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<Position> {
        self.grid.empty_cells()
    }

    pub(crate) fn rng(&self) -> &GameRng {
        &self.rng
    }
}

/// A turn that moves the game from Ongoing into Won or Lost.
fn game_ended(previous: GameState, state: GameState) -> bool {
    !previous.is_terminal() && state.is_terminal()
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)?;
        writeln!(f, "Score: {}  Moves: {}", self.score, self.moves)
    }
}
