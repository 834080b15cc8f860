//! Game configuration.
//!
//! Every field has a default, so a TOML file only needs the keys it changes:
//!
//! ```
//! use rust_2048::core::GameConfig;
//!
//! let config = GameConfig::from_toml_str("four_probability = 0.1").unwrap();
//! assert_eq!(config.four_probability, 0.1);
//! assert_eq!(config.target_tile, 2048);
//! assert_eq!(config.seed, None);
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::GameError;
use super::grid::{Tile, MAX_TILE};

/// Default probability that a spawned tile is a 4.
///
/// Spawning picks the exponent 1 or 2 with equal odds, so 2 and 4 are
/// equally likely. Use 0.1 for the classic 90/10 split.
pub const DEFAULT_FOUR_PROBABILITY: f64 = 0.5;

/// Default winning tile.
pub const DEFAULT_TARGET_TILE: Tile = 2048;

/// Board configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed. `None` draws one from OS entropy when the board is built.
    pub seed: Option<u64>,

    /// Probability that a spawned tile is a 4 rather than a 2, in `[0, 1]`.
    pub four_probability: f64,

    /// Reaching this tile wins the game. Power of two, at least 8.
    pub target_tile: Tile,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            four_probability: DEFAULT_FOUR_PROBABILITY,
            target_tile: DEFAULT_TARGET_TILE,
        }
    }
}

impl GameConfig {
    /// Set a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the probability of spawning a 4.
    #[must_use]
    pub fn with_four_probability(mut self, probability: f64) -> Self {
        self.four_probability = probability;
        self
    }

    /// Set the winning tile.
    #[must_use]
    pub fn with_target_tile(mut self, target: Tile) -> Self {
        self.target_tile = target;
        self
    }

    /// Check that every value is in range.
    pub fn validate(&self) -> Result<(), GameError> {
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(GameError::invalid_config(format!(
                "four_probability must be within [0, 1], got {}",
                self.four_probability
            )));
        }
        if !self.target_tile.is_power_of_two() || !(8..=MAX_TILE).contains(&self.target_tile) {
            return Err(GameError::invalid_config(format!(
                "target_tile must be a power of two in [8, {MAX_TILE}], got {}",
                self.target_tile
            )));
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, GameError> {
        let config: Self = toml::from_str(text).map_err(|e| GameError::ConfigFile {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| GameError::ConfigFile {
            message: format!("{}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.four_probability, 0.5);
        assert_eq!(config.target_tile, 2048);
    }

    #[test]
    fn test_builders() {
        let config = GameConfig::default()
            .with_seed(7)
            .with_four_probability(0.1)
            .with_target_tile(512);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.four_probability, 0.1);
        assert_eq!(config.target_tile, 512);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_probability() {
        for p in [-0.1, 1.5, f64::NAN] {
            let config = GameConfig::default().with_four_probability(p);
            assert!(matches!(config.validate(), Err(GameError::InvalidConfig { .. })), "p = {p}");
        }
    }

    #[test]
    fn test_rejects_bad_target() {
        for target in [0, 4, 100, 2047, MAX_TILE * 2, 1 << 31] {
            let config = GameConfig::default().with_target_tile(target);
            assert!(matches!(config.validate(), Err(GameError::InvalidConfig { .. })), "target = {target}");
        }
    }

    #[test]
    fn test_from_toml_str() {
        let config = GameConfig::from_toml_str("seed = 9\ntarget_tile = 1024\n").unwrap();
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.target_tile, 1024);
        assert_eq!(config.four_probability, DEFAULT_FOUR_PROBABILITY);

        assert_eq!(GameConfig::from_toml_str("").unwrap(), GameConfig::default());
    }

    #[test]
    fn test_from_toml_str_errors() {
        assert!(matches!(
            GameConfig::from_toml_str("seed = \"abc\""),
            Err(GameError::ConfigFile { .. })
        ));
        assert!(matches!(
            GameConfig::from_toml_str("four_probability = 2.0"),
            Err(GameError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_from_missing_file() {
        let result = GameConfig::from_toml_file("/nonexistent/rust-2048.toml");
        assert!(matches!(result, Err(GameError::ConfigFile { .. })));
    }
}
