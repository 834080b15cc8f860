//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use rust_2048::{GameConfig, GameError, Tile};

/// Play 2048 in the terminal.
#[derive(Parser, Debug)]
#[command(name = "rust-2048", version, about)]
pub struct Cli {
    /// Seed for tile spawning (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// TOML configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Probability that a spawned tile is a 4
    #[arg(long, value_name = "P")]
    pub four_probability: Option<f64>,

    /// Tile that wins the game
    #[arg(long, value_name = "N")]
    pub target_tile: Option<Tile>,

    /// Write logs here instead of stderr
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Load the config file if given, then apply flag overrides.
    pub fn game_config(&self) -> Result<GameConfig, GameError> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_toml_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(p) = self.four_probability {
            config = config.with_four_probability(p);
        }
        if let Some(target) = self.target_tile {
            config = config.with_target_tile(target);
        }

        config.validate()?;
        Ok(config)
    }
}
