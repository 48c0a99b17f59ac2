//! Configuration for batch simulations
//!
//! This module defines the parameters that control a batch run: how many games
//! to play, with how many doors, how finely to report progress, and which seed
//! to draw randomness from.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{
    simulation::BatchRun, utils::default_chunk_size, validate_door_count, validate_game_count,
    MontyHallError, Result, MIN_DOORS,
};

/// Games played when no count is given
pub const DEFAULT_NUM_GAMES: usize = 10_000;

/// Doors used when no count is given
pub const DEFAULT_NUM_DOORS: usize = MIN_DOORS;

/// Configuration for a batch simulation
///
/// Use the builder methods to create a customized configuration.
///
/// # Example
///
/// ```
/// use monty_hall::SimulationConfig;
///
/// let config = SimulationConfig::default()
///     .with_num_games(50_000)
///     .with_num_doors(10)
///     .with_chunk_size(1_000)
///     .with_seed(7);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of independent trials to run
    pub num_games: usize,

    /// Number of doors per trial, at least 3
    pub num_doors: usize,

    /// Trials per progress checkpoint
    ///
    /// If unset, the batch reports progress roughly one hundred times.
    pub chunk_size: Option<usize>,

    /// Seed for the random source
    ///
    /// If unset, the random source is seeded from system entropy.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            num_games: DEFAULT_NUM_GAMES,
            num_doors: DEFAULT_NUM_DOORS,
            chunk_size: None,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Sets the number of games
    pub fn with_num_games(mut self, num_games: usize) -> Self {
        self.num_games = num_games;
        self
    }

    /// Sets the number of doors
    pub fn with_num_doors(mut self, num_doors: usize) -> Self {
        self.num_doors = num_doors;
        self
    }

    /// Sets the number of trials between progress checkpoints
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = Some(chunk_size);
        self
    }

    /// Sets the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Chunk size the batch will actually use
    pub fn effective_chunk_size(&self) -> usize {
        self.chunk_size
            .unwrap_or_else(|| default_chunk_size(self.num_games))
    }

    /// Checks every parameter against the engine's preconditions
    pub fn validate(&self) -> Result<()> {
        validate_door_count(self.num_doors)?;
        validate_game_count(self.num_games)?;
        if self.chunk_size == Some(0) {
            return Err(MontyHallError::InvalidConfiguration(
                "chunk size must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Builds the random source described by this configuration
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Validates the configuration and starts a batch run
    pub fn start(&self) -> Result<BatchRun<StdRng>> {
        self.validate()?;
        BatchRun::with_rng(
            self.num_games,
            self.num_doors,
            self.effective_chunk_size(),
            self.rng(),
        )
    }
}
