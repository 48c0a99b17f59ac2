//! # monty-hall
//!
//! An engine and statistical simulator for the Monty Hall probability puzzle.
//!
//! A player picks one of N doors, exactly one of which hides the prize. The host,
//! who knows where the prize is, opens every door except two: the player's pick and
//! one other. The player then either stays with the original pick or switches to the
//! remaining closed door. Switching wins with probability `(N - 1) / N`, staying with
//! probability `1 / N`.
//!
//! ## Features
//!
//! - A stateful [`GameState`] for step-by-step interactive play
//! - A stateless [`play_trial`] function for bulk simulation
//! - A chunked [`BatchRun`] that yields progress checkpoints between chunks
//! - [`SimulationResults`] with observed and theoretical win rates
//! - Injectable random sources for reproducible runs
//!
//! ## Playing a single game
//!
//! ```
//! use monty_hall::{GameState, GamePhase};
//!
//! fn main() -> Result<(), monty_hall::MontyHallError> {
//!     let mut game = GameState::new(3)?;
//!
//!     // Pick door 0, let the host open a goat door
//!     game.make_initial_choice(0)?;
//!     let opened = game.reveal_by_host().to_vec();
//!     assert_eq!(opened.len(), 1);
//!
//!     // Switch to the only other closed door
//!     let other = game.switch_options()[0];
//!     game.make_final_choice(other)?;
//!
//!     assert_eq!(game.phase(), GamePhase::Completed);
//!     println!("Won: {}", game.did_player_win());
//!     Ok(())
//! }
//! ```
//!
//! ## Running a batch
//!
//! ```
//! use monty_hall::{run_batch, SimulationConfig};
//!
//! fn main() -> Result<(), monty_hall::MontyHallError> {
//!     let mut run = run_batch(1_000, 3, 100)?;
//!
//!     // The caller regains control after every chunk
//!     for checkpoint in &mut run {
//!         println!("{} / 1000 games", checkpoint.completed);
//!     }
//!
//!     let results = run.into_results();
//!     println!("Switch: {:.1}%", results.switch_rate() * 100.0);
//!     println!("Stay:   {:.1}%", results.stay_rate() * 100.0);
//!
//!     // The same run, described by a configuration with a fixed seed
//!     let config = SimulationConfig::default()
//!         .with_num_games(1_000)
//!         .with_seed(42);
//!     let results = config.start()?.run_to_completion();
//!     assert_eq!(results.completed_games(), 1_000);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod game_state;
pub mod host;
pub mod report;
pub mod simulation;
pub mod stats;
pub mod trial;
pub mod utils;

pub use config::SimulationConfig;
pub use game_state::{GamePhase, GameState};
pub use host::HostReveal;
pub use report::{Report, Verbosity};
pub use simulation::{run_batch, BatchRun, Checkpoint};
pub use stats::{DoorDistribution, SimulationResults};
pub use trial::{monty_hall_trial, monty_hall_trial_with_rng, play_trial, Strategy};

/// Index of a door, in `[0, num_doors)`
pub type Door = usize;

/// Smallest number of doors for which the puzzle is meaningful
pub const MIN_DOORS: usize = 3;

/// Why a door choice was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceRejection {
    /// The door index is not in `[0, num_doors)`
    OutOfRange,
    /// The initial choice has already been made
    AlreadyChosen,
    /// The final choice was attempted before the host revealed any doors
    NotRevealed,
    /// The host has already opened this door
    Revealed,
    /// The game is already over
    GameOver,
}

impl std::fmt::Display for ChoiceRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            ChoiceRejection::OutOfRange => "door does not exist",
            ChoiceRejection::AlreadyChosen => "initial choice already made",
            ChoiceRejection::NotRevealed => "host has not revealed any doors yet",
            ChoiceRejection::Revealed => "door has already been opened by the host",
            ChoiceRejection::GameOver => "game is already over",
        };
        f.write_str(reason)
    }
}

/// Error types for the Monty Hall engine
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MontyHallError {
    /// Fewer than [`MIN_DOORS`] doors were requested
    #[error("Number of doors must be at least 3, got {0}")]
    InvalidDoorCount(usize),

    /// A batch was requested with no games
    #[error("Number of games must be positive, got {0}")]
    InvalidGameCount(usize),

    /// A door choice was rejected; the game state is unchanged
    #[error("Invalid choice of door {door}: {reason}")]
    InvalidChoice {
        door: Door,
        reason: ChoiceRejection,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type for Monty Hall operations
pub type Result<T> = std::result::Result<T, MontyHallError>;

/// Rejects door counts below [`MIN_DOORS`]
pub fn validate_door_count(num_doors: usize) -> Result<()> {
    if num_doors < MIN_DOORS {
        return Err(MontyHallError::InvalidDoorCount(num_doors));
    }
    Ok(())
}

/// Rejects an empty batch
pub fn validate_game_count(num_games: usize) -> Result<()> {
    if num_games == 0 {
        return Err(MontyHallError::InvalidGameCount(num_games));
    }
    Ok(())
}
