//! Stateless trials
//!
//! A trial resolves one complete game from a strategy, a prize location and an
//! initial guess, with no stored state. Bulk simulation is built on these.

use std::fmt;

use log::trace;
use rand::seq::IteratorRandom;
use rand::Rng;

use crate::{host::HostReveal, Door};

/// What the player does after the host opens the doors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Keep the initial choice
    Stay,
    /// Move to another door the host left closed
    Switch,
}

impl Strategy {
    /// Both strategies, in reporting order
    pub const ALL: [Strategy; 2] = [Strategy::Switch, Strategy::Stay];

    /// Returns true for [`Strategy::Switch`]
    pub fn is_switch(self) -> bool {
        matches!(self, Strategy::Switch)
    }

    /// Win probability predicted for this strategy with `num_doors` doors
    pub fn theoretical_rate(self, num_doors: usize) -> f64 {
        if num_doors == 0 {
            return 0.0;
        }
        let stay = 1.0 / num_doors as f64;
        match self {
            Strategy::Stay => stay,
            Strategy::Switch => 1.0 - stay,
        }
    }
}

impl From<bool> for Strategy {
    fn from(switch_strategy: bool) -> Self {
        if switch_strategy {
            Strategy::Switch
        } else {
            Strategy::Stay
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Stay => f.write_str("Stay"),
            Strategy::Switch => f.write_str("Switch"),
        }
    }
}

/// Plays one game to completion and reports whether the player won
///
/// The host reveal follows [`HostReveal::compute`]. A switching player picks
/// uniformly among the closed doors other than `initial_choice`, falling back to
/// `initial_choice` if there are none.
///
/// # Example
///
/// ```
/// use monty_hall::{play_trial, Strategy};
///
/// let mut rng = rand::thread_rng();
///
/// // A wrong first guess: switching always wins with three doors
/// assert!(play_trial(3, Strategy::Switch, 1, 0, &mut rng));
/// assert!(!play_trial(3, Strategy::Stay, 1, 0, &mut rng));
/// ```
pub fn play_trial<R: Rng + ?Sized>(
    num_doors: usize,
    strategy: Strategy,
    prize_door: Door,
    initial_choice: Door,
    rng: &mut R,
) -> bool {
    let reveal = HostReveal::compute(num_doors, prize_door, initial_choice, rng);

    let final_choice = match strategy {
        Strategy::Stay => initial_choice,
        Strategy::Switch => reveal
            .switch_options(initial_choice)
            .choose(rng)
            .unwrap_or(initial_choice),
    };

    let won = final_choice == prize_door;
    trace!(
        "trial: {} from door {} to door {}, prize behind {} -> {}",
        strategy,
        initial_choice,
        final_choice,
        prize_door,
        if won { "win" } else { "loss" }
    );
    won
}

/// Plays one game with a random prize and a random first guess
///
/// Uses the thread-local random source. See [`monty_hall_trial_with_rng`] for an
/// injectable one.
pub fn monty_hall_trial(strategy: Strategy, num_doors: usize) -> bool {
    let mut rng = rand::thread_rng();
    monty_hall_trial_with_rng(strategy, num_doors, &mut rng)
}

/// Plays one game with a random prize and a random first guess drawn from `rng`
pub fn monty_hall_trial_with_rng<R: Rng + ?Sized>(
    strategy: Strategy,
    num_doors: usize,
    rng: &mut R,
) -> bool {
    let prize_door = rng.gen_range(0..num_doors);
    let initial_choice = rng.gen_range(0..num_doors);
    play_trial(num_doors, strategy, prize_door, initial_choice, rng)
}
