//! Stateful game for interactive play.
//!
//! A [`GameState`] walks through one round of the puzzle one decision at a time:
//! the player picks a door, the host opens doors, the player stays or switches.
//! Every transition is guarded; a rejected call returns an error and leaves the
//! state untouched so the caller can retry.

use log::debug;
use rand::Rng;

use crate::{
    host::HostReveal, trial::Strategy, validate_door_count, ChoiceRejection, Door,
    MontyHallError, Result,
};

/// Where a game is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Prize placed, waiting for the player's first pick
    Created,
    /// Player has picked, host has not opened any doors yet
    ChoiceMade,
    /// Host has opened doors, waiting for stay or switch
    Revealed,
    /// Final choice made
    Completed,
}

/// One round of the puzzle
///
/// The prize door is fixed at creation and never re-randomized. The initial
/// choice, the host reveal and the final choice each happen at most once and in
/// that order.
#[derive(Debug, Clone)]
pub struct GameState {
    num_doors: usize,
    prize_door: Door,
    player_choice: Option<Door>,
    revealed_doors: Vec<Door>,
    revealed: bool,
    final_choice: Option<Door>,
    completed: bool,
}

impl GameState {
    /// Creates a game with the prize behind a uniformly random door
    pub fn new(num_doors: usize) -> Result<Self> {
        let mut rng = rand::thread_rng();
        Self::with_rng(num_doors, &mut rng)
    }

    /// Creates a game, drawing the prize door from `rng`
    pub fn with_rng<R: Rng + ?Sized>(num_doors: usize, rng: &mut R) -> Result<Self> {
        validate_door_count(num_doors)?;
        let prize_door = rng.gen_range(0..num_doors);
        Self::with_prize_door(num_doors, prize_door)
    }

    /// Creates a game with the prize behind a known door
    ///
    /// Useful for scripted scenarios and tests.
    pub fn with_prize_door(num_doors: usize, prize_door: Door) -> Result<Self> {
        validate_door_count(num_doors)?;
        if prize_door >= num_doors {
            return Err(MontyHallError::InvalidChoice {
                door: prize_door,
                reason: ChoiceRejection::OutOfRange,
            });
        }

        debug!("new game: {} doors", num_doors);
        Ok(GameState {
            num_doors,
            prize_door,
            player_choice: None,
            revealed_doors: Vec::new(),
            revealed: false,
            final_choice: None,
            completed: false,
        })
    }

    /// Records the player's first pick
    ///
    /// Fails if the door does not exist or a pick has already been made.
    pub fn make_initial_choice(&mut self, door: Door) -> Result<()> {
        if door >= self.num_doors {
            return Err(reject(door, ChoiceRejection::OutOfRange));
        }
        if self.player_choice.is_some() {
            return Err(reject(door, ChoiceRejection::AlreadyChosen));
        }

        self.player_choice = Some(door);
        debug!("player picks door {}", door);
        Ok(())
    }

    /// Lets the host open doors, using the thread-local random source
    ///
    /// See [`GameState::reveal_by_host_with_rng`].
    pub fn reveal_by_host(&mut self) -> &[Door] {
        let mut rng = rand::thread_rng();
        self.reveal_by_host_with_rng(&mut rng)
    }

    /// Lets the host open every door outside the closed-set
    ///
    /// Does nothing before the initial choice, and nothing after the first
    /// successful reveal: calling it again returns the same doors. Returns the
    /// doors opened so far.
    pub fn reveal_by_host_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &[Door] {
        if let (Some(choice), false) = (self.player_choice, self.revealed) {
            let reveal = HostReveal::compute(self.num_doors, self.prize_door, choice, rng);
            self.revealed_doors = reveal.into_opened();
            self.revealed = true;
            debug!("host opens doors {:?}", self.revealed_doors);
        }
        &self.revealed_doors
    }

    /// Records the player's final pick and ends the game
    ///
    /// The door must still be closed, the host must have revealed, and the game
    /// must not already be over.
    pub fn make_final_choice(&mut self, door: Door) -> Result<()> {
        if self.completed {
            return Err(reject(door, ChoiceRejection::GameOver));
        }
        if door >= self.num_doors {
            return Err(reject(door, ChoiceRejection::OutOfRange));
        }
        if !self.revealed {
            return Err(reject(door, ChoiceRejection::NotRevealed));
        }
        if self.is_revealed(door) {
            return Err(reject(door, ChoiceRejection::Revealed));
        }

        self.final_choice = Some(door);
        self.completed = true;
        debug!(
            "player settles on door {} ({})",
            door,
            if self.did_player_win() { "win" } else { "loss" }
        );
        Ok(())
    }

    /// Returns true if the game is over and the final pick hides the prize
    pub fn did_player_win(&self) -> bool {
        self.completed && self.final_choice == Some(self.prize_door)
    }

    /// Doors that are still closed, in ascending order
    pub fn available_doors(&self) -> Vec<Door> {
        (0..self.num_doors)
            .filter(|&door| !self.is_revealed(door))
            .collect()
    }

    /// Closed doors other than the initial pick
    pub fn switch_options(&self) -> Vec<Door> {
        self.available_doors()
            .into_iter()
            .filter(|&door| Some(door) != self.player_choice)
            .collect()
    }

    /// Whether the player stayed or switched; `None` until the game is over
    pub fn strategy_played(&self) -> Option<Strategy> {
        match (self.player_choice, self.final_choice) {
            (Some(initial), Some(last)) => Some(Strategy::from(initial != last)),
            _ => None,
        }
    }

    pub fn phase(&self) -> GamePhase {
        if self.completed {
            GamePhase::Completed
        } else if self.revealed {
            GamePhase::Revealed
        } else if self.player_choice.is_some() {
            GamePhase::ChoiceMade
        } else {
            GamePhase::Created
        }
    }

    pub fn num_doors(&self) -> usize {
        self.num_doors
    }

    pub fn prize_door(&self) -> Door {
        self.prize_door
    }

    pub fn player_choice(&self) -> Option<Door> {
        self.player_choice
    }

    pub fn final_choice(&self) -> Option<Door> {
        self.final_choice
    }

    pub fn revealed_doors(&self) -> &[Door] {
        &self.revealed_doors
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    fn is_revealed(&self, door: Door) -> bool {
        self.revealed_doors.binary_search(&door).is_ok()
    }
}

fn reject(door: Door, reason: ChoiceRejection) -> MontyHallError {
    MontyHallError::InvalidChoice { door, reason }
}
