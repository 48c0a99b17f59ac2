//! The host's reveal rule
//!
//! The host knows where the prize is and never opens it. Given the prize door and
//! the player's pick, the host keeps exactly two doors closed and opens the rest:
//!
//! - If the pick is wrong, the pick and the prize door stay closed.
//! - If the pick is right, the pick stays closed along with one other door chosen
//!   uniformly at random from the remaining doors.
//!
//! The same rule drives both the interactive [`GameState`](crate::GameState) and the
//! stateless [`play_trial`](crate::play_trial).

use log::trace;
use rand::seq::IteratorRandom;
use rand::Rng;

use crate::Door;

/// Doors the host keeps closed and doors it opens for one game
///
/// Both lists are sorted in ascending door order and together cover every door
/// exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostReveal {
    closed: Vec<Door>,
    opened: Vec<Door>,
}

impl HostReveal {
    /// Computes the closed-set and the opened doors
    ///
    /// `prize_door` and `initial_choice` must both be valid indices for
    /// `num_doors`. Randomness is only consumed when the player picked the prize.
    pub fn compute<R: Rng + ?Sized>(
        num_doors: usize,
        prize_door: Door,
        initial_choice: Door,
        rng: &mut R,
    ) -> Self {
        debug_assert!(prize_door < num_doors, "prize door out of range");
        debug_assert!(initial_choice < num_doors, "initial choice out of range");

        let companion = if initial_choice != prize_door {
            initial_choice
        } else {
            // At least two other doors exist whenever num_doors >= 3
            (0..num_doors)
                .filter(|&door| door != prize_door)
                .choose(rng)
                .unwrap_or(prize_door)
        };

        let (closed, opened): (Vec<Door>, Vec<Door>) =
            (0..num_doors).partition(|&door| door == prize_door || door == companion);

        trace!(
            "host keeps {:?} closed, opens {} door(s) (prize {}, pick {})",
            closed,
            opened.len(),
            prize_door,
            initial_choice
        );

        HostReveal { closed, opened }
    }

    /// Doors the host left closed, including the player's pick
    pub fn closed(&self) -> &[Door] {
        &self.closed
    }

    /// Doors the host opened; none of them hides the prize
    pub fn opened(&self) -> &[Door] {
        &self.opened
    }

    /// Returns true if the host opened this door
    pub fn is_opened(&self, door: Door) -> bool {
        self.opened.binary_search(&door).is_ok()
    }

    /// Closed doors a player holding `initial_choice` could switch to
    pub fn switch_options(&self, initial_choice: Door) -> impl Iterator<Item = Door> + '_ {
        self.closed
            .iter()
            .copied()
            .filter(move |&door| door != initial_choice)
    }

    /// Consumes the reveal, returning the opened doors
    pub fn into_opened(self) -> Vec<Door> {
        self.opened
    }
}
