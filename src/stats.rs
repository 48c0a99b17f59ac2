//! Aggregated results of a batch simulation
//!
//! This module provides the record a batch accumulates trial by trial, along with
//! the observed and theoretical win rates derived from it.

use crate::{trial::Strategy, utils::win_rate, Door};

/// Outcome of a batch of independent trials
///
/// Counters only ever grow while the batch runs. Rates are derived on demand and
/// are all 0 when `num_games` is 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationResults {
    num_games: usize,
    num_doors: usize,
    completed_games: usize,
    switch_wins: u64,
    stay_wins: u64,
    prize_door_counts: Vec<u64>,
    player_choice_counts: Vec<u64>,
}

/// Share of trials that landed on one door
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoorDistribution {
    pub door: Door,

    /// Fraction of trials with the prize behind this door
    pub prize_share: f64,

    /// Fraction of trials where the player first picked this door
    pub choice_share: f64,

    /// Fraction expected under a uniform draw, `1 / num_doors`
    pub expected_share: f64,
}

impl SimulationResults {
    /// Creates an empty record for a batch of `num_games` trials with `num_doors` doors
    pub fn new(num_games: usize, num_doors: usize) -> Self {
        SimulationResults {
            num_games,
            num_doors,
            completed_games: 0,
            switch_wins: 0,
            stay_wins: 0,
            prize_door_counts: vec![0; num_doors],
            player_choice_counts: vec![0; num_doors],
        }
    }

    /// Records one trial: where the prize was, what the player picked, and which
    /// strategies won
    pub(crate) fn record_trial(
        &mut self,
        prize_door: Door,
        player_choice: Door,
        switch_won: bool,
        stay_won: bool,
    ) {
        debug_assert!(self.completed_games < self.num_games, "batch overrun");
        self.prize_door_counts[prize_door] += 1;
        self.player_choice_counts[player_choice] += 1;
        if switch_won {
            self.switch_wins += 1;
        }
        if stay_won {
            self.stay_wins += 1;
        }
        self.completed_games += 1;
    }

    pub fn num_games(&self) -> usize {
        self.num_games
    }

    pub fn num_doors(&self) -> usize {
        self.num_doors
    }

    /// Trials recorded so far
    pub fn completed_games(&self) -> usize {
        self.completed_games
    }

    /// Returns true once every configured trial has been recorded
    pub fn is_complete(&self) -> bool {
        self.completed_games == self.num_games
    }

    pub fn switch_wins(&self) -> u64 {
        self.switch_wins
    }

    pub fn stay_wins(&self) -> u64 {
        self.stay_wins
    }

    /// Wins for the given strategy
    pub fn wins(&self, strategy: Strategy) -> u64 {
        match strategy {
            Strategy::Switch => self.switch_wins,
            Strategy::Stay => self.stay_wins,
        }
    }

    /// How often each door hid the prize, indexed by door
    pub fn prize_door_counts(&self) -> &[u64] {
        &self.prize_door_counts
    }

    /// How often each door was the player's first pick, indexed by door
    pub fn player_choice_counts(&self) -> &[u64] {
        &self.player_choice_counts
    }

    /// Switch wins over the configured number of games
    pub fn switch_rate(&self) -> f64 {
        win_rate(self.switch_wins, self.num_games as u64)
    }

    /// Stay wins over the configured number of games
    pub fn stay_rate(&self) -> f64 {
        win_rate(self.stay_wins, self.num_games as u64)
    }

    /// Observed rate for the given strategy
    pub fn rate(&self, strategy: Strategy) -> f64 {
        match strategy {
            Strategy::Switch => self.switch_rate(),
            Strategy::Stay => self.stay_rate(),
        }
    }

    /// `(num_doors - 1) / num_doors`
    pub fn theoretical_switch_rate(&self) -> f64 {
        self.theoretical_rate(Strategy::Switch)
    }

    /// `1 / num_doors`
    pub fn theoretical_stay_rate(&self) -> f64 {
        self.theoretical_rate(Strategy::Stay)
    }

    /// Predicted rate for the given strategy; 0 for an empty batch
    pub fn theoretical_rate(&self, strategy: Strategy) -> f64 {
        if self.num_games == 0 {
            return 0.0;
        }
        strategy.theoretical_rate(self.num_doors)
    }

    /// How many times more often switching won than staying
    ///
    /// `None` when staying never won.
    pub fn switch_advantage(&self) -> Option<f64> {
        let stay = self.stay_rate();
        if stay > 0.0 {
            Some(self.switch_rate() / stay)
        } else {
            None
        }
    }

    /// Fraction of the configured games recorded so far
    pub fn progress(&self) -> f64 {
        win_rate(self.completed_games as u64, self.num_games as u64)
    }

    /// Per-door prize and pick shares, in door order
    pub fn door_distribution(&self) -> Vec<DoorDistribution> {
        let games = self.num_games as u64;
        let expected_share = if self.num_doors == 0 {
            0.0
        } else {
            1.0 / self.num_doors as f64
        };

        (0..self.num_doors)
            .map(|door| DoorDistribution {
                door,
                prize_share: win_rate(self.prize_door_counts[door], games),
                choice_share: win_rate(self.player_choice_counts[door], games),
                expected_share,
            })
            .collect()
    }

    /// Returns a short multi-line summary of the results
    pub fn summary(&self) -> String {
        format!(
            "Monty Hall Simulation Statistics:\n\
             - Games: {} of {}\n\
             - Doors: {}\n\
             - Switch wins: {} ({:.1}%, theory {:.1}%)\n\
             - Stay wins: {} ({:.1}%, theory {:.1}%)",
            self.completed_games,
            self.num_games,
            self.num_doors,
            self.switch_wins,
            self.switch_rate() * 100.0,
            self.theoretical_switch_rate() * 100.0,
            self.stay_wins,
            self.stay_rate() * 100.0,
            self.theoretical_stay_rate() * 100.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_batch_has_zero_rates() {
        let results = SimulationResults::new(0, 3);
        assert_eq!(results.switch_rate(), 0.0);
        assert_eq!(results.stay_rate(), 0.0);
        assert_eq!(results.theoretical_switch_rate(), 0.0);
        assert_eq!(results.theoretical_stay_rate(), 0.0);
        assert_eq!(results.switch_advantage(), None);
        assert!(results.is_complete());
    }

    #[test]
    fn rates_use_configured_game_count() {
        let mut results = SimulationResults::new(4, 3);
        results.record_trial(0, 1, true, false);
        results.record_trial(2, 2, false, true);

        assert_eq!(results.completed_games(), 2);
        assert!(!results.is_complete());
        assert_eq!(results.switch_rate(), 0.25);
        assert_eq!(results.stay_rate(), 0.25);
        assert_eq!(results.progress(), 0.5);
        assert_eq!(results.switch_advantage(), Some(1.0));
        assert_eq!(results.prize_door_counts(), &[1, 0, 1]);
        assert_eq!(results.player_choice_counts(), &[0, 1, 1]);
    }

    #[test]
    fn distribution_rows_cover_every_door() {
        let mut results = SimulationResults::new(2, 4);
        results.record_trial(3, 3, false, true);
        results.record_trial(3, 0, true, false);

        let rows = results.door_distribution();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[3].prize_share, 1.0);
        assert_eq!(rows[0].choice_share, 0.5);
        assert_eq!(rows[1].expected_share, 0.25);
    }

    #[test]
    fn summary_mentions_counts() {
        let mut results = SimulationResults::new(1, 3);
        results.record_trial(1, 0, true, false);
        let summary = results.summary();
        assert!(summary.contains("Games: 1 of 1"));
        assert!(summary.contains("Switch wins: 1 (100.0%, theory 66.7%)"));
    }
}
