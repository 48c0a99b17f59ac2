//! Batch simulation
//!
//! A [`BatchRun`] plays many independent stateless trials and accumulates them
//! into [`SimulationResults`]. It runs in chunks: each call to `next()` plays one
//! chunk and hands back a [`Checkpoint`], so a caller can render progress between
//! chunks. Stopping early leaves the partial results valid for the trials played.

use std::iter::FusedIterator;
use std::time::Instant;

use log::{debug, info};
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::{
    stats::SimulationResults,
    trial::{play_trial, Strategy},
    validate_door_count, validate_game_count, MontyHallError, Result,
};

/// Progress snapshot taken after a chunk of trials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkpoint {
    /// Trials played so far, never more than the configured number of games
    pub completed: usize,

    /// Results covering exactly the completed trials
    pub results: SimulationResults,
}

impl Checkpoint {
    /// Returns true for the last checkpoint of a batch
    pub fn is_final(&self) -> bool {
        self.results.is_complete()
    }
}

/// A batch of trials in progress
///
/// Iterating yields one [`Checkpoint`] per chunk, in order, and stops once every
/// game has been played. The run cannot be restarted.
#[derive(Debug)]
pub struct BatchRun<R> {
    results: SimulationResults,
    chunk_size: usize,
    rng: R,
    started: Option<Instant>,
}

/// Starts a batch of `num_games` trials with `num_doors` doors, reporting
/// progress every `chunk_size` trials
///
/// Uses the thread-local random source; see [`BatchRun::with_rng`] to inject one.
pub fn run_batch(
    num_games: usize,
    num_doors: usize,
    chunk_size: usize,
) -> Result<BatchRun<ThreadRng>> {
    BatchRun::with_rng(num_games, num_doors, chunk_size, rand::thread_rng())
}

impl<R: Rng> BatchRun<R> {
    /// Starts a batch that draws all of its randomness from `rng`
    pub fn with_rng(num_games: usize, num_doors: usize, chunk_size: usize, rng: R) -> Result<Self> {
        validate_door_count(num_doors)?;
        validate_game_count(num_games)?;
        if chunk_size == 0 {
            return Err(MontyHallError::InvalidConfiguration(
                "chunk size must be positive".to_string(),
            ));
        }

        info!(
            "starting batch: {} games, {} doors, {} games per chunk",
            num_games, num_doors, chunk_size
        );

        Ok(BatchRun {
            results: SimulationResults::new(num_games, num_doors),
            chunk_size,
            rng,
            started: None,
        })
    }

    /// Results for the trials played so far
    pub fn results(&self) -> &SimulationResults {
        &self.results
    }

    /// Trials played so far
    pub fn completed(&self) -> usize {
        self.results.completed_games()
    }

    /// Returns true once every trial has been played
    pub fn is_finished(&self) -> bool {
        self.results.is_complete()
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Stops the run, keeping the results played so far
    pub fn into_results(self) -> SimulationResults {
        self.results
    }

    /// Plays every remaining chunk and returns the final results
    pub fn run_to_completion(mut self) -> SimulationResults {
        while self.play_chunk() > 0 {}
        self.results
    }

    /// Plays up to one chunk, returning how many trials ran
    fn play_chunk(&mut self) -> usize {
        let remaining = self.results.num_games() - self.results.completed_games();
        let batch = remaining.min(self.chunk_size);
        if batch == 0 {
            return 0;
        }

        let started = *self.started.get_or_insert_with(Instant::now);
        for _ in 0..batch {
            self.play_one();
        }

        debug!(
            "chunk done: {} / {} games",
            self.results.completed_games(),
            self.results.num_games()
        );
        if self.results.is_complete() {
            info!(
                "batch complete in {:.3}s: switch {:.4}, stay {:.4}",
                started.elapsed().as_secs_f64(),
                self.results.switch_rate(),
                self.results.stay_rate()
            );
        }
        batch
    }

    /// Plays one trial under both strategies with a shared prize and pick
    fn play_one(&mut self) {
        let num_doors = self.results.num_doors();
        let prize_door = self.rng.gen_range(0..num_doors);
        let player_choice = self.rng.gen_range(0..num_doors);

        // Each strategy runs its own host reveal
        let switch_won = play_trial(
            num_doors,
            Strategy::Switch,
            prize_door,
            player_choice,
            &mut self.rng,
        );
        let stay_won = play_trial(
            num_doors,
            Strategy::Stay,
            prize_door,
            player_choice,
            &mut self.rng,
        );

        self.results
            .record_trial(prize_door, player_choice, switch_won, stay_won);
    }
}

impl<R: Rng> Iterator for BatchRun<R> {
    type Item = Checkpoint;

    fn next(&mut self) -> Option<Checkpoint> {
        if self.play_chunk() == 0 {
            return None;
        }
        Some(Checkpoint {
            completed: self.results.completed_games(),
            results: self.results.clone(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.results.num_games() - self.results.completed_games();
        let chunks = remaining.div_ceil(self.chunk_size);
        (chunks, Some(chunks))
    }
}

impl<R: Rng> FusedIterator for BatchRun<R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn rejects_bad_parameters() {
        assert_eq!(
            run_batch(10, 2, 1).unwrap_err(),
            MontyHallError::InvalidDoorCount(2)
        );
        assert_eq!(
            run_batch(0, 3, 1).unwrap_err(),
            MontyHallError::InvalidGameCount(0)
        );
        assert!(matches!(
            run_batch(10, 3, 0),
            Err(MontyHallError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn last_chunk_is_short() {
        let run = BatchRun::with_rng(10, 3, 4, StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(run.size_hint(), (3, Some(3)));

        let completed: Vec<usize> = run.map(|checkpoint| checkpoint.completed).collect();
        assert_eq!(completed, vec![4, 8, 10]);
    }

    #[test]
    fn stopping_early_keeps_partial_results() {
        let mut run = BatchRun::with_rng(100, 3, 10, StdRng::seed_from_u64(2)).unwrap();
        let first = run.next().unwrap();
        assert!(!first.is_final());

        let partial = run.into_results();
        assert_eq!(partial.completed_games(), 10);
        assert_eq!(partial.prize_door_counts().iter().sum::<u64>(), 10);
        assert_eq!(partial.player_choice_counts().iter().sum::<u64>(), 10);
        assert!(partial.switch_wins() + partial.stay_wins() <= 20);
    }

    #[test]
    fn finished_run_stays_finished() {
        let mut run = BatchRun::with_rng(5, 4, 5, StdRng::seed_from_u64(3)).unwrap();
        let last = run.next().unwrap();
        assert!(last.is_final());
        assert!(run.is_finished());
        assert!(run.next().is_none());
        assert!(run.next().is_none());
    }
}
