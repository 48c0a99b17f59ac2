//! Text reports for finished batches
//!
//! A [`Report`] renders [`SimulationResults`] as plain text. It never looks at
//! anything but the results, so the same results always render the same way.

use std::fmt;

use crate::{
    stats::SimulationResults,
    utils::{group_thousands, percent},
};

/// How much a report prints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Four short lines, suitable for scripts
    Quiet,
    /// Headline rates with win counts
    #[default]
    Normal,
    /// Headline rates followed by the per-door distribution table
    Detailed,
}

/// Plain-text rendering of a batch's results
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    results: &'a SimulationResults,
    verbosity: Verbosity,
}

impl<'a> Report<'a> {
    pub fn new(results: &'a SimulationResults, verbosity: Verbosity) -> Self {
        Report { results, verbosity }
    }

    fn advantage(&self) -> String {
        match self.results.switch_advantage() {
            Some(ratio) => format!("{:.1}x", ratio),
            None => "n/a".to_string(),
        }
    }

    fn write_quiet(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.results;
        writeln!(
            f,
            "Doors: {}, Games: {}",
            r.num_doors(),
            group_thousands(r.num_games() as u64)
        )?;
        writeln!(
            f,
            "Switch: {} (theory: {})",
            percent(r.switch_rate()),
            percent(r.theoretical_switch_rate())
        )?;
        writeln!(
            f,
            "Stay:   {} (theory: {})",
            percent(r.stay_rate()),
            percent(r.theoretical_stay_rate())
        )?;
        writeln!(f, "Switch advantage: {}", self.advantage())
    }

    fn write_normal(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.results;
        writeln!(f, "Monty Hall Simulation Results:")?;
        writeln!(f, "{}", "=".repeat(50))?;
        writeln!(
            f,
            "Games: {} | Doors: {}",
            group_thousands(r.num_games() as u64),
            r.num_doors()
        )?;
        writeln!(
            f,
            "Switch Strategy: {} wins ({}) - Theory: {}",
            group_thousands(r.switch_wins()),
            percent(r.switch_rate()),
            percent(r.theoretical_switch_rate())
        )?;
        writeln!(
            f,
            "Stay Strategy:   {} wins ({}) - Theory: {}",
            group_thousands(r.stay_wins()),
            percent(r.stay_rate()),
            percent(r.theoretical_stay_rate())
        )?;
        writeln!(f, "Switch Advantage: {} better", self.advantage())
    }

    fn write_distribution(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Door Distribution Analysis:")?;
        writeln!(
            f,
            "{:<8}{:>15}{:>15}{:>12}",
            "Door", "Prize Location", "Player Choice", "Expected %"
        )?;
        for row in self.results.door_distribution() {
            writeln!(
                f,
                "{:<8}{:>15}{:>15}{:>12}",
                row.door,
                percent(row.prize_share),
                percent(row.choice_share),
                percent(row.expected_share)
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.verbosity {
            Verbosity::Quiet => self.write_quiet(f),
            Verbosity::Normal => self.write_normal(f),
            Verbosity::Detailed => {
                self.write_normal(f)?;
                writeln!(f)?;
                self.write_distribution(f)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SimulationResults {
        let mut results = SimulationResults::new(3, 3);
        results.record_trial(0, 1, true, false);
        results.record_trial(1, 2, true, false);
        results.record_trial(2, 2, false, true);
        results
    }

    #[test]
    fn quiet_report() {
        let results = sample();
        let text = Report::new(&results, Verbosity::Quiet).to_string();
        assert_eq!(
            text,
            "Doors: 3, Games: 3\n\
             Switch: 66.7% (theory: 66.7%)\n\
             Stay:   33.3% (theory: 33.3%)\n\
             Switch advantage: 2.0x\n"
        );
    }

    #[test]
    fn normal_report_has_counts() {
        let results = sample();
        let text = Report::new(&results, Verbosity::Normal).to_string();
        assert!(text.starts_with("Monty Hall Simulation Results:"));
        assert!(text.contains("Switch Strategy: 2 wins (66.7%) - Theory: 66.7%"));
        assert!(text.contains("Stay Strategy:   1 wins (33.3%) - Theory: 33.3%"));
        assert!(!text.contains("Door Distribution"));
    }

    #[test]
    fn detailed_report_lists_each_door() {
        let results = sample();
        let text = Report::new(&results, Verbosity::Detailed).to_string();
        assert!(text.contains("Door Distribution Analysis:"));
        // Header plus one row per door
        let table_lines = text
            .lines()
            .skip_while(|line| !line.starts_with("Door Distribution"))
            .count();
        assert_eq!(table_lines, 5);
    }

    #[test]
    fn advantage_without_stay_wins() {
        let mut results = SimulationResults::new(1, 3);
        results.record_trial(0, 1, true, false);
        let text = Report::new(&results, Verbosity::Quiet).to_string();
        assert!(text.ends_with("Switch advantage: n/a\n"));
    }
}
