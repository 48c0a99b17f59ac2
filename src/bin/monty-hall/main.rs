//! Command line front end for the Monty Hall simulator
//!
//! With `--simulate GAMES` a batch runs straight away and a report is printed.
//! Otherwise an interactive text menu starts.

mod console;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use monty_hall::{
    config::DEFAULT_NUM_DOORS, utils::group_thousands, validate_door_count, validate_game_count,
    Report, SimulationConfig, Verbosity,
};

use console::Console;

const EXAMPLES: &str = "\
Examples:
  monty-hall                          # Launch the interactive menu (default)
  monty-hall -s 10000 -d 3            # Quick command-line simulation
  monty-hall -s 50000 -d 10 -q        # Quiet simulation for scripting
  monty-hall -s 10000 --seed 42       # Reproducible simulation
  monty-hall --tui                    # Force the interactive menu";

#[derive(Debug, Parser)]
#[command(name = "monty-hall", version)]
#[command(about = "Monty Hall Problem Simulator", after_help = EXAMPLES)]
struct Args {
    /// Run command-line simulation with specified number of games
    #[arg(short = 's', long = "simulate", value_name = "GAMES")]
    simulate: Option<usize>,

    /// Number of doors (minimum: 3)
    #[arg(short, long, value_name = "N", default_value_t = DEFAULT_NUM_DOORS)]
    doors: usize,

    /// Quiet output for command-line simulation
    #[arg(short, long)]
    quiet: bool,

    /// Include the per-door distribution table in the report
    #[arg(long, conflicts_with = "quiet")]
    detailed: bool,

    /// Games per progress update (default: one hundredth of the games)
    #[arg(long, value_name = "N")]
    chunk_size: Option<usize>,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Force the interactive menu (default when no simulation specified)
    #[arg(long)]
    tui: bool,
}

impl Args {
    fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.detailed {
            Verbosity::Detailed
        } else {
            Verbosity::Normal
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    validate_door_count(args.doors).context("invalid --doors")?;

    match args.simulate {
        Some(games) if !args.tui => run_simulation(&args, games),
        _ => {
            let stdin = io::stdin();
            let mut console = Console::new(stdin.lock(), io::stdout(), args.doors, args.seed);
            console.run().context("interactive session failed")
        }
    }
}

fn run_simulation(args: &Args, games: usize) -> Result<()> {
    validate_game_count(games).context("invalid --simulate")?;

    let mut config = SimulationConfig::default()
        .with_num_games(games)
        .with_num_doors(args.doors);
    if let Some(chunk_size) = args.chunk_size {
        config = config.with_chunk_size(chunk_size);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut run = config.start().context("could not start simulation")?;
    let total = group_thousands(games as u64);
    let mut stderr = io::stderr();
    for checkpoint in &mut run {
        if !args.quiet {
            write!(
                stderr,
                "\rCompleted {} / {} games...",
                group_thousands(checkpoint.completed as u64),
                total
            )?;
            stderr.flush()?;
        }
    }
    if !args.quiet {
        writeln!(stderr, "\r{}", "Simulation complete!".green().bold())?;
    }

    let results = run.into_results();
    print!("{}", Report::new(&results, args.verbosity()));
    Ok(())
}
