//! Interactive text console
//!
//! Screens live on a navigation stack: the menu sits at the bottom, settings and
//! game screens are pushed on top of it, and going back pops. Closing the input
//! stream quits from any screen.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use log::debug;
use monty_hall::{
    config::DEFAULT_NUM_GAMES, utils::group_thousands, GameState, Report, SimulationConfig,
    Strategy, Verbosity, MIN_DOORS,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ABOUT: &str = "\
The Monty Hall Problem

Named after game show host Monty Hall, this famous probability puzzle
demonstrates counter-intuitive statistics.

The Setup:
  * You choose one of three doors (one has a car, the others have goats)
  * Monty opens a door with a goat (not your choice, not the car)
  * You can switch to the remaining door or stay with your choice

The Surprise:
  * Staying gives you a 1/3 (33.3%) chance of winning
  * Switching gives you a 2/3 (66.7%) chance of winning!

Why?
Your initial choice had a 1/3 chance of being correct. When Monty eliminates
a wrong door, the remaining door gets the combined probability of all the
doors you didn't pick: 2/3!

With more doors the effect is even more dramatic. With 100 doors, staying
gives you a 1% chance, while switching gives you 99%.";

/// A screen on the navigation stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    SimulationSettings,
    Simulation { games: usize, doors: usize },
    GameSettings,
    Game { doors: usize },
    About,
}

/// What a screen asks the console to do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    /// Show the same screen again
    Remain,
    Push(Screen),
    Replace(Screen),
    Pop,
    Quit,
}

/// A line of user input
enum Input<T> {
    Value(T),
    Back,
    Closed,
}

/// Wins per strategy over the interactive session
#[derive(Debug, Default, Clone, Copy)]
struct SessionTally {
    stayed: (u64, u64),
    switched: (u64, u64),
}

impl SessionTally {
    fn record(&mut self, strategy: Strategy, won: bool) {
        let entry = match strategy {
            Strategy::Stay => &mut self.stayed,
            Strategy::Switch => &mut self.switched,
        };
        entry.0 += 1;
        if won {
            entry.1 += 1;
        }
    }
}

pub struct Console<I, O> {
    input: I,
    output: O,
    stack: Vec<Screen>,
    default_doors: usize,
    rng: StdRng,
    tally: SessionTally,
}

impl<I: BufRead, O: Write> Console<I, O> {
    pub fn new(input: I, output: O, default_doors: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Console {
            input,
            output,
            stack: Vec::new(),
            default_doors: default_doors.max(MIN_DOORS),
            rng,
            tally: SessionTally::default(),
        }
    }

    /// Runs screens until the user quits or the input closes
    pub fn run(&mut self) -> Result<()> {
        self.stack.push(Screen::Menu);

        while let Some(&screen) = self.stack.last() {
            let transition = match screen {
                Screen::Menu => self.menu()?,
                Screen::SimulationSettings => self.simulation_settings()?,
                Screen::Simulation { games, doors } => self.simulation(games, doors)?,
                Screen::GameSettings => self.game_settings()?,
                Screen::Game { doors } => self.game_round(doors)?,
                Screen::About => self.about()?,
            };
            debug!("{:?}: {:?}", screen, transition);

            match transition {
                Transition::Remain => {}
                Transition::Push(next) => self.stack.push(next),
                Transition::Replace(next) => {
                    self.stack.pop();
                    self.stack.push(next);
                }
                Transition::Pop => {
                    self.stack.pop();
                }
                Transition::Quit => self.stack.clear(),
            }
        }

        writeln!(self.output, "Goodbye!")?;
        Ok(())
    }

    fn menu(&mut self) -> Result<Transition> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", "MONTY HALL PROBLEM SIMULATOR".blue().bold())?;
        writeln!(self.output, "{}", "The famous probability puzzle".dimmed())?;
        writeln!(self.output, "  1) Statistical Simulation")?;
        writeln!(self.output, "  2) Interactive Game")?;
        writeln!(self.output, "  3) About")?;
        writeln!(self.output, "  4) Quit")?;

        let Some(line) = self.read_line("Select an option: ")? else {
            return Ok(Transition::Quit);
        };
        Ok(match line.as_str() {
            "1" => Transition::Push(Screen::SimulationSettings),
            "2" => Transition::Push(Screen::GameSettings),
            "3" => Transition::Push(Screen::About),
            "4" | "q" | "quit" => Transition::Quit,
            other => {
                writeln!(self.output, "Unknown option '{}'", other)?;
                Transition::Remain
            }
        })
    }

    fn simulation_settings(&mut self) -> Result<Transition> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", "Simulation Settings".bold())?;

        let doors = match self.read_number("Number of doors (minimum 3)", self.default_doors, MIN_DOORS)? {
            Input::Value(doors) => doors,
            Input::Back => return Ok(Transition::Pop),
            Input::Closed => return Ok(Transition::Quit),
        };
        let games = match self.read_number("Number of games", DEFAULT_NUM_GAMES, 1)? {
            Input::Value(games) => games,
            Input::Back => return Ok(Transition::Pop),
            Input::Closed => return Ok(Transition::Quit),
        };

        Ok(Transition::Replace(Screen::Simulation { games, doors }))
    }

    fn simulation(&mut self, games: usize, doors: usize) -> Result<Transition> {
        writeln!(self.output)?;
        writeln!(
            self.output,
            "{} - {} games with {} doors",
            "Statistical Simulation".blue().bold(),
            group_thousands(games as u64),
            doors
        )?;

        let config = SimulationConfig::default()
            .with_num_games(games)
            .with_num_doors(doors)
            .with_seed(self.rng.gen());
        let mut run = config.start().context("could not start simulation")?;

        let total = group_thousands(games as u64);
        for checkpoint in &mut run {
            write!(
                self.output,
                "\rCompleted {} / {} games...",
                group_thousands(checkpoint.completed as u64),
                total
            )?;
            self.output.flush()?;
        }
        writeln!(self.output)?;
        writeln!(self.output, "{}", "SIMULATION COMPLETE!".green().bold())?;

        let results = run.into_results();
        write!(self.output, "{}", Report::new(&results, Verbosity::Detailed))?;

        Ok(match self.read_line("Press Enter to return to the menu ")? {
            Some(_) => Transition::Pop,
            None => Transition::Quit,
        })
    }

    fn game_settings(&mut self) -> Result<Transition> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", "Game Settings".bold())?;

        Ok(match self.read_number("Number of doors (minimum 3)", self.default_doors, MIN_DOORS)? {
            Input::Value(doors) => Transition::Replace(Screen::Game { doors }),
            Input::Back => Transition::Pop,
            Input::Closed => Transition::Quit,
        })
    }

    /// Plays one round; the screen stays on the stack while the player keeps playing
    fn game_round(&mut self, doors: usize) -> Result<Transition> {
        let mut game = GameState::with_rng(doors, &mut self.rng)?;
        let last = doors - 1;

        writeln!(self.output)?;
        writeln!(
            self.output,
            "{} - {} doors",
            "Interactive Game".blue().bold(),
            doors
        )?;
        writeln!(self.output, "One door has a car, the others have goats!")?;

        // Initial pick
        loop {
            let prompt = format!("Choose your initial door (0-{}), or 'b' to go back: ", last);
            match self.read_door(&prompt)? {
                Input::Value(door) => match game.make_initial_choice(door) {
                    Ok(()) => break,
                    Err(err) => writeln!(self.output, "{}", err.to_string().red())?,
                },
                Input::Back => return Ok(Transition::Pop),
                Input::Closed => return Ok(Transition::Quit),
            }
        }

        game.reveal_by_host_with_rng(&mut self.rng);
        let choice = game.player_choice().unwrap_or_default();
        self.show_doors(&game, choice)?;
        writeln!(self.output, "{}", "Monty revealed the goats! Now choose:".bold())?;
        writeln!(
            self.output,
            "{}",
            format!(
                "Probability hint: Stay = {:.1}%, Switch = {:.1}%",
                Strategy::Stay.theoretical_rate(doors) * 100.0,
                Strategy::Switch.theoretical_rate(doors) * 100.0
            )
            .dimmed()
        )?;

        // Final pick
        let options = game
            .switch_options()
            .iter()
            .map(|door| door.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        loop {
            let prompt = format!(
                "Enter 's' to stay with door {}, or switch to door {}: ",
                choice, options
            );
            let Some(line) = self.read_line(&prompt)? else {
                return Ok(Transition::Quit);
            };
            let door = if line.eq_ignore_ascii_case("s") {
                choice
            } else {
                match line.parse() {
                    Ok(door) => door,
                    Err(_) => {
                        writeln!(self.output, "Please enter 's' or a door number")?;
                        continue;
                    }
                }
            };
            match game.make_final_choice(door) {
                Ok(()) => break,
                Err(err) => writeln!(self.output, "{}", err.to_string().red())?,
            }
        }

        self.show_result(&game)?;

        Ok(match self.read_line("Play again? [Y/n] ")? {
            None => Transition::Quit,
            Some(answer) if answer.eq_ignore_ascii_case("n") => Transition::Pop,
            Some(_) => Transition::Remain,
        })
    }

    fn show_doors(&mut self, game: &GameState, choice: usize) -> Result<()> {
        writeln!(self.output, "You chose Door {}", choice)?;
        for door in 0..game.num_doors() {
            let status = if door == choice {
                "YOUR CHOICE".green().bold()
            } else if game.revealed_doors().contains(&door) {
                "GOAT".red()
            } else {
                "? UNKNOWN".yellow()
            };
            writeln!(self.output, "  Door {}: {}", door, status)?;
        }
        Ok(())
    }

    fn show_result(&mut self, game: &GameState) -> Result<()> {
        let won = game.did_player_win();
        let strategy = game.strategy_played().unwrap_or(Strategy::Stay);
        self.tally.record(strategy, won);

        writeln!(self.output)?;
        if won {
            writeln!(self.output, "{}", "CONGRATULATIONS! YOU WON THE CAR!".green().bold())?;
        } else {
            writeln!(
                self.output,
                "{}",
                "Sorry, you got a goat. Better luck next time!".red().bold()
            )?;
        }

        for door in 0..game.num_doors() {
            let content = if door == game.prize_door() {
                "CAR".green().bold()
            } else {
                "GOAT".red()
            };
            writeln!(self.output, "  Door {}: {}", door, content)?;
        }

        let verb = match strategy {
            Strategy::Stay => "STAYED",
            Strategy::Switch => "SWITCHED",
        };
        writeln!(self.output, "Your journey:")?;
        writeln!(
            self.output,
            "  * Initial choice: Door {}",
            game.player_choice().unwrap_or_default()
        )?;
        writeln!(
            self.output,
            "  * Final choice: Door {}",
            game.final_choice().unwrap_or_default()
        )?;
        writeln!(self.output, "  * Strategy: {}", verb)?;
        writeln!(self.output, "  * Car was behind: Door {}", game.prize_door())?;

        let (stay_played, stay_won) = self.tally.stayed;
        let (switch_played, switch_won) = self.tally.switched;
        writeln!(
            self.output,
            "Session: stayed {} time(s), won {}; switched {} time(s), won {}",
            stay_played, stay_won, switch_played, switch_won
        )?;
        Ok(())
    }

    fn about(&mut self) -> Result<Transition> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", ABOUT)?;
        Ok(match self.read_line("Press Enter to return to the menu ")? {
            Some(_) => Transition::Pop,
            None => Transition::Quit,
        })
    }

    /// Prompts for a number, re-asking until it parses and is at least `min`
    fn read_number(&mut self, label: &str, default: usize, min: usize) -> Result<Input<usize>> {
        loop {
            let prompt = format!("{} [{}] ('c' to cancel): ", label, default);
            let Some(line) = self.read_line(&prompt)? else {
                return Ok(Input::Closed);
            };
            if line.eq_ignore_ascii_case("c") {
                return Ok(Input::Back);
            }
            if line.is_empty() {
                return Ok(Input::Value(default));
            }
            match line.replace(',', "").parse::<usize>() {
                Ok(value) if value >= min => return Ok(Input::Value(value)),
                Ok(value) => writeln!(self.output, "{} is too small, the minimum is {}", value, min)?,
                Err(_) => writeln!(self.output, "Please enter a whole number")?,
            }
        }
    }

    /// Prompts for a door index; range checks are left to the game
    fn read_door(&mut self, prompt: &str) -> Result<Input<usize>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(Input::Closed);
            };
            if line.eq_ignore_ascii_case("b") {
                return Ok(Input::Back);
            }
            match line.parse::<usize>() {
                Ok(door) => return Ok(Input::Value(door)),
                Err(_) => writeln!(self.output, "Please enter a door number")?,
            }
        }
    }

    /// Reads one trimmed line; `None` once the input is closed
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
