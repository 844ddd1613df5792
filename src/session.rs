//! The interactive game loop tying the engine to its input and output
//! collaborators. Generic over reader and writer so tests can script a
//! whole game with in-memory buffers.

use std::io::{BufRead, Write};

use rand::Rng;

use crate::common::{GameError, ShotOutcome};
use crate::coord::Coord;
use crate::game::{GameEngine, GameStatus};
use crate::render::{render_board, Visibility};

pub struct Session<R: Rng, In: BufRead, Out: Write> {
    engine: GameEngine<R>,
    input: In,
    output: Out,
}

impl<R: Rng, In: BufRead, Out: Write> Session<R, In, Out> {
    /// New session with freshly deployed fleets.
    pub fn new(rng: R, input: In, output: Out) -> anyhow::Result<Self> {
        let mut engine = GameEngine::new(rng);
        engine.deploy_fleets()?;
        Ok(Self {
            engine,
            input,
            output,
        })
    }

    /// Wrap an engine whose fleets are already placed (deterministic tests).
    pub fn with_engine(engine: GameEngine<R>, input: In, output: Out) -> Self {
        Self {
            engine,
            input,
            output,
        }
    }

    pub fn engine(&self) -> &GameEngine<R> {
        &self.engine
    }

    /// Consume the session, handing back the engine and the output
    /// collaborator (tests inspect the rendered transcript).
    pub fn into_parts(self) -> (GameEngine<R>, Out) {
        (self.engine, self.output)
    }

    /// Run the alternating turn loop to a terminal state: player shoots,
    /// win check, computer shoots, loss check. Returns the final status.
    pub fn run(&mut self) -> anyhow::Result<GameStatus> {
        loop {
            writeln!(self.output, "\nYour turn:")?;
            render_board(
                &mut self.output,
                self.engine.player_shots(),
                "Target Board",
                Visibility::HideShips,
            )?;
            let outcome = self.player_turn()?;
            match outcome {
                ShotOutcome::Miss => writeln!(self.output, "Miss!")?,
                ShotOutcome::Hit => writeln!(self.output, "Hit!")?,
                ShotOutcome::Sunk(name) => {
                    writeln!(self.output, "Hit! You sunk the computer's {}!", name)?
                }
            }
            if self.engine.status() == GameStatus::Won {
                writeln!(self.output, "Congratulations! You sunk all the computer's ships!")?;
                break;
            }

            writeln!(self.output, "\nComputer's turn:")?;
            let (coord, outcome) = self.engine.computer_shot()?;
            writeln!(self.output, "Computer targets: {}", coord)?;
            match outcome {
                ShotOutcome::Miss => writeln!(self.output, "Computer missed!")?,
                ShotOutcome::Hit => writeln!(self.output, "Computer hit your ship!")?,
                ShotOutcome::Sunk(name) => {
                    writeln!(self.output, "Computer hit your {} and sunk it!", name)?
                }
            }
            if self.engine.status() == GameStatus::Lost {
                writeln!(self.output, "Game over! The computer sunk all your ships!")?;
                break;
            }

            render_board(
                &mut self.output,
                self.engine.player_board(),
                "Your Board (Hits/Misses Only)",
                Visibility::HideShips,
            )?;
        }

        writeln!(self.output, "\nFinal boards:")?;
        render_board(
            &mut self.output,
            self.engine.player_board(),
            "Your Board",
            Visibility::RevealAll,
        )?;
        render_board(
            &mut self.output,
            self.engine.computer_board(),
            "Computer's Board (Revealed)",
            Visibility::RevealAll,
        )?;
        Ok(self.engine.status())
    }

    /// Prompt until one shot resolves. Malformed coordinates and repeated
    /// targets re-prompt within the same turn and never mutate game state.
    fn player_turn(&mut self) -> anyhow::Result<ShotOutcome> {
        loop {
            write!(self.output, "Enter target coordinate (e.g., A5): ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                anyhow::bail!("input closed before the game finished");
            }
            let coord: Coord = match line.trim().parse() {
                Ok(coord) => coord,
                Err(err) => {
                    writeln!(
                        self.output,
                        "Invalid coordinate: {}. Format is a letter A-J followed by a number 1-10.",
                        err
                    )?;
                    continue;
                }
            };
            match self.engine.player_shot(coord) {
                Ok(outcome) => return Ok(outcome),
                Err(GameError::AlreadyTargeted) => {
                    writeln!(
                        self.output,
                        "You've already targeted {}. Try again.",
                        coord
                    )?;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
