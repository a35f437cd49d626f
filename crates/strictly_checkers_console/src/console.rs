//! Text console that plays both sides of a game.
//!
//! Both players share one input stream and one output stream, taking turns
//! at the keyboard.

use std::io::{BufRead, Write};
use strictly_checkers::{Game, IllegalMovePolicy, MoveSource, Outcome, RawMove, TurnReport};
use tracing::{debug, instrument};

const FROM_PROMPT: &str = "Enter the coordinates of the piece you want to move (row column): ";
const TO_PROMPT: &str =
    "Enter the coordinates of the square you want to move the piece to (row column): ";

/// Error reading a move from the console.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum InputError {
    /// The line was not two whole numbers.
    #[display("Expected two whole numbers (row column), got {line:?}")]
    Malformed {
        /// The offending line, without its line ending.
        line: String,
    },

    /// Input ended before a move was entered.
    #[display("Input closed")]
    Closed,

    /// Reading or writing the console failed.
    #[display("Console I/O failed: {_0}")]
    Io(std::io::Error),
}

impl From<std::io::Error> for InputError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Parses a `row column` answer.
///
/// Exactly two integers separated by whitespace; anything else is malformed.
/// Range is not checked here; the game rejects off-board squares itself.
pub fn parse_pair(line: &str) -> Result<(i32, i32), InputError> {
    let malformed = || InputError::Malformed {
        line: line.trim_end_matches(['\r', '\n']).to_string(),
    };
    let mut parts = line.split_whitespace();
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed());
    };
    let row = row.parse().map_err(|_| malformed())?;
    let col = col.parse().map_err(|_| malformed())?;
    Ok((row, col))
}

/// Console front end over any line reader and writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Gives back the underlying streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Prompts until a well-formed `row column` line arrives.
    ///
    /// Malformed lines are reported and the prompt repeats; they do not cost
    /// the player a turn.
    #[instrument(skip(self))]
    fn ask_pair(&mut self, prompt: &str) -> Result<(i32, i32), InputError> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            let mut bytes = Vec::new();
            if self.input.read_until(b'\n', &mut bytes)? == 0 {
                return Err(InputError::Closed);
            }

            // Invalid UTF-8 becomes replacement characters and fails to parse.
            let line = String::from_utf8_lossy(&bytes);
            match parse_pair(&line) {
                Ok(pair) => return Ok(pair),
                Err(err) => {
                    debug!(%err, "Re-prompting after malformed input");
                    writeln!(self.output, "{err}")?;
                }
            }
        }
    }

    /// Prints the final board, the winner and how long the game took.
    #[instrument(skip_all)]
    pub fn show_outcome(&mut self, game: &Game, outcome: &Outcome) -> Result<(), InputError> {
        let winner = game.player(outcome.winner());
        let stuck = game.player(outcome.stuck());
        let elapsed = game.elapsed();

        write!(self.output, "{}", game.board())?;
        writeln!(
            self.output,
            "Game over! {} wins: {} has no legal moves.",
            winner,
            stuck.name()
        )?;
        writeln!(
            self.output,
            "Game time: {}m {:02}s",
            elapsed.num_minutes(),
            elapsed.num_seconds() % 60
        )?;
        self.output.flush()?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> MoveSource for Console<R, W> {
    type Error = InputError;

    fn next_move(&mut self, game: &Game) -> Result<RawMove, InputError> {
        write!(self.output, "{}", game.board())?;
        writeln!(
            self.output,
            "{}, it's your turn!",
            game.current_player().name()
        )?;

        let (from_row, from_col) = self.ask_pair(FROM_PROMPT)?;
        let (to_row, to_col) = self.ask_pair(TO_PROMPT)?;
        Ok(RawMove::new(from_row, from_col, to_row, to_col))
    }

    fn turn_played(&mut self, game: &Game, report: &TurnReport) -> Result<(), InputError> {
        if let TurnReport::Rejected { reason, .. } = report {
            match game.policy() {
                IllegalMovePolicy::Forfeit => writeln!(
                    self.output,
                    "Illegal move: {reason}. The turn passes to {}.",
                    game.current_player().name()
                )?,
                IllegalMovePolicy::Retry => {
                    writeln!(self.output, "Illegal move: {reason}. Try again.")?
                }
            }
        }
        Ok(())
    }
}
