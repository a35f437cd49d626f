//! Console front end for strictly_checkers.
//!
//! Reads moves as `row column` pairs, prints the board between turns and
//! reports the winner. Everything is generic over the input and output
//! streams so a whole game can be driven from a string.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;

pub use cli::Cli;
pub use config::{Config, ConfigError};
pub use console::{Console, InputError, parse_pair};

use std::io::{BufRead, Write};
use strictly_checkers::{Game, Outcome};
use tracing::{info, instrument, warn};

/// Plays one game on the given streams.
///
/// Returns the outcome, or `None` if input ran out before the game ended.
///
/// # Errors
///
/// Fails if the console cannot be written to or read from.
#[instrument(skip_all, fields(white = %config.white_name(), black = %config.black_name()))]
pub fn run<R: BufRead, W: Write>(
    config: &Config,
    input: R,
    output: W,
) -> anyhow::Result<Option<Outcome>> {
    let (white, black) = (config.white_name().as_str(), config.black_name().as_str());
    let mut game = Game::new(white, black).with_policy(*config.illegal_moves());
    let mut console = Console::new(input, output);

    match game.play(&mut console) {
        Ok(outcome) => {
            console.show_outcome(&game, &outcome)?;
            Ok(Some(outcome))
        }
        Err(InputError::Closed) => {
            warn!("Input closed before the game finished");
            let (_, mut output) = console.into_inner();
            writeln!(output)?;
            writeln!(output, "Input closed; game abandoned.")?;
            info!(elapsed_secs = game.elapsed().num_seconds(), "Game abandoned");
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}
