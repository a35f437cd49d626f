//! Command-line interface for strictly_checkers.

use clap::Parser;
use strictly_checkers::IllegalMovePolicy;

/// Strictly Checkers - two players, one console
#[derive(Parser, Debug, Default)]
#[command(name = "strictly_checkers")]
#[command(about = "Two-player checkers in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Name of the White player (moves first)
    #[arg(long)]
    pub white: Option<String>,

    /// Name of the Black player
    #[arg(long)]
    pub black: Option<String>,

    /// What an illegal move costs: "forfeit" passes the turn, "retry" asks again
    #[arg(long, value_name = "POLICY")]
    pub illegal_moves: Option<IllegalMovePolicy>,
}
