//! Turn sequencing for a two-player game.
//!
//! [`Game`] owns the board and both players, decides whether a move is
//! legal for the side to move, applies it, and detects the end of the game.
//! Input comes from a [`MoveSource`], which keeps the controller free of any
//! console or network concerns.

use crate::action::{Move, MoveError, RawMove};
use crate::board::Board;
use crate::contracts::{Attempt, Contract, MoveContract};
use crate::player::Player;
use crate::rules;
use crate::types::{Color, Coord};
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// What happens to the turn when a submitted move is rejected.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum IllegalMovePolicy {
    /// The move is ignored and the turn passes to the opponent.
    #[default]
    Forfeit,
    /// The move is ignored and the same player moves again.
    Retry,
}

/// Result of submitting one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnReport {
    /// The move was legal and has been applied.
    Moved {
        /// Color that moved.
        mover: Color,
        /// The applied move.
        mv: Move,
        /// Square of the captured piece, for jumps.
        captured: Option<Coord>,
    },
    /// The move was illegal; the board is unchanged.
    Rejected {
        /// Color that attempted the move.
        mover: Color,
        /// Coordinates as submitted.
        attempt: RawMove,
        /// Why the move was refused.
        reason: MoveError,
    },
}

impl TurnReport {
    /// True if the move was refused.
    pub fn is_rejected(&self) -> bool {
        matches!(self, TurnReport::Rejected { .. })
    }

    /// Color that submitted the move.
    pub fn mover(&self) -> Color {
        match self {
            TurnReport::Moved { mover, .. } | TurnReport::Rejected { mover, .. } => *mover,
        }
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Outcome {
    /// Side to move that had no legal move.
    stuck: Color,
}

impl Outcome {
    /// The side left without a legal move.
    pub fn stuck(&self) -> Color {
        self.stuck
    }

    /// The side that won.
    pub fn winner(&self) -> Color {
        self.stuck.opponent()
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} wins: {} has no legal moves", self.winner(), self.stuck)
    }
}

/// Phase of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Waiting for the given color to move.
    AwaitingMove(Color),
    /// The game has ended.
    GameOver(Outcome),
}

/// Supplies moves to [`Game::play`] and hears back about each turn.
pub trait MoveSource {
    /// Error raised when no move can be obtained (closed input, I/O failure).
    type Error;

    /// Gets the next move for the current player.
    fn next_move(&mut self, game: &Game) -> Result<RawMove, Self::Error>;

    /// Called after every submitted move with the result.
    fn turn_played(&mut self, _game: &Game, _report: &TurnReport) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// A game of checkers between two players.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    white: Player,
    black: Player,
    to_move: Color,
    policy: IllegalMovePolicy,
    started_at: DateTime<Utc>,
}

impl Game {
    /// Creates a game in the starting position with White to move.
    #[instrument(skip_all)]
    pub fn new(white_name: impl Into<String>, black_name: impl Into<String>) -> Self {
        let game = Self {
            board: Board::new(),
            white: Player::new(white_name, Color::White),
            black: Player::new(black_name, Color::Black),
            to_move: Color::White,
            policy: IllegalMovePolicy::default(),
            started_at: Utc::now(),
        };
        info!(white = %game.white.name(), black = %game.black.name(), "New game");
        game
    }

    /// Replaces the illegal-move policy.
    pub fn with_policy(mut self, policy: IllegalMovePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replaces the board, for starting from a set-up position.
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Replaces the side to move.
    pub fn with_to_move(mut self, color: Color) -> Self {
        self.to_move = color;
        self
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player of `color`.
    pub fn player(&self, color: Color) -> &Player {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> &Player {
        self.player(self.to_move)
    }

    /// Returns the color to move.
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    /// Returns the illegal-move policy.
    pub fn policy(&self) -> IllegalMovePolicy {
        self.policy
    }

    /// When the game was created.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Time since the game was created.
    pub fn elapsed(&self) -> TimeDelta {
        Utc::now() - self.started_at
    }

    /// Checks a move for the side to move, returning it in validated form.
    ///
    /// # Errors
    ///
    /// Returns the first rule the move breaks, checked in this order: range,
    /// ownership of the origin, emptiness of the destination, shape.
    #[instrument(skip(self), fields(mover = %self.to_move))]
    pub fn validate_move(&self, raw: RawMove) -> Result<Move, MoveError> {
        let mv = raw.resolve()?;
        MoveContract::pre(
            &self.board,
            &Attempt {
                mover: self.to_move,
                mv,
            },
        )?;
        Ok(mv)
    }

    /// True if the side to move may play `from` to `to`.
    ///
    /// Out-of-range coordinates are simply illegal.
    pub fn is_valid_move(&self, from_row: i32, from_col: i32, to_row: i32, to_col: i32) -> bool {
        self.validate_move(RawMove::new(from_row, from_col, to_row, to_col))
            .is_ok()
    }

    /// True if the side to move has no legal move left.
    #[instrument(skip(self), fields(mover = %self.to_move))]
    pub fn is_game_over(&self) -> bool {
        !rules::has_legal_move(&self.board, self.to_move)
    }

    /// The outcome, once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.is_game_over().then_some(Outcome {
            stuck: self.to_move,
        })
    }

    /// Current phase of the game.
    pub fn status(&self) -> Status {
        match self.outcome() {
            Some(outcome) => Status::GameOver(outcome),
            None => Status::AwaitingMove(self.to_move),
        }
    }

    /// Plays one move for the side to move.
    ///
    /// Legal moves are applied, capturing on jumps. Illegal moves leave the
    /// board untouched. The turn then passes to the opponent, except for a
    /// rejected move under [`IllegalMovePolicy::Retry`].
    #[instrument(skip(self), fields(mover = %self.to_move))]
    pub fn submit(&mut self, raw: RawMove) -> TurnReport {
        let mover = self.to_move;
        let report = match self.validate_move(raw) {
            Ok(mv) => {
                #[cfg(debug_assertions)]
                let before = self.board.clone();

                let captured = self.board.move_piece(mv.from, mv.to);
                debug!(%mv, ?captured, "Move applied");

                #[cfg(debug_assertions)]
                {
                    let checked = MoveContract::post(&before, &self.board);
                    if let Err(violations) = &checked {
                        tracing::error!(?violations, "Board invariants violated after move");
                    }
                    debug_assert!(checked.is_ok(), "Board invariants violated after move");
                }

                TurnReport::Moved {
                    mover,
                    mv,
                    captured,
                }
            }
            Err(reason) => {
                warn!(%raw, %reason, "Move rejected");
                TurnReport::Rejected {
                    mover,
                    attempt: raw,
                    reason,
                }
            }
        };

        if !(report.is_rejected() && self.policy == IllegalMovePolicy::Retry) {
            self.to_move = mover.opponent();
        }
        report
    }

    /// Runs the game to completion, pulling moves from `source`.
    ///
    /// # Errors
    ///
    /// Propagates any error from the source; the game stays in the state
    /// reached so far.
    #[instrument(skip_all)]
    pub fn play<S: MoveSource>(&mut self, source: &mut S) -> Result<Outcome, S::Error> {
        loop {
            if let Some(outcome) = self.outcome() {
                info!(%outcome, elapsed_secs = self.elapsed().num_seconds(), "Game over");
                return Ok(outcome);
            }

            debug!(player = %self.current_player(), "Waiting for move");
            let raw = source.next_move(self)?;
            let report = self.submit(raw);
            source.turn_played(self, &report)?;
        }
    }
}
