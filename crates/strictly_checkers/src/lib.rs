//! Strictly Checkers - a checkers rules engine
//!
//! Board representation, move legality, captures and turn order for a
//! two-player game on an 8x8 board. Input and output live elsewhere: callers
//! hand raw coordinates to a [`Game`] through a [`MoveSource`] and render the
//! [`Board`] however they like.
//!
//! # Rules
//!
//! - White moves first, toward row 0; Black moves toward row 7.
//! - A piece steps one square diagonally forward onto an empty square, or
//!   jumps two squares diagonally forward over an opposing piece, capturing it.
//! - A side with no legal move on its turn loses.
//! - An illegal move changes nothing; by default the turn still passes
//!   (see [`IllegalMovePolicy`]).
//!
//! # Example
//!
//! ```
//! use strictly_checkers::{Color, Game};
//!
//! let mut game = Game::new("Player 1", "Player 2");
//! assert!(game.is_valid_move(5, 0, 4, 1));
//! assert!(!game.is_valid_move(2, 1, 3, 0)); // Black's piece, White's turn
//!
//! game.submit(strictly_checkers::RawMove::new(5, 0, 4, 1));
//! assert_eq!(game.to_move(), Color::Black);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod game;
mod player;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

// Crate-level exports - Domain types
pub use types::{BOARD_SIZE, Color, Coord, Occupancy, SQUARE_COUNT};

// Crate-level exports - Board
pub use board::Board;

// Crate-level exports - Moves
pub use action::{Move, MoveError, RawMove};

// Crate-level exports - Players and game controller
pub use game::{Game, IllegalMovePolicy, MoveSource, Outcome, Status, TurnReport};
pub use player::Player;
