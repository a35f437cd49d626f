//! Game rules for checkers.
//!
//! Pure functions over a [`Board`](crate::Board) and the color to move.
//! Rules are kept apart from board storage so contracts and the game
//! controller can compose them.

pub mod movement;
pub mod termination;

pub use movement::{Shape, shape};
pub use termination::{has_legal_move, legal_moves};
