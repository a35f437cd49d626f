//! First-class move types for checkers.
//!
//! A [`RawMove`] is whatever four integers the player typed. A [`Move`] is a
//! move whose squares are on the board; it says nothing about legality, which
//! is decided by the contracts in [`crate::contracts`].

use crate::types::Coord;
use tracing::instrument;

/// Unvalidated move coordinates as supplied by the input boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_new::new)]
pub struct RawMove {
    /// Row of the piece to move.
    pub from_row: i32,
    /// Column of the piece to move.
    pub from_col: i32,
    /// Destination row.
    pub to_row: i32,
    /// Destination column.
    pub to_col: i32,
}

impl RawMove {
    /// Range-checks both squares.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] for the first coordinate pair that is
    /// off the board.
    #[instrument]
    pub fn resolve(self) -> Result<Move, MoveError> {
        let from = Coord::new(self.from_row, self.from_col)?;
        let to = Coord::new(self.to_row, self.to_col)?;
        Ok(Move::new(from, to))
    }
}

impl From<Move> for RawMove {
    fn from(mv: Move) -> Self {
        Self {
            from_row: mv.from.row(),
            from_col: mv.from.col(),
            to_row: mv.to.row(),
            to_col: mv.to.col(),
        }
    }
}

impl std::fmt::Display for RawMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}) -> ({}, {})",
            self.from_row, self.from_col, self.to_row, self.to_col
        )
    }
}

/// A move between two on-board squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// Square the piece leaves.
    pub from: Coord,
    /// Square the piece lands on.
    pub to: Coord,
}

impl Move {
    /// Creates a new move.
    pub fn new(from: Coord, to: Coord) -> Self {
        Self { from, to }
    }

    /// Row distance, positive when moving toward row 7.
    pub fn row_delta(&self) -> i32 {
        self.to.row() - self.from.row()
    }

    /// Column distance, positive when moving toward column 7.
    pub fn col_delta(&self) -> i32 {
        self.to.col() - self.from.col()
    }

    /// True for a two-square diagonal step.
    pub fn is_jump(&self) -> bool {
        self.row_delta().abs() == 2 && self.col_delta().abs() == 2
    }

    /// The square jumped over, for two-square diagonal steps.
    pub fn midpoint(&self) -> Option<Coord> {
        if !self.is_jump() {
            return None;
        }
        Coord::new(
            (self.from.row() + self.to.row()) / 2,
            (self.from.col() + self.to.col()) / 2,
        )
        .ok()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Reason a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// A coordinate lies outside the board.
    #[display("Square ({row}, {col}) is off the board")]
    OutOfRange {
        /// Offending row.
        row: i32,
        /// Offending column.
        col: i32,
    },

    /// The origin square does not hold one of the mover's pieces.
    #[display("Square {} does not hold one of your pieces", _0)]
    NotYourPiece(Coord),

    /// The destination square is not empty.
    #[display("Square {} is already occupied", _0)]
    DestinationOccupied(Coord),

    /// The move is not a forward diagonal step or jump.
    #[display("Pieces move one square diagonally forward, or jump two")]
    IllegalShape,

    /// A jump whose midpoint holds no opposing piece.
    #[display("There is no opposing piece to capture on {}", _0)]
    NothingToCapture(Coord),
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(row: i32, col: i32) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn test_resolve_rejects_destination_off_board() {
        let raw = RawMove::new(2, 1, 3, -1);
        assert_eq!(raw.resolve(), Err(MoveError::OutOfRange { row: 3, col: -1 }));
    }

    #[test]
    fn test_midpoint_only_for_jumps() {
        let step = Move::new(coord(2, 1), coord(3, 2));
        assert_eq!(step.midpoint(), None);

        let jump = Move::new(coord(5, 4), coord(3, 2));
        assert!(jump.is_jump());
        assert_eq!(jump.midpoint(), Some(coord(4, 3)));
    }

    #[test]
    fn test_error_messages_name_the_square() {
        let err = MoveError::DestinationOccupied(coord(3, 2));
        assert_eq!(err.to_string(), "Square (3, 2) is already occupied");
    }
}
