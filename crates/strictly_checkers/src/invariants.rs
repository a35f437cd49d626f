//! First-class invariants for checkers boards.
//!
//! Invariants are logical properties that hold for every board reachable
//! from the starting position by legal moves.

use crate::board::Board;
use crate::types::Color;
use strum::IntoEnumIterator;
use tracing::warn;

/// Pieces each side starts with; no board may hold more.
pub const PIECES_PER_SIDE: usize = 12;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description)
    }
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: pieces only ever stand on dark squares.
pub struct PiecesOnDarkSquares;

impl Invariant<Board> for PiecesOnDarkSquares {
    fn holds(board: &Board) -> bool {
        let light = Color::iter()
            .flat_map(|color| board.pieces(color))
            .find(|c| !c.is_dark());
        if let Some(square) = light {
            warn!(%square, "Piece found on a light square");
        }
        light.is_none()
    }

    fn description() -> &'static str {
        "Pieces stand only on dark squares"
    }
}

/// Invariant: neither side has more than its starting pieces.
pub struct PieceCountBounded;

impl Invariant<Board> for PieceCountBounded {
    fn holds(board: &Board) -> bool {
        let white = board.count(Color::White);
        let black = board.count(Color::Black);
        let valid = white <= PIECES_PER_SIDE && black <= PIECES_PER_SIDE;
        if !valid {
            warn!(white, black, "Piece count exceeds starting count");
        }
        valid
    }

    fn description() -> &'static str {
        "Each side has at most 12 pieces"
    }
}

/// Every board invariant.
pub type CheckersInvariants = (PiecesOnDarkSquares, PieceCountBounded);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Coord, Occupancy};

    #[test]
    fn test_starting_board_satisfies_all() {
        assert!(CheckersInvariants::check_all(&Board::new()).is_ok());
    }

    #[test]
    fn test_light_square_piece_detected() {
        let mut board = Board::empty();
        board.set(Coord::new(0, 0).unwrap(), Occupancy::Occupied(Color::Black));
        assert!(!PiecesOnDarkSquares::holds(&board));
        assert!(PieceCountBounded::holds(&board));
    }

    #[test]
    fn test_too_many_pieces_detected() {
        let mut board = Board::new();
        board.set(Coord::new(3, 0).unwrap(), Occupancy::Occupied(Color::Black));
        assert!(!PieceCountBounded::holds(&board));
        let violations = CheckersInvariants::check_all(&board).unwrap_err();
        assert_eq!(
            violations,
            vec![InvariantViolation::new(
                <PieceCountBounded as Invariant<Board>>::description()
            )]
        );
    }
}
