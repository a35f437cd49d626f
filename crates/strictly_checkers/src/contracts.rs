//! Contract-based validation for checkers moves.
//!
//! Each precondition is a small named check; [`LegalMove`] composes them in
//! the order the rules are applied. Postconditions compare the board before
//! and after a move against the invariants in [`crate::invariants`].

use crate::action::{Move, MoveError};
use crate::board::Board;
use crate::invariants::{CheckersInvariants, InvariantSet, InvariantViolation};
use crate::rules::{Shape, shape};
use crate::types::{Color, Occupancy};
use strum::IntoEnumIterator;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// A move together with the color attempting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attempt {
    /// Color of the player moving.
    pub mover: Color,
    /// The move being attempted.
    pub mv: Move,
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the origin holds one of the mover's pieces.
pub struct OwnPiece;

impl OwnPiece {
    /// Checks the origin square.
    pub fn check(mv: &Move, mover: Color, board: &Board) -> Result<(), MoveError> {
        if board.get(mv.from) == Occupancy::Occupied(mover) {
            Ok(())
        } else {
            Err(MoveError::NotYourPiece(mv.from))
        }
    }
}

/// Precondition: the destination is empty.
pub struct DestinationEmpty;

impl DestinationEmpty {
    /// Checks the destination square.
    pub fn check(mv: &Move, board: &Board) -> Result<(), MoveError> {
        if board.get(mv.to).is_empty() {
            Ok(())
        } else {
            Err(MoveError::DestinationOccupied(mv.to))
        }
    }
}

/// Precondition: a forward diagonal step, or a forward jump over an opponent.
pub struct ForwardDiagonal;

impl ForwardDiagonal {
    /// Checks the move shape and, for jumps, the captured square.
    pub fn check(mv: &Move, mover: Color, board: &Board) -> Result<(), MoveError> {
        match shape(mv, mover) {
            Some(Shape::Step) => Ok(()),
            Some(Shape::Jump { over }) => {
                if board.get(over).color() == Some(mover.opponent()) {
                    Ok(())
                } else {
                    Err(MoveError::NothingToCapture(over))
                }
            }
            None => Err(MoveError::IllegalShape),
        }
    }
}

/// Composite precondition: every rule a move must satisfy.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    pub fn check(mv: &Move, mover: Color, board: &Board) -> Result<(), MoveError> {
        OwnPiece::check(mv, mover, board)?;
        DestinationEmpty::check(mv, board)?;
        ForwardDiagonal::check(mv, mover, board)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for applying a move to a board.
///
/// Postconditions:
/// - board invariants hold afterwards
/// - neither side gained pieces
pub struct MoveContract;

impl Contract<Board, Attempt> for MoveContract {
    fn pre(board: &Board, attempt: &Attempt) -> Result<(), MoveError> {
        LegalMove::check(&attempt.mv, attempt.mover, board)
    }

    #[instrument(skip_all)]
    fn post(before: &Board, after: &Board) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match CheckersInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };

        for color in Color::iter() {
            let (was, now) = (before.count(color), after.count(color));
            if now > was {
                warn!(%color, was, now, "Piece count grew during a move");
                violations.push(InvariantViolation::new(format!(
                    "{color} gained pieces ({was} -> {now})"
                )));
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Coord;

    fn mv(fr: i32, fc: i32, tr: i32, tc: i32) -> Move {
        Move::new(Coord::new(fr, fc).unwrap(), Coord::new(tr, tc).unwrap())
    }

    fn attempt(mover: Color, m: Move) -> Attempt {
        Attempt { mover, mv: m }
    }

    #[test]
    fn test_precondition_own_piece() {
        let board = Board::new();
        assert!(MoveContract::pre(&board, &attempt(Color::Black, mv(2, 1, 3, 0))).is_ok());
        assert_eq!(
            MoveContract::pre(&board, &attempt(Color::White, mv(2, 1, 3, 0))),
            Err(MoveError::NotYourPiece(Coord::new(2, 1).unwrap()))
        );
    }

    #[test]
    fn test_precondition_empty_origin_is_not_yours() {
        let board = Board::new();
        assert!(matches!(
            MoveContract::pre(&board, &attempt(Color::Black, mv(3, 0, 4, 1))),
            Err(MoveError::NotYourPiece(_))
        ));
    }

    #[test]
    fn test_precondition_destination_occupied() {
        let board = Board::new();
        assert!(matches!(
            MoveContract::pre(&board, &attempt(Color::Black, mv(1, 0, 2, 1))),
            Err(MoveError::DestinationOccupied(_))
        ));
    }

    #[test]
    fn test_precondition_jump_over_own_piece() {
        let mut board = Board::empty();
        board.set(Coord::new(5, 4).unwrap(), Occupancy::Occupied(Color::White));
        board.set(Coord::new(4, 3).unwrap(), Occupancy::Occupied(Color::White));
        assert_eq!(
            MoveContract::pre(&board, &attempt(Color::White, mv(5, 4, 3, 2))),
            Err(MoveError::NothingToCapture(Coord::new(4, 3).unwrap()))
        );
    }

    #[test]
    fn test_postcondition_holds_after_legal_move() {
        let before = Board::new();
        let mut after = before.clone();
        after.move_piece(Coord::new(5, 0).unwrap(), Coord::new(4, 1).unwrap());
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = Board::new();
        let mut after = before.clone();
        // A piece appears out of nowhere on a light square.
        after.set(Coord::new(4, 4).unwrap(), Occupancy::Occupied(Color::White));
        let violations = MoveContract::post(&before, &after).unwrap_err();
        assert_eq!(violations.len(), 3);
    }
}
