//! End-of-game detection.

use crate::action::Move;
use crate::board::Board;
use crate::contracts::LegalMove;
use crate::types::{Color, Coord};
use tracing::instrument;

/// Every legal move for `color`, origin-major in row-major order.
///
/// Pieces are enumerated from the grid itself, so the result always reflects
/// captures and moves already played.
pub fn legal_moves(board: &Board, color: Color) -> impl Iterator<Item = Move> + '_ {
    board.pieces(color).flat_map(move |from| {
        Coord::all()
            .map(move |to| Move::new(from, to))
            .filter(move |mv| LegalMove::check(mv, color, board).is_ok())
    })
}

/// True if `color` has at least one legal move.
///
/// A side without one has lost.
#[instrument(skip(board))]
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    legal_moves(board, color).next().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Occupancy;

    fn coord(row: i32, col: i32) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn test_opening_has_seven_moves_each() {
        let board = Board::new();
        assert_eq!(legal_moves(&board, Color::White).count(), 7);
        assert_eq!(legal_moves(&board, Color::Black).count(), 7);
    }

    #[test]
    fn test_no_pieces_means_no_moves() {
        let mut board = Board::empty();
        board.set(coord(2, 1), Occupancy::Occupied(Color::Black));
        assert!(!has_legal_move(&board, Color::White));
        assert!(has_legal_move(&board, Color::Black));
    }

    #[test]
    fn test_blocked_piece_has_no_moves() {
        let mut board = Board::empty();
        // White on the edge, blocked by a piece it cannot jump.
        board.set(coord(4, 0), Occupancy::Occupied(Color::White));
        board.set(coord(3, 1), Occupancy::Occupied(Color::Black));
        board.set(coord(2, 2), Occupancy::Occupied(Color::Black));
        assert!(!has_legal_move(&board, Color::White));
    }

    #[test]
    fn test_piece_on_far_row_cannot_move() {
        let mut board = Board::empty();
        board.set(coord(0, 1), Occupancy::Occupied(Color::White));
        assert!(!has_legal_move(&board, Color::White));
    }
}
