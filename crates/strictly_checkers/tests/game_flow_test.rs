//! Tests for turn sequencing and rendering over whole games.

use std::collections::VecDeque;
use strictly_checkers::{
    Board, Color, Coord, Game, IllegalMovePolicy, MoveSource, Occupancy, RawMove, Status,
    TurnReport,
};

/// Feeds a fixed list of moves and records every report.
struct Scripted {
    moves: VecDeque<RawMove>,
    reports: Vec<TurnReport>,
}

impl Scripted {
    fn new(moves: &[(i32, i32, i32, i32)]) -> Self {
        Self {
            moves: moves
                .iter()
                .map(|&(a, b, c, d)| RawMove::new(a, b, c, d))
                .collect(),
            reports: Vec::new(),
        }
    }
}

#[derive(Debug, PartialEq)]
struct OutOfMoves;

impl MoveSource for Scripted {
    type Error = OutOfMoves;

    fn next_move(&mut self, _game: &Game) -> Result<RawMove, OutOfMoves> {
        self.moves.pop_front().ok_or(OutOfMoves)
    }

    fn turn_played(&mut self, _game: &Game, report: &TurnReport) -> Result<(), OutOfMoves> {
        self.reports.push(*report);
        Ok(())
    }
}

#[test]
fn test_render_after_capture_sequence() {
    let mut game = Game::new("Player 1", "Player 2");
    for raw in [
        RawMove::new(5, 2, 4, 3),
        RawMove::new(2, 5, 3, 4),
        RawMove::new(4, 3, 2, 5),
    ] {
        let report = game.submit(raw);
        assert!(!report.is_rejected(), "{raw} should be legal");
    }

    let expected = "  0 1 2 3 4 5 6 7\n\
                    0 - b - b - b - b \n\
                    1 b - b - b - b - \n\
                    2 - b - b - w - b \n\
                    3 - - - - - - - - \n\
                    4 - - - - - - - - \n\
                    5 w - - - w - w - \n\
                    6 - w - w - w - w \n\
                    7 w - w - w - w - \n";
    assert_eq!(game.board().render(), expected);
    assert_eq!(game.board().count(Color::Black), 11);
    assert_eq!(game.board().count(Color::White), 12);
}

#[test]
fn test_turn_alternates_even_on_illegal_moves() {
    let mut game = Game::new("Player 1", "Player 2");
    assert_eq!(game.policy(), IllegalMovePolicy::Forfeit);

    game.submit(RawMove::new(2, 1, 3, 0)); // White tries to move Black's piece
    assert_eq!(game.to_move(), Color::Black);
    assert_eq!(game.board(), &Board::new());

    game.submit(RawMove::new(2, 1, 3, 0));
    assert_eq!(game.to_move(), Color::White);
    assert_eq!(
        game.board().get(Coord::new(3, 0).unwrap()),
        Occupancy::Occupied(Color::Black)
    );
}

#[test]
fn test_play_runs_until_side_is_stuck() {
    let mut board = Board::empty();
    board.set(Coord::new(5, 4).unwrap(), Occupancy::Occupied(Color::White));
    board.set(Coord::new(2, 1).unwrap(), Occupancy::Occupied(Color::Black));
    let mut game = Game::new("Player 1", "Player 2").with_board(board);

    // White walks toward row 0; Black blunders into a capture.
    let mut source = Scripted::new(&[(5, 4, 4, 3), (2, 1, 3, 2), (4, 3, 2, 1)]);

    let outcome = game.play(&mut source).expect("script covers the game");

    assert_eq!(outcome.winner(), Color::White);
    assert_eq!(game.status(), Status::GameOver(outcome));
    assert_eq!(source.reports.len(), 3);
    assert!(matches!(
        source.reports[2],
        TurnReport::Moved {
            captured: Some(_),
            ..
        }
    ));
}

#[test]
fn test_play_propagates_source_error() {
    let mut game = Game::new("Player 1", "Player 2");
    let mut source = Scripted::new(&[(5, 0, 4, 1)]);

    assert_eq!(game.play(&mut source), Err(OutOfMoves));
    assert_eq!(game.to_move(), Color::Black);
}

#[test]
fn test_retry_policy_keeps_player_until_legal() {
    let mut game = Game::new("Player 1", "Player 2").with_policy(IllegalMovePolicy::Retry);

    let rejected = game.submit(RawMove::new(5, 0, 4, 0));
    assert!(rejected.is_rejected());
    assert_eq!(game.to_move(), Color::White);

    let moved = game.submit(RawMove::new(5, 0, 4, 1));
    assert!(!moved.is_rejected());
    assert_eq!(moved.mover(), Color::White);
    assert_eq!(game.to_move(), Color::Black);
}
