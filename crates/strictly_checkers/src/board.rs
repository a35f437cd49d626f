//! The 8x8 checkers board.

use crate::action::MoveError;
use crate::types::{Color, Coord, Occupancy, SQUARE_COUNT};
use tracing::{debug, instrument};

/// Column header printed above the grid.
const HEADER: &str = "  0 1 2 3 4 5 6 7";

/// Number of rows each side fills at the start.
const HOME_ROWS: i32 = 3;

/// 8x8 board stored as a flat row-major array.
///
/// There is no separate per-color piece list: [`Board::pieces`] derives the
/// membership from the grid each time, so it always agrees with the squares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Squares in row-major order (0-63).
    squares: [Occupancy; SQUARE_COUNT],
}

impl Board {
    /// Creates a board in the starting position.
    ///
    /// Black fills the dark squares of rows 0-2, White those of rows 5-7.
    #[instrument]
    pub fn new() -> Self {
        let mut board = Self::empty();
        for coord in Coord::all().filter(|c| c.is_dark()) {
            if coord.row() < HOME_ROWS {
                board.set(coord, Occupancy::Occupied(Color::Black));
            } else if coord.row() >= 8 - HOME_ROWS {
                board.set(coord, Occupancy::Occupied(Color::White));
            }
        }
        board
    }

    /// Creates a board with no pieces.
    pub fn empty() -> Self {
        Self {
            squares: [Occupancy::Empty; SQUARE_COUNT],
        }
    }

    /// Looks up a square by raw coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] if `row` or `col` is outside `[0, 8)`.
    #[instrument(skip(self))]
    pub fn occupancy(&self, row: i32, col: i32) -> Result<Occupancy, MoveError> {
        Ok(self.get(Coord::new(row, col)?))
    }

    /// Gets the contents of a square.
    pub fn get(&self, coord: Coord) -> Occupancy {
        self.squares[coord.index()]
    }

    /// Overwrites the contents of a square.
    pub fn set(&mut self, coord: Coord, occupancy: Occupancy) {
        self.squares[coord.index()] = occupancy;
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Occupancy; SQUARE_COUNT] {
        &self.squares
    }

    /// Moves whatever is on `from` to `to`.
    ///
    /// A two-square diagonal step also clears the square in between, and that
    /// square is returned. No rule is checked here; callers validate first.
    #[instrument(skip(self), fields(from = %from, to = %to))]
    pub fn move_piece(&mut self, from: Coord, to: Coord) -> Option<Coord> {
        let piece = self.get(from);
        self.set(to, piece);
        self.set(from, Occupancy::Empty);

        let captured = crate::action::Move::new(from, to).midpoint();
        if let Some(mid) = captured {
            debug!(captured = %mid, "Clearing jumped square");
            self.set(mid, Occupancy::Empty);
        }
        captured
    }

    /// Iterates the squares holding a piece of `color`, in row-major order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(move |c| self.get(*c) == Occupancy::Occupied(color))
    }

    /// Number of pieces of `color` on the board.
    pub fn count(&self, color: Color) -> usize {
        self.pieces(color).count()
    }

    /// Formats the board as text: a column header, then one line per row.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(HEADER.len() + 1 + 8 * 19);
        out.push_str(HEADER);
        out.push('\n');
        for (i, square) in self.squares.iter().enumerate() {
            if i % 8 == 0 {
                out.push_str(&format!("{} ", i / 8));
            }
            out.push(square.symbol());
            out.push(' ');
            if i % 8 == 7 {
                out.push('\n');
            }
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
