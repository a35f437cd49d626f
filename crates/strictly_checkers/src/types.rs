//! Core domain types for checkers.

use crate::action::MoveError;
use tracing::instrument;

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: i32 = 8;

/// Number of squares on the board.
pub const SQUARE_COUNT: usize = 64;

/// Piece color, which is also the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, strum::EnumIter)]
pub enum Color {
    /// White moves first and advances toward row 0.
    White,
    /// Black advances toward row 7.
    Black,
}

impl Color {
    /// Returns the opposing color.
    pub fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row step of a forward move for this color.
    pub fn forward(self) -> i32 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

/// Contents of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Occupancy {
    /// No piece.
    #[default]
    Empty,
    /// A piece of the given color.
    Occupied(Color),
}

impl Occupancy {
    /// Returns the color of the piece on the square, if any.
    pub fn color(self) -> Option<Color> {
        match self {
            Occupancy::Empty => None,
            Occupancy::Occupied(color) => Some(color),
        }
    }

    /// True when no piece sits on the square.
    pub fn is_empty(self) -> bool {
        self == Occupancy::Empty
    }

    /// Character used by the text render.
    pub fn symbol(self) -> char {
        match self {
            Occupancy::Empty => '-',
            Occupancy::Occupied(Color::Black) => 'b',
            Occupancy::Occupied(Color::White) => 'w',
        }
    }
}

/// A square on the board, guaranteed to be in range.
///
/// Coordinates arrive from the outside world as plain signed integers; the
/// only way to obtain a `Coord` is through a range check, so everything that
/// takes one can index the board without further validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Creates a coordinate, rejecting anything outside `[0, 8)`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] if either component is off the board.
    #[instrument]
    pub fn new(row: i32, col: i32) -> Result<Self, MoveError> {
        if !(0..BOARD_SIZE).contains(&row) || !(0..BOARD_SIZE).contains(&col) {
            return Err(MoveError::OutOfRange { row, col });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Creates a coordinate from a row-major index (0-63).
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= SQUARE_COUNT {
            return None;
        }
        Some(Self {
            row: (index / 8) as u8,
            col: (index % 8) as u8,
        })
    }

    /// Row-major index into the board (0-63).
    pub fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    /// Row, 0 at the top of the render.
    pub fn row(self) -> i32 {
        i32::from(self.row)
    }

    /// Column, 0 at the left of the render.
    pub fn col(self) -> i32 {
        i32::from(self.col)
    }

    /// True for the squares pieces stand on at the start.
    pub fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// Iterates every square in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..SQUARE_COUNT).filter_map(Coord::from_index)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Color::White.opponent(), Color::Black);
        assert_eq!(Color::Black.opponent(), Color::White);
    }

    #[test]
    fn test_forward_direction() {
        assert_eq!(Color::White.forward(), -1);
        assert_eq!(Color::Black.forward(), 1);
    }

    #[test]
    fn test_coord_rejects_out_of_range() {
        assert!(Coord::new(-1, 0).is_err());
        assert!(Coord::new(0, 8).is_err());
        assert_eq!(
            Coord::new(8, 3),
            Err(MoveError::OutOfRange { row: 8, col: 3 })
        );
    }

    #[test]
    fn test_coord_index_round_trip() {
        let coord = Coord::new(5, 2).unwrap();
        assert_eq!(coord.index(), 42);
        assert_eq!(Coord::from_index(42), Some(coord));
        assert_eq!(Coord::from_index(64), None);
    }

    #[test]
    fn test_all_visits_every_square() {
        assert_eq!(Coord::all().count(), SQUARE_COUNT);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Occupancy::Empty.symbol(), '-');
        assert_eq!(Occupancy::Occupied(Color::Black).symbol(), 'b');
        assert_eq!(Occupancy::Occupied(Color::White).symbol(), 'w');
    }
}
