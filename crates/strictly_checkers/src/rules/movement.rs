//! Move shape classification.

use crate::action::Move;
use crate::types::{Color, Coord};
use tracing::instrument;

/// Geometric kind of a move, before occupancy is considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// One square diagonally forward.
    Step,
    /// Two squares diagonally forward over `over`.
    Jump {
        /// Square between origin and destination.
        over: Coord,
    },
}

/// Classifies `mv` as played by `mover`.
///
/// Returns `None` for anything that is not a forward diagonal step or jump:
/// sideways, backward, straight and long moves are all rejected here.
#[instrument]
pub fn shape(mv: &Move, mover: Color) -> Option<Shape> {
    let forward = mover.forward();
    let sideways = mv.col_delta().abs();

    if mv.row_delta() == forward && sideways == 1 {
        Some(Shape::Step)
    } else if mv.row_delta() == 2 * forward && sideways == 2 {
        mv.midpoint().map(|over| Shape::Jump { over })
    } else {
        None
    }
}
