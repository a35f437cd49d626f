//! Player identity.

use crate::types::Color;
use derive_getters::Getters;

/// A named participant and the color they play.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, derive_new::new)]
pub struct Player {
    /// Display name used in prompts.
    #[new(into)]
    name: String,
    /// Side this player moves.
    color: Color,
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.color)
    }
}
