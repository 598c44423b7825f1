//! Cell markers.

use serde::{Deserialize, Serialize};

/// The value held by a single board cell.
///
/// `PlayerOne` is drawn as `X` and `PlayerTwo` as `O`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    /// Unclaimed cell.
    #[default]
    Empty,
    /// Marker of the first seat (`X`).
    PlayerOne,
    /// Marker of the second seat (`O`).
    PlayerTwo,
}

impl Marker {
    /// Character used when drawing the board.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Marker::Empty => ' ',
            Marker::PlayerOne => 'X',
            Marker::PlayerTwo => 'O',
        }
    }

    /// The other player's marker. `Empty` has no opponent and maps to itself.
    #[must_use]
    pub const fn opponent(self) -> Marker {
        match self {
            Marker::Empty => Marker::Empty,
            Marker::PlayerOne => Marker::PlayerTwo,
            Marker::PlayerTwo => Marker::PlayerOne,
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Marker::Empty)
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
