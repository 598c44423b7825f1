//! Board positions 1-9.
//!
//! Positions are laid out row-major:
//!
//! ```text
//!  1 | 2 | 3
//! ---+---+---
//!  4 | 5 | 6
//! ---+---+---
//!  7 | 8 | 9
//! ```

use serde::{Deserialize, Serialize};

use super::error::{Error, MoveRejection, Result};

/// A cell identifier in `1..=9`.
///
/// Constructed through [`Position::new`] (or `TryFrom<u8>`), so an out-of-range
/// value never reaches the board.
///
/// ```
/// use ttt_series::core::Position;
///
/// let center = Position::new(5).unwrap();
/// assert_eq!(center, Position::CENTER);
/// assert_eq!(center.index(), 4);
/// assert!(Position::new(10).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Position(u8);

impl Position {
    /// The middle cell.
    pub const CENTER: Position = Position(5);

    /// Every position in ascending order.
    pub const ALL: [Position; 9] = [
        Position(1),
        Position(2),
        Position(3),
        Position(4),
        Position(5),
        Position(6),
        Position(7),
        Position(8),
        Position(9),
    ];

    /// Create a position, failing with `InvalidMove` outside `1..=9`.
    pub fn new(value: u8) -> Result<Self> {
        if (1..=9).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::invalid_move(value, MoveRejection::OutOfRange))
        }
    }

    /// Const constructor for the fixed line tables.
    pub(crate) const fn at(value: u8) -> Self {
        assert!(value >= 1 && value <= 9, "position out of range");
        Self(value)
    }

    /// The 1-based number shown to players.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// The 0-based cell index (row-major).
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// 0-based row.
    #[must_use]
    pub const fn row(self) -> usize {
        self.index() / 3
    }

    /// 0-based column.
    #[must_use]
    pub const fn column(self) -> usize {
        self.index() % 3
    }
}

impl TryFrom<u8> for Position {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Position> for u8 {
    fn from(position: Position) -> u8 {
        position.0
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
