//! The 3x3 board.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::lines::{WinLine, WIN_LINES};
use crate::core::{Error, Marker, MoveRejection, Position, Result};

/// Empty cells, ascending. Never more than nine, so kept inline.
pub type EmptyPositions = SmallVec<[Position; 9]>;

/// A 3x3 grid of markers, indexed by [`Position`].
///
/// Cells only change through [`Board::mark`], which refuses occupied cells,
/// or [`Board::reset`], which clears the whole grid between games.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Marker; 9],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from row-major cell contents.
    ///
    /// ```
    /// use ttt_series::board::Board;
    /// use ttt_series::core::Marker::{Empty as E, PlayerOne as X, PlayerTwo as O};
    ///
    /// let board = Board::from_cells([X, X, E, O, E, E, E, E, E]);
    /// assert_eq!(board.empty_positions().len(), 6);
    /// ```
    #[must_use]
    pub fn from_cells(cells: [Marker; 9]) -> Self {
        Self { cells }
    }

    /// Clear every cell in place.
    pub fn reset(&mut self) {
        self.cells = [Marker::Empty; 9];
    }

    /// Marker at a position.
    #[must_use]
    pub fn get(&self, position: Position) -> Marker {
        self.cells[position.index()]
    }

    /// Row-major view of all cells.
    #[must_use]
    pub fn cells(&self) -> &[Marker; 9] {
        &self.cells
    }

    /// Iterate over (Position, Marker) pairs in ascending position order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Marker)> + '_ {
        Position::ALL.into_iter().map(move |p| (p, self.get(p)))
    }

    /// All unclaimed positions, ascending.
    #[must_use]
    pub fn empty_positions(&self) -> EmptyPositions {
        self.iter()
            .filter(|(_, marker)| marker.is_empty())
            .map(|(position, _)| position)
            .collect()
    }

    #[must_use]
    pub fn is_empty_at(&self, position: Position) -> bool {
        self.get(position).is_empty()
    }

    /// Number of cells claimed by either player.
    #[must_use]
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|m| !m.is_empty()).count()
    }

    /// How many cells of `line` hold `marker` (0-3).
    #[must_use]
    pub fn count_markers(&self, line: &WinLine, marker: Marker) -> usize {
        line.positions()
            .iter()
            .filter(|&&p| self.get(p) == marker)
            .count()
    }

    /// True when no empty cell is left.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.empty_positions().is_empty()
    }

    /// Claim a cell.
    ///
    /// Fails with `InvalidMove` if the cell is taken or `marker` is `Empty`;
    /// callers are expected to pick from [`Board::empty_positions`].
    pub fn mark(&mut self, position: Position, marker: Marker) -> Result<()> {
        if marker.is_empty() {
            return Err(Error::invalid_move(position.get(), MoveRejection::EmptyMarker));
        }
        if !self.is_empty_at(position) {
            return Err(Error::invalid_move(position.get(), MoveRejection::Occupied));
        }
        self.cells[position.index()] = marker;
        Ok(())
    }

    /// First line (in [`WIN_LINES`] order) held entirely by one marker.
    #[must_use]
    pub fn winning_line(&self) -> Option<(WinLine, Marker)> {
        WIN_LINES.iter().find_map(|line| {
            let [a, b, c] = line.positions();
            let marker = self.get(a);
            (!marker.is_empty() && marker == self.get(b) && marker == self.get(c))
                .then_some((*line, marker))
        })
    }

    /// The winning marker, if any line is complete.
    #[must_use]
    pub fn winner(&self) -> Option<Marker> {
        self.winning_line().map(|(_, marker)| marker)
    }

    #[must_use]
    pub fn center_occupant(&self) -> Marker {
        self.get(Position::CENTER)
    }
}
