//! The hard computer's move heuristic.
//!
//! Four fixed steps, tried in order, first hit wins:
//!
//! 1. Offense: complete a line that already holds two of our markers.
//! 2. Defense: block a line that holds two of the opponent's markers.
//! 3. Center: take position 5 if it is free.
//! 4. Random: any empty cell, uniformly.
//!
//! There is no lookahead beyond the next move and forks are never examined,
//! so the heuristic can be beaten. That is the intended strength.

use serde::{Deserialize, Serialize};

use crate::board::{Board, WinLine, WIN_LINES};
use crate::core::{GameRng, Marker, Position};

/// Which rule produced a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionStep {
    Offense,
    Defense,
    Center,
    Random,
    /// Supplied by the input collaborator for a human player.
    Human,
}

/// A chosen position and the rule that chose it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveChoice {
    pub position: Position,
    pub step: SelectionStep,
}

impl MoveChoice {
    #[must_use]
    pub const fn new(position: Position, step: SelectionStep) -> Self {
        Self { position, step }
    }
}

/// Priority-rule move selector over a fixed line table.
#[derive(Clone, Copy, Debug)]
pub struct MoveSelector {
    lines: &'static [WinLine],
}

impl Default for MoveSelector {
    fn default() -> Self {
        Self::new(&WIN_LINES)
    }
}

impl MoveSelector {
    /// Selector scanning `lines` in the given order.
    #[must_use]
    pub const fn new(lines: &'static [WinLine]) -> Self {
        Self { lines }
    }

    /// First line holding exactly two of `marker` with its third cell empty.
    #[must_use]
    pub fn critical_line(&self, board: &Board, marker: Marker) -> Option<&WinLine> {
        self.lines.iter().find(|line| {
            board.count_markers(line, marker) == 2 && board.count_markers(line, Marker::Empty) == 1
        })
    }

    /// The empty cell of the first critical line for `marker`.
    #[must_use]
    pub fn critical_square(&self, board: &Board, marker: Marker) -> Option<Position> {
        self.critical_line(board, marker).and_then(|line| {
            line.positions()
                .into_iter()
                .find(|&p| board.is_empty_at(p))
        })
    }

    /// Square that wins immediately for `own`.
    #[must_use]
    pub fn offense(&self, board: &Board, own: Marker) -> Option<Position> {
        self.critical_square(board, own)
    }

    /// Square that stops the opponent of `own` from winning next move.
    #[must_use]
    pub fn defense(&self, board: &Board, own: Marker) -> Option<Position> {
        self.critical_square(board, own.opponent())
    }

    /// The center, if free.
    #[must_use]
    pub fn center(board: &Board) -> Option<Position> {
        board
            .is_empty_at(Position::CENTER)
            .then_some(Position::CENTER)
    }

    /// Uniform choice among empty cells. `None` on a full board.
    pub fn random(board: &Board, rng: &mut GameRng) -> Option<Position> {
        let empty = board.empty_positions();
        rng.choose(&empty).copied()
    }

    /// Run the four rules in priority order.
    pub fn select(&self, board: &Board, own: Marker, rng: &mut GameRng) -> Option<MoveChoice> {
        if let Some(position) = self.offense(board, own) {
            return Some(MoveChoice::new(position, SelectionStep::Offense));
        }
        if let Some(position) = self.defense(board, own) {
            return Some(MoveChoice::new(position, SelectionStep::Defense));
        }
        if let Some(position) = Self::center(board) {
            return Some(MoveChoice::new(position, SelectionStep::Center));
        }
        Self::random(board, rng).map(|position| MoveChoice::new(position, SelectionStep::Random))
    }
}
