//! The input collaborator seam.
//!
//! The engine never prompts anyone. When a human is to move, it asks a
//! `MoveInput` for a position; re-prompting until the answer is legal is the
//! implementor's job.

use std::collections::VecDeque;

use crate::board::Board;
use crate::core::Position;
use crate::players::Player;

/// Source of human moves.
pub trait MoveInput {
    /// A position for `player` on `board`, or `None` if none can be supplied.
    ///
    /// Implementations should only return positions from
    /// `board.empty_positions()`; anything else is rejected by the engine.
    fn human_move(&mut self, board: &Board, player: &Player) -> Option<Position>;
}

/// Input for matches between computers only. Never supplies a move.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHumanInput;

impl MoveInput for NoHumanInput {
    fn human_move(&mut self, _board: &Board, _player: &Player) -> Option<Position> {
        None
    }
}

/// Replays a fixed sequence of human moves, shared by both seats.
#[derive(Clone, Debug, Default)]
pub struct ScriptedMoves {
    moves: VecDeque<Position>,
}

impl ScriptedMoves {
    pub fn new(moves: impl IntoIterator<Item = Position>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    /// Moves not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl MoveInput for ScriptedMoves {
    fn human_move(&mut self, _board: &Board, _player: &Player) -> Option<Position> {
        self.moves.pop_front()
    }
}
