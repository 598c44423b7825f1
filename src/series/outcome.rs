//! Game and match results.

use serde::{Deserialize, Serialize};

use crate::board::WinLine;
use crate::core::PlayerOrder;

/// Result of a single game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// One player completed `line`.
    Winner { order: PlayerOrder, line: WinLine },
    /// Board filled with no complete line.
    Tie,
}

impl GameOutcome {
    #[must_use]
    pub fn winner(&self) -> Option<PlayerOrder> {
        match self {
            GameOutcome::Winner { order, .. } => Some(*order),
            GameOutcome::Tie => None,
        }
    }

    #[must_use]
    pub fn is_winner(&self, player: PlayerOrder) -> bool {
        self.winner() == Some(player)
    }
}

/// Result of a whole match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// Strictly higher score when the match ended.
    Champion(PlayerOrder),
    /// Equal scores; there is no tiebreaker.
    Tie,
}

impl MatchOutcome {
    #[must_use]
    pub fn champion(&self) -> Option<PlayerOrder> {
        match self {
            MatchOutcome::Champion(order) => Some(*order),
            MatchOutcome::Tie => None,
        }
    }
}

/// One completed game, as kept in the match history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// 1-based game number.
    pub game_number: u32,
    /// Seat that moved first in this game.
    pub first_mover: PlayerOrder,
    pub outcome: GameOutcome,
    /// Marks placed before the game ended.
    pub moves: usize,
}
