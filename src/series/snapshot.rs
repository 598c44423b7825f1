//! Read-only view of a match for display.

use im::Vector;
use serde::Serialize;

use super::controller::MatchPhase;
use super::outcome::GameRecord;
use crate::board::Board;
use crate::core::{GameRngState, SeatMap};
use crate::players::Player;

/// Everything the display side may show, captured at one instant.
///
/// History uses a persistent vector, so taking a snapshot after every move
/// stays cheap as a long match accumulates games.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatchSnapshot {
    pub winning_score: u32,
    pub max_games: u32,
    /// Number of the game in progress (or about to start).
    pub game_number: u32,
    pub board: Board,
    pub players: SeatMap<Player>,
    pub phase: MatchPhase,
    pub history: Vector<GameRecord>,
    pub rng: GameRngState,
}
