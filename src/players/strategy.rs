//! Move dispatch over the player variants.

use tracing::trace;

use super::player::{Difficulty, Player, PlayerKind};
use super::selector::{MoveChoice, MoveSelector, SelectionStep};
use crate::board::Board;
use crate::core::{Error, GameRng, MoveRejection, Position, Result};

/// Pick the next move for `player`.
///
/// - Human: `human_input` is required and must name an empty cell.
/// - Easy computer: uniform random empty cell.
/// - Hard computer: the [`MoveSelector`] priority rules.
///
/// `human_input` is ignored for computer players.
pub fn select_move(
    player: &Player,
    board: &Board,
    human_input: Option<Position>,
    selector: &MoveSelector,
    rng: &mut GameRng,
) -> Result<MoveChoice> {
    match player.kind() {
        PlayerKind::Human => {
            let position = human_input.ok_or_else(|| Error::MissingInput {
                player: player.name().to_string(),
            })?;
            if !board.is_empty_at(position) {
                return Err(Error::invalid_move(position.get(), MoveRejection::Occupied));
            }
            Ok(MoveChoice::new(position, SelectionStep::Human))
        }
        PlayerKind::Computer(difficulty) => {
            if human_input.is_some() {
                trace!(player = player.name(), "ignoring input supplied for computer player");
            }
            let choice = match difficulty {
                Difficulty::Easy => MoveSelector::random(board, rng)
                    .map(|position| MoveChoice::new(position, SelectionStep::Random)),
                Difficulty::Hard => selector.select(board, player.marker(), rng),
            };
            choice.ok_or(Error::BoardFull)
        }
    }
}
