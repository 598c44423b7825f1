//! Match orchestration.
//!
//! ## Phases
//!
//! ```text
//! AwaitingMove(active) --mark--> AwaitingMove(other)
//!                      --win/full--> GameOver(outcome)
//!                      --win/full, match decided--> MatchOver
//! GameOver(outcome) --start_next_game--> AwaitingMove(first mover)
//! ```
//!
//! The terminal check runs after every single mark, so a game can end on
//! either player's move. The match is decided after each completed game when
//! a score reaches the target or the game number passes the cap.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, info, instrument};

use super::input::MoveInput;
use super::outcome::{GameOutcome, GameRecord, MatchOutcome};
use super::snapshot::MatchSnapshot;
use crate::board::Board;
use crate::core::config::max_games_for;
use crate::core::{Error, GameRng, MatchConfig, PlayerOrder, Position, Result, SeatMap};
use crate::players::{select_move, MoveChoice, MoveSelector, Player, PlayerSpec};

/// Where the match currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// A game is in progress and `active` is to move.
    AwaitingMove { active: PlayerOrder },
    /// A game just ended; the board still shows its final position.
    GameOver(GameOutcome),
    /// The last game ended and decided the match.
    MatchOver {
        last_game: GameOutcome,
        outcome: MatchOutcome,
    },
}

impl MatchPhase {
    /// Seat to move, while a game is in progress.
    #[must_use]
    pub fn active(&self) -> Option<PlayerOrder> {
        match self {
            MatchPhase::AwaitingMove { active } => Some(*active),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_match_over(&self) -> bool {
        matches!(self, MatchPhase::MatchOver { .. })
    }
}

/// What one call to [`MatchController::play_turn`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnReport {
    /// Seat that moved.
    pub player: PlayerOrder,
    pub choice: MoveChoice,
    /// Phase after the move.
    pub phase: MatchPhase,
}

/// Runs a best-of-N match between two seated players.
///
/// Owns the single board for the match and resets it between games. All
/// computer randomness comes from a stream seeded by [`MatchConfig::seed`].
#[derive(Clone, Debug)]
pub struct MatchController {
    winning_score: u32,
    max_games: u32,
    players: SeatMap<Player>,
    board: Board,
    game_number: u32,
    phase: MatchPhase,
    history: Vector<GameRecord>,
    selector: MoveSelector,
    /// Forked once per match so each match gets its own stream.
    root_rng: GameRng,
    rng: GameRng,
}

impl MatchController {
    /// Validate the configuration and seat both players.
    pub fn new(config: &MatchConfig, first: PlayerSpec, second: PlayerSpec) -> Result<Self> {
        let max_games = config.max_games()?;
        let players = SeatMap::from_pair(
            Player::new(first, PlayerOrder::First)?,
            Player::new(second, PlayerOrder::Second)?,
        );

        let mut root_rng = GameRng::new(config.seed);
        let rng = root_rng.fork();

        info!(
            first = players[PlayerOrder::First].name(),
            second = players[PlayerOrder::Second].name(),
            winning_score = config.winning_score,
            max_games,
            seed = config.seed,
            "match created"
        );

        Ok(Self {
            winning_score: config.winning_score,
            max_games,
            players,
            board: Board::new(),
            game_number: 1,
            phase: MatchPhase::AwaitingMove {
                active: Self::first_mover_for(1),
            },
            history: Vector::new(),
            selector: MoveSelector::default(),
            root_rng,
            rng,
        })
    }

    /// Who opens game `game_number`: the first seat on odd games, the second
    /// seat on even games.
    #[must_use]
    pub const fn first_mover_for(game_number: u32) -> PlayerOrder {
        if game_number % 2 == 1 {
            PlayerOrder::First
        } else {
            PlayerOrder::Second
        }
    }

    // === Queries ===

    #[must_use]
    pub fn winning_score(&self) -> u32 {
        self.winning_score
    }

    #[must_use]
    pub fn max_games(&self) -> u32 {
        self.max_games
    }

    /// Number of the game in progress, or of the next game once one ends.
    #[must_use]
    pub fn game_number(&self) -> u32 {
        self.game_number
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    #[must_use]
    pub fn player(&self, order: PlayerOrder) -> &Player {
        &self.players[order]
    }

    #[must_use]
    pub fn players(&self) -> &SeatMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn score(&self, order: PlayerOrder) -> u32 {
        self.players[order].score()
    }

    /// Opener of the current game.
    #[must_use]
    pub fn first_mover(&self) -> PlayerOrder {
        Self::first_mover_for(self.game_number)
    }

    /// The player to move, while a game is in progress.
    #[must_use]
    pub fn active_player(&self) -> Option<&Player> {
        self.phase.active().map(|order| &self.players[order])
    }

    /// Completed games, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<GameRecord> {
        &self.history
    }

    #[must_use]
    pub fn last_game(&self) -> Option<&GameRecord> {
        self.history.last()
    }

    #[must_use]
    pub fn is_match_over(&self) -> bool {
        self.phase.is_match_over()
    }

    /// The match result, once decided.
    #[must_use]
    pub fn match_outcome(&self) -> Option<MatchOutcome> {
        match self.phase {
            MatchPhase::MatchOver { outcome, .. } => Some(outcome),
            _ => None,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            winning_score: self.winning_score,
            max_games: self.max_games,
            game_number: self.game_number,
            board: self.board.clone(),
            players: self.players.clone(),
            phase: self.phase,
            history: self.history.clone(),
            rng: self.rng.state(),
        }
    }

    // === Transitions ===

    /// Play one half-turn for the active player.
    ///
    /// `human_input` is required when the active player is human and ignored
    /// otherwise. The terminal condition is checked right after the mark.
    pub fn play_turn(&mut self, human_input: Option<Position>) -> Result<TurnReport> {
        let active = match self.phase {
            MatchPhase::AwaitingMove { active } => active,
            MatchPhase::MatchOver { .. } => return Err(Error::MatchOver),
            MatchPhase::GameOver(_) => return Err(Error::NoGameInProgress),
        };

        let choice = select_move(
            &self.players[active],
            &self.board,
            human_input,
            &self.selector,
            &mut self.rng,
        )?;
        let marker = self.players[active].marker();
        self.board.mark(choice.position, marker)?;

        debug!(
            game = self.game_number,
            player = self.players[active].name(),
            position = choice.position.get(),
            step = ?choice.step,
            "move applied"
        );

        self.phase = if let Some((line, winner)) = self.board.winning_line() {
            // Play stops at the first complete line, so it is always the mover's.
            debug_assert_eq!(winner, marker);
            self.finish_game(GameOutcome::Winner {
                order: active,
                line,
            })
        } else if self.board.is_full() {
            self.finish_game(GameOutcome::Tie)
        } else {
            MatchPhase::AwaitingMove {
                active: active.other(),
            }
        };

        Ok(TurnReport {
            player: active,
            choice,
            phase: self.phase,
        })
    }

    /// Clear the board for the next game and return its first mover.
    ///
    /// A no-op while a game is in progress.
    pub fn start_next_game(&mut self) -> Result<PlayerOrder> {
        match self.phase {
            MatchPhase::AwaitingMove { active } => Ok(active),
            MatchPhase::MatchOver { .. } => Err(Error::MatchOver),
            MatchPhase::GameOver(_) => {
                self.board.reset();
                let first = self.first_mover();
                self.phase = MatchPhase::AwaitingMove { active: first };
                debug!(game = self.game_number, first = %first, "game started");
                Ok(first)
            }
        }
    }

    /// Play the current (or next) game to its end.
    #[instrument(skip(self, input), fields(game = self.game_number))]
    pub fn play_game(&mut self, input: &mut impl MoveInput) -> Result<GameOutcome> {
        self.start_next_game()?;

        loop {
            let human_input = match self.active_player() {
                Some(player) if player.is_human() => input.human_move(&self.board, player),
                _ => None,
            };

            match self.play_turn(human_input)?.phase {
                MatchPhase::AwaitingMove { .. } => {}
                MatchPhase::GameOver(outcome)
                | MatchPhase::MatchOver {
                    last_game: outcome, ..
                } => {
                    return Ok(outcome);
                }
            }
        }
    }

    /// Play games until the match is decided.
    pub fn play_match(&mut self, input: &mut impl MoveInput) -> Result<MatchOutcome> {
        loop {
            self.play_game(input)?;
            if let Some(outcome) = self.match_outcome() {
                return Ok(outcome);
            }
        }
    }

    /// Start a fresh match with the same players and a new target score.
    ///
    /// Scores, game number, history and board are cleared. The configuration
    /// is validated first; on error nothing changes.
    pub fn reset_match(&mut self, winning_score: u32) -> Result<()> {
        self.max_games = max_games_for(winning_score)?;
        self.winning_score = winning_score;

        for (_, player) in self.players.iter_mut() {
            player.reset_score();
        }
        self.board.reset();
        self.game_number = 1;
        self.history.clear();
        self.phase = MatchPhase::AwaitingMove {
            active: Self::first_mover_for(1),
        };
        self.rng = self.root_rng.fork();

        info!(winning_score, max_games = self.max_games, "match reset");
        Ok(())
    }

    fn finish_game(&mut self, outcome: GameOutcome) -> MatchPhase {
        if let Some(winner) = outcome.winner() {
            self.players[winner].award_point();
        }

        self.history.push_back(GameRecord {
            game_number: self.game_number,
            first_mover: self.first_mover(),
            outcome,
            moves: self.board.marked_count(),
        });

        match outcome {
            GameOutcome::Winner { order, line } => info!(
                game = self.game_number,
                winner = self.players[order].name(),
                %line,
                "game won"
            ),
            GameOutcome::Tie => info!(game = self.game_number, "game tied"),
        }

        self.game_number += 1;

        if self.match_decided() {
            let outcome_of_match = self.decide_champion();
            info!(
                first = self.score(PlayerOrder::First),
                second = self.score(PlayerOrder::Second),
                outcome = ?outcome_of_match,
                "match over"
            );
            MatchPhase::MatchOver {
                last_game: outcome,
                outcome: outcome_of_match,
            }
        } else {
            MatchPhase::GameOver(outcome)
        }
    }

    fn match_decided(&self) -> bool {
        self.players
            .iter()
            .any(|(_, player)| player.score() >= self.winning_score)
            || self.game_number > self.max_games
    }

    fn decide_champion(&self) -> MatchOutcome {
        match self
            .score(PlayerOrder::First)
            .cmp(&self.score(PlayerOrder::Second))
        {
            Ordering::Greater => MatchOutcome::Champion(PlayerOrder::First),
            Ordering::Less => MatchOutcome::Champion(PlayerOrder::Second),
            Ordering::Equal => MatchOutcome::Tie,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::WIN_LINES;
    use crate::core::{Marker, MoveRejection};
    use crate::players::{Difficulty, PlayerKind};
    use crate::series::input::{NoHumanInput, ScriptedMoves};

    fn pos(n: u8) -> Position {
        Position::new(n).unwrap()
    }

    fn humans(winning_score: u32) -> MatchController {
        let config = MatchConfig::default().with_winning_score(winning_score);
        MatchController::new(&config, PlayerSpec::human("Ann"), PlayerSpec::human("Bob")).unwrap()
    }

    fn play(controller: &mut MatchController, moves: &[u8]) -> TurnReport {
        let mut last = None;
        for &n in moves {
            last = Some(controller.play_turn(Some(pos(n))).unwrap());
        }
        last.unwrap()
    }

    #[test]
    fn test_new_rejects_zero_winning_score() {
        let config = MatchConfig::default().with_winning_score(0);
        let result =
            MatchController::new(&config, PlayerSpec::human("Ann"), PlayerSpec::human("Bob"));
        assert!(matches!(result, Err(Error::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_new_rejects_blank_name() {
        let result = MatchController::new(
            &MatchConfig::default(),
            PlayerSpec::human("Ann"),
            PlayerSpec::human("   "),
        );
        assert!(matches!(result, Err(Error::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_new_match_state() {
        let controller = humans(3);
        assert_eq!(controller.game_number(), 1);
        assert_eq!(controller.max_games(), 15);
        assert_eq!(controller.board().empty_positions().len(), 9);
        assert_eq!(controller.phase().active(), Some(PlayerOrder::First));
        assert_eq!(controller.player(PlayerOrder::First).marker(), Marker::PlayerOne);
        assert_eq!(controller.player(PlayerOrder::Second).marker(), Marker::PlayerTwo);
    }

    #[test]
    fn test_first_mover_alternates() {
        assert_eq!(MatchController::first_mover_for(1), PlayerOrder::First);
        assert_eq!(MatchController::first_mover_for(2), PlayerOrder::Second);
        assert_eq!(MatchController::first_mover_for(3), PlayerOrder::First);
    }

    #[test]
    fn test_turns_alternate_within_game() {
        let mut controller = humans(3);
        let report = controller.play_turn(Some(pos(1))).unwrap();
        assert_eq!(report.player, PlayerOrder::First);
        assert_eq!(report.phase.active(), Some(PlayerOrder::Second));
        assert_eq!(controller.board().get(pos(1)), Marker::PlayerOne);
    }

    #[test]
    fn test_human_turn_without_input_fails() {
        let mut controller = humans(3);
        let result = controller.play_turn(None);
        assert!(matches!(result, Err(Error::MissingInput { .. })));
        assert_eq!(controller.board().marked_count(), 0);
    }

    #[test]
    fn test_occupied_square_rejected_without_changing_turn() {
        let mut controller = humans(3);
        controller.play_turn(Some(pos(5))).unwrap();
        let err = controller.play_turn(Some(pos(5))).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidMove {
                reason: MoveRejection::Occupied,
                ..
            }
        ));
        assert_eq!(controller.phase().active(), Some(PlayerOrder::Second));
    }

    #[test]
    fn test_win_awards_point_and_keeps_board() {
        let mut controller = humans(3);
        let report = play(&mut controller, &[1, 4, 2, 5, 3]);

        let expected = GameOutcome::Winner {
            order: PlayerOrder::First,
            line: WIN_LINES[0],
        };
        assert_eq!(report.phase, MatchPhase::GameOver(expected));
        assert_eq!(controller.score(PlayerOrder::First), 1);
        assert_eq!(controller.score(PlayerOrder::Second), 0);
        assert_eq!(controller.game_number(), 2);
        assert_eq!(controller.board().marked_count(), 5);

        let record = controller.last_game().unwrap();
        assert_eq!(record.game_number, 1);
        assert_eq!(record.first_mover, PlayerOrder::First);
        assert_eq!(record.moves, 5);
    }

    #[test]
    fn test_move_after_game_over_rejected() {
        let mut controller = humans(3);
        play(&mut controller, &[1, 4, 2, 5, 3]);
        assert_eq!(controller.play_turn(Some(pos(9))), Err(Error::NoGameInProgress));
        assert_eq!(controller.play_turn(None), Err(Error::NoGameInProgress));
        assert_eq!(controller.board().marked_count(), 5);
    }

    #[test]
    fn test_start_next_game_resets_board_and_swaps_opener() {
        let mut controller = humans(3);
        play(&mut controller, &[1, 4, 2, 5, 3]);
        assert_eq!(controller.start_next_game().unwrap(), PlayerOrder::Second);
        assert!(controller.board().empty_positions().len() == 9);

        // The second seat opens with O.
        controller.play_turn(Some(pos(5))).unwrap();
        assert_eq!(controller.board().get(pos(5)), Marker::PlayerTwo);
    }

    #[test]
    fn test_start_next_game_mid_game_is_noop() {
        let mut controller = humans(3);
        controller.play_turn(Some(pos(1))).unwrap();
        assert_eq!(controller.start_next_game().unwrap(), PlayerOrder::Second);
        assert_eq!(controller.board().marked_count(), 1);
    }

    #[test]
    fn test_tie_leaves_scores_unchanged() {
        let mut controller = humans(3);
        let report = play(&mut controller, &[1, 2, 3, 5, 4, 6, 8, 7, 9]);
        assert_eq!(report.phase, MatchPhase::GameOver(GameOutcome::Tie));
        assert_eq!(controller.score(PlayerOrder::First), 0);
        assert_eq!(controller.score(PlayerOrder::Second), 0);
        assert_eq!(controller.game_number(), 2);
    }

    #[test]
    fn test_match_over_at_winning_score() {
        let mut controller = humans(1);
        let report = play(&mut controller, &[1, 4, 2, 5, 3]);
        assert!(report.phase.is_match_over());
        assert_eq!(
            controller.match_outcome(),
            Some(MatchOutcome::Champion(PlayerOrder::First))
        );
        assert_eq!(controller.start_next_game(), Err(Error::MatchOver));
        assert_eq!(controller.play_turn(Some(pos(9))), Err(Error::MatchOver));
    }

    #[test]
    fn test_play_game_with_scripted_humans() {
        let mut controller = humans(3);
        let mut input = ScriptedMoves::new([1, 4, 2, 5, 3].map(pos));
        let outcome = controller.play_game(&mut input).unwrap();
        assert_eq!(outcome.winner(), Some(PlayerOrder::First));
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn test_play_game_runs_out_of_human_moves() {
        let mut controller = humans(3);
        let mut input = ScriptedMoves::new([1, 4].map(pos));
        let result = controller.play_game(&mut input);
        assert!(matches!(result, Err(Error::MissingInput { .. })));
    }

    #[test]
    fn test_play_match_between_computers_terminates() {
        let config = MatchConfig::default().with_winning_score(2).with_seed(11);
        let mut controller = MatchController::new(
            &config,
            PlayerSpec::computer("Easy", Difficulty::Easy),
            PlayerSpec::computer("Hard", Difficulty::Hard),
        )
        .unwrap();

        let outcome = controller.play_match(&mut NoHumanInput).unwrap();
        assert_eq!(controller.match_outcome(), Some(outcome));
        assert_eq!(controller.history().len() as u32, controller.game_number() - 1);
        assert!(controller.game_number() <= controller.max_games() + 1);
    }

    #[test]
    fn test_reset_match_clears_progress() {
        let mut controller = humans(1);
        play(&mut controller, &[1, 4, 2, 5, 3]);
        assert!(controller.is_match_over());

        controller.reset_match(2).unwrap();
        assert_eq!(controller.winning_score(), 2);
        assert_eq!(controller.max_games(), 10);
        assert_eq!(controller.game_number(), 1);
        assert_eq!(controller.score(PlayerOrder::First), 0);
        assert!(controller.history().is_empty());
        assert_eq!(controller.board().marked_count(), 0);
        assert_eq!(controller.phase().active(), Some(PlayerOrder::First));
    }

    #[test]
    fn test_reset_match_rejects_zero_and_keeps_state() {
        let mut controller = humans(1);
        play(&mut controller, &[1, 4, 2, 5, 3]);
        assert!(controller.reset_match(0).is_err());
        assert!(controller.is_match_over());
        assert_eq!(controller.winning_score(), 1);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut controller = humans(3);
        play(&mut controller, &[1, 4, 2, 5, 3]);
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.game_number, 2);
        assert_eq!(snapshot.players[PlayerOrder::First].score(), 1);
        assert_eq!(snapshot.history.len(), 1);
        assert_eq!(&snapshot.board, controller.board());
        assert!(matches!(snapshot.phase, MatchPhase::GameOver(_)));
    }

    #[test]
    fn test_hard_computer_kind_recorded() {
        let controller = MatchController::new(
            &MatchConfig::default(),
            PlayerSpec::human("Ann"),
            PlayerSpec::computer("Deep", Difficulty::Hard),
        )
        .unwrap();
        assert_eq!(
            controller.player(PlayerOrder::Second).kind(),
            PlayerKind::Computer(Difficulty::Hard)
        );
    }
}
