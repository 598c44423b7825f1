//! # ttt-series
//!
//! A best-of-N tic-tac-toe match engine with heuristic computer players.
//!
//! ## Design Principles
//!
//! 1. **I/O-free core**: The library never reads or writes a terminal.
//!    Human moves arrive through [`MoveInput`]; the display side reads
//!    getters or a [`MatchSnapshot`].
//!
//! 2. **Tagged variants**: Players are a `PlayerKind` enum and move choice is
//!    one function, [`select_move`], matching on it.
//!
//! 3. **Deterministic**: Every random draw comes from a seeded ChaCha8
//!    stream, so the same seed and the same human moves replay the same match.
//!
//! ## Modules
//!
//! - `core`: Markers, positions, seats, RNG, configuration, errors
//! - `board`: The 3x3 grid and its eight winning lines
//! - `players`: Player identity and the offense/defense/center/random heuristic
//! - `series`: The match state machine, outcomes and snapshots
//!
//! ## Example
//!
//! ```
//! use ttt_series::{
//!     Difficulty, MatchConfig, MatchController, NoHumanInput, PlayerKind, PlayerSpec,
//! };
//!
//! let config = MatchConfig::default().with_winning_score(2).with_seed(7);
//! let hard = PlayerKind::Computer(Difficulty::Hard);
//! let mut controller = MatchController::new(
//!     &config,
//!     PlayerSpec::new("Ada", hard),
//!     PlayerSpec::new("Grace", hard),
//! )
//! .unwrap();
//!
//! controller.play_match(&mut NoHumanInput).unwrap();
//! assert!(controller.is_match_over());
//! assert!(controller.game_number() <= controller.max_games() + 1);
//! ```

pub mod board;
pub mod core;
pub mod players;
pub mod series;

// Re-export commonly used types
pub use crate::core::{
    marker_for, Error, GameRng, GameRngState, Marker, MatchConfig, MoveRejection, PlayerOrder,
    Position, Result, SeatMap, GAMES_PER_POINT,
};

pub use crate::board::{Board, EmptyPositions, LineKind, WinLine, WIN_LINES};

pub use crate::players::{
    select_move, Difficulty, MoveChoice, MoveSelector, Player, PlayerKind, PlayerSpec,
    SelectionStep,
};

pub use crate::series::{
    GameOutcome, GameRecord, MatchController, MatchOutcome, MatchPhase, MatchSnapshot,
    MoveInput, NoHumanInput, ScriptedMoves, TurnReport,
};
