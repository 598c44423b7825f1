//! Best-of-N match play.
//!
//! `MatchController` owns the board, both players and the scores, and moves
//! the match through its phases one half-turn at a time. Human moves come in
//! through the `MoveInput` seam; the display side reads the controller's
//! getters or a `MatchSnapshot`.

pub mod controller;
pub mod input;
pub mod outcome;
pub mod snapshot;

pub use controller::{MatchController, MatchPhase, TurnReport};
pub use input::{MoveInput, NoHumanInput, ScriptedMoves};
pub use outcome::{GameOutcome, GameRecord, MatchOutcome};
pub use snapshot::MatchSnapshot;
