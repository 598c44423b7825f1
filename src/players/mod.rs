//! Players and how they choose moves.
//!
//! A player is a tagged variant (`PlayerKind`): humans get their moves from
//! the input side, computers from the engine. [`select_move`] is the single
//! dispatch point.

pub mod player;
pub mod selector;
pub mod strategy;

pub use player::{Difficulty, Player, PlayerKind, PlayerSpec};
pub use selector::{MoveChoice, MoveSelector, SelectionStep};
pub use strategy::select_move;
