//! Core engine types: markers, positions, seats, RNG, configuration, errors.
//!
//! Everything here is game-rule agnostic; the board and the match state
//! machine build on these types.

pub mod config;
pub mod error;
pub mod marker;
pub mod player;
pub mod position;
pub mod rng;

pub use config::{MatchConfig, GAMES_PER_POINT};
pub use error::{Error, MoveRejection, Result};
pub use marker::Marker;
pub use player::{marker_for, PlayerOrder, SeatMap};
pub use position::Position;
pub use rng::{GameRng, GameRngState};
