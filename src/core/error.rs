//! Error taxonomy for the match engine.
//!
//! The engine assumes its callers hand it pre-validated input. Every variant
//! here signals a broken caller contract rather than a recoverable game event,
//! so nothing is retried internally.

use derive_more::Display;

/// Why a move was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum MoveRejection {
    #[display("outside the 1-9 range")]
    OutOfRange,
    #[display("already occupied")]
    Occupied,
    #[display("cannot be marked with an empty marker")]
    EmptyMarker,
}

/// Engine error.
#[derive(Clone, Debug, PartialEq, Eq, Display, derive_more::Error)]
pub enum Error {
    /// A position was out of range or already taken.
    #[display("invalid move at square {position}: {reason}")]
    InvalidMove { position: u8, reason: MoveRejection },

    /// A move was played after a game ended and before the next one started.
    #[display("invalid move: no game is awaiting a move")]
    NoGameInProgress,

    /// Rejected before a match starts (non-positive target score, blank name).
    #[display("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// A human player's turn was played without a position from the input side.
    #[display("no move was supplied for human player {player}")]
    MissingInput { player: String },

    /// A computer was asked to move on a board with no empty cell.
    #[display("the board has no empty square")]
    BoardFull,

    /// The match has been decided; it must be reset before another game.
    #[display("the match is over")]
    MatchOver,
}

impl Error {
    pub(crate) fn invalid_move(position: u8, reason: MoveRejection) -> Self {
        Self::InvalidMove { position, reason }
    }

    pub(crate) fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
