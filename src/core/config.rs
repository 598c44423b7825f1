//! Match configuration.
//!
//! The input side decides the target score and (optionally) the RNG seed
//! before a match starts. Everything else about a match is derived.

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};

/// Games allowed per point of the target score before the match is capped.
///
/// Ties never move either score, so without a cap a run of ties could keep a
/// match going forever.
pub const GAMES_PER_POINT: u32 = 5;

/// Match configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Score that wins the match (must be at least 1).
    pub winning_score: u32,

    /// Seed for computer move randomness.
    /// Same seed and same human moves replay the same match.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            winning_score: 3,
            seed: 42,
        }
    }
}

impl MatchConfig {
    /// Set the target score.
    #[must_use]
    pub fn with_winning_score(mut self, score: u32) -> Self {
        self.winning_score = score;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Reject configurations a match cannot start from.
    pub fn validate(&self) -> Result<()> {
        self.max_games().map(|_| ())
    }

    /// Game cap for this target: `winning_score * GAMES_PER_POINT`.
    pub fn max_games(&self) -> Result<u32> {
        max_games_for(self.winning_score)
    }
}

pub(crate) fn max_games_for(winning_score: u32) -> Result<u32> {
    if winning_score == 0 {
        return Err(Error::invalid_configuration(
            "winning score must be at least 1",
        ));
    }
    winning_score.checked_mul(GAMES_PER_POINT).ok_or_else(|| {
        Error::invalid_configuration(format!("winning score {winning_score} is too large"))
    })
}
