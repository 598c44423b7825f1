//! Player identity, seat and move-selection capability.

use serde::{Deserialize, Serialize};

use crate::core::{marker_for, Error, Marker, PlayerOrder, Result};

/// Computer strength.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Uniformly random among empty cells.
    Easy,
    /// Offense, defense, center, then random.
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// Where a player's moves come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    /// Moves are supplied by the input collaborator.
    Human,
    /// Moves are chosen by the engine.
    Computer(Difficulty),
}

impl PlayerKind {
    #[must_use]
    pub const fn is_human(self) -> bool {
        matches!(self, PlayerKind::Human)
    }

    #[must_use]
    pub const fn difficulty(self) -> Option<Difficulty> {
        match self {
            PlayerKind::Human => None,
            PlayerKind::Computer(difficulty) => Some(difficulty),
        }
    }
}

impl std::fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerKind::Human => write!(f, "human"),
            PlayerKind::Computer(difficulty) => write!(f, "computer ({difficulty})"),
        }
    }
}

/// What the input side provides to create a player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSpec {
    pub name: String,
    pub kind: PlayerKind,
}

impl PlayerSpec {
    pub fn new(name: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn human(name: impl Into<String>) -> Self {
        Self::new(name, PlayerKind::Human)
    }

    pub fn computer(name: impl Into<String>, difficulty: Difficulty) -> Self {
        Self::new(name, PlayerKind::Computer(difficulty))
    }
}

/// A seated player.
///
/// The marker is derived from the seat when the player is created and never
/// changes. Only the score moves during a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Player {
    name: String,
    order: PlayerOrder,
    marker: Marker,
    kind: PlayerKind,
    score: u32,
}

impl Player {
    /// Seat a player. Fails with `InvalidConfiguration` on a blank name.
    pub fn new(spec: PlayerSpec, order: PlayerOrder) -> Result<Self> {
        let name = spec.name.trim();
        if name.is_empty() {
            return Err(Error::invalid_configuration(format!(
                "{order} needs a non-empty name"
            )));
        }

        Ok(Self {
            name: name.to_string(),
            order,
            marker: marker_for(order),
            kind: spec.kind,
            score: 0,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn order(&self) -> PlayerOrder {
        self.order
    }

    #[must_use]
    pub fn marker(&self) -> Marker {
        self.marker
    }

    #[must_use]
    pub fn opponent_marker(&self) -> Marker {
        self.marker.opponent()
    }

    #[must_use]
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    #[must_use]
    pub fn is_human(&self) -> bool {
        self.kind.is_human()
    }

    /// Games won in the current match.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn award_point(&mut self) {
        self.score += 1;
    }

    pub(crate) fn reset_score(&mut self) {
        self.score = 0;
    }
}
