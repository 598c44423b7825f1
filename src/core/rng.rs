//! Deterministic random number generation for computer moves.
//!
//! Every random draw in a match (easy computers, the hard heuristic's last
//! resort) comes from one `GameRng`, so a seed plus the human inputs fully
//! determines a match.
//!
//! ```
//! use ttt_series::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! let cells = [1, 2, 3, 4, 5];
//! assert_eq!(a.choose(&cells), b.choose(&cells));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seeded RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork an independent, deterministic stream.
    ///
    /// Each rematch draws from its own fork so that replaying match `n` does
    /// not depend on how many draws earlier matches consumed.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Choose a uniformly random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }

    /// Current state, for reporting alongside a match snapshot.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }
}

/// Serializable RNG position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Seed of the current stream
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Forks taken from this stream so far
    pub fork_counter: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draws(rng: &mut GameRng, n: usize) -> Vec<u32> {
        let values: Vec<u32> = (0..1000).collect();
        (0..n).map(|_| *rng.choose(&values).unwrap()).collect()
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);
        assert_eq!(draws(&mut rng1, 50), draws(&mut rng2, 50));
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);
        assert_ne!(draws(&mut rng1, 10), draws(&mut rng2, 10));
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = GameRng::new(42);
        let mut forked = rng.fork();
        assert_ne!(draws(&mut rng, 10), draws(&mut forked, 10));
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let mut forked1 = rng1.fork();
        let mut forked2 = rng2.fork();

        assert_eq!(forked1.seed(), forked2.seed());
        assert_eq!(draws(&mut forked1, 10), draws(&mut forked2, 10));
    }

    #[test]
    fn test_choose_empty() {
        let mut rng = GameRng::new(42);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_state_tracks_progress() {
        let mut rng = GameRng::new(42);
        let before = rng.state();
        let _ = draws(&mut rng, 5);
        let after = rng.state();

        assert_eq!(before.seed, after.seed);
        assert!(after.word_pos > before.word_pos);

        let _ = rng.fork();
        assert_eq!(rng.state().fork_counter, 1);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
            fork_counter: 5,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
