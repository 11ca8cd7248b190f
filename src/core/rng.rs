//! Random number generation behind an injectable source.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Injectable**: Decks and dice own their generator, so tests can
//!   pin a seed while production wiring seeds from OS entropy
//!
//! ## Usage
//!
//! ```
//! use tabletop_kit::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut data = vec![1, 2, 3, 4, 5];
//! rng.shuffle(&mut data);
//!
//! // Same seed, same permutation
//! let mut rng2 = GameRng::new(42);
//! let mut data2 = vec![1, 2, 3, 4, 5];
//! rng2.shuffle(&mut data2);
//! assert_eq!(data, data2);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random source for shuffles and die rolls.
///
/// Uses ChaCha8 for speed while maintaining statistical quality. No
/// cryptographic guarantees are promised to callers.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from OS entropy.
    ///
    /// This is the production default when no seed is supplied.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place.
    ///
    /// Unbiased Fisher-Yates permutation: every ordering of the slice is
    /// equally likely.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
