//! Seedable random source for move suggestions.
//!
//! Suggestion operations never create their own generator; callers hand
//! one in. Tests pass a fixed seed and get a reproducible pick, and a
//! `GameHandle` keeps one per game seeded from its configuration.
//!
//! ```
//! use checkers_engine::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! let items = [1, 2, 3, 4];
//! assert_eq!(a.choose(&items), b.choose(&items));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic ChaCha8 generator.
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

    /// Choose an element uniformly at random.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}
