//! Game identifiers.
//!
//! Games are keyed by an opaque `GameId` handed in by whoever constructs
//! them. `GameIdAllocator` is a lock-free sequence for collaborators that
//! need one; ids it hands out never repeat within the allocator.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque identifier for a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameId(pub u64);

impl GameId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Game({})", self.0)
    }
}

/// Monotonic source of unique `GameId`s.
///
/// ```
/// use checkers_engine::core::GameIdAllocator;
///
/// let ids = GameIdAllocator::new();
/// let a = ids.next_id();
/// let b = ids.next_id();
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Default)]
pub struct GameIdAllocator {
    next: AtomicU64,
}

impl GameIdAllocator {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(0),
        }
    }

    /// Start numbering at `first`.
    #[must_use]
    pub const fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Allocate the next id.
    pub fn next_id(&self) -> GameId {
        GameId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}
