//! Game configuration.
//!
//! The board geometry and movement rules are fixed; what a collaborator
//! may choose is who opens, how many rows each side starts with, and the
//! seed for the suggestion source.

use serde::{Deserialize, Serialize};

use super::piece::Color;

/// Per-game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side that owns the first turn.
    pub first_turn: Color,

    /// Rows populated per side at setup (3 = standard twelve pieces).
    pub starting_rows: u8,

    /// Seed for the suggestion RNG held by a `GameHandle`.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_turn: Color::Red,
            starting_rows: 3,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Set the opening side.
    #[must_use]
    pub fn with_first_turn(mut self, color: Color) -> Self {
        self.first_turn = color;
        self
    }

    /// Set how many rows per side start populated.
    #[must_use]
    pub fn with_starting_rows(mut self, rows: u8) -> Self {
        assert!((1..=3).contains(&rows), "Starting rows must be 1-3");
        self.starting_rows = rows;
        self
    }

    /// Set the suggestion seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
