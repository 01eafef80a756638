//! Piece colors, ranks, and pieces.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::position::BOARD_LENGTH;

/// Side of the board. Red moves first by default and sits at the bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Color {
    Red,
    White,
}

impl Color {
    /// Both colors, red first.
    pub const ALL: [Color; 2] = [Color::Red, Color::White];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::Red => Color::White,
            Color::White => Color::Red,
        }
    }

    /// Row delta of a forward step: red moves up, white moves down.
    #[must_use]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Red => -1,
            Color::White => 1,
        }
    }

    /// The row on which a man of this color is crowned.
    #[must_use]
    pub const fn far_row(self) -> i8 {
        match self {
            Color::Red => 0,
            Color::White => BOARD_LENGTH - 1,
        }
    }

    /// Index into per-color storage.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => f.write_str("Red"),
            Color::White => f.write_str("White"),
        }
    }
}

/// Piece rank. A man only moves forward; a king moves both ways.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rank {
    Man,
    King,
}

/// A checker: compared by value, never by identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub rank: Rank,
}

impl Piece {
    #[must_use]
    pub const fn new(color: Color, rank: Rank) -> Self {
        Self { color, rank }
    }

    #[must_use]
    pub const fn man(color: Color) -> Self {
        Self::new(color, Rank::Man)
    }

    #[must_use]
    pub const fn king(color: Color) -> Self {
        Self::new(color, Rank::King)
    }

    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self.rank, Rank::King)
    }

    /// Crown this piece. Returns true if the rank changed.
    pub fn promote(&mut self) -> bool {
        let was_man = !self.is_king();
        self.rank = Rank::King;
        was_man
    }

    /// Row deltas this piece may travel along.
    #[must_use]
    pub fn row_directions(self) -> &'static [i8] {
        match (self.rank, self.color) {
            (Rank::King, _) => &[-1, 1],
            (Rank::Man, Color::Red) => &[-1],
            (Rank::Man, Color::White) => &[1],
        }
    }

    /// Whether a step with row delta `dr` is allowed for this piece.
    #[must_use]
    pub fn may_travel(self, dr: i8) -> bool {
        self.row_directions().contains(&dr.signum())
    }
}
