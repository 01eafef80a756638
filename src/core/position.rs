//! Board coordinates.
//!
//! A `Position` is a `(row, cell)` pair. Row 0 is the top of the red
//! player's view; cell 0 is the leftmost column. Fields are signed so
//! offsets past the edge can be represented and rejected with
//! [`Position::is_in_bounds`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of rows (and cells per row) on the board.
pub const BOARD_LENGTH: i8 = 8;

/// A `(row, cell)` coordinate on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub cell: i8,
}

impl Position {
    /// Create a position. No bounds check is performed.
    #[must_use]
    pub const fn new(row: i8, cell: i8) -> Self {
        Self { row, cell }
    }

    /// Whether both coordinates lie in `0..BOARD_LENGTH`.
    #[must_use]
    pub const fn is_in_bounds(self) -> bool {
        self.row >= 0 && self.row < BOARD_LENGTH && self.cell >= 0 && self.cell < BOARD_LENGTH
    }

    /// The position `(dr, dc)` away, if it is still on the board.
    #[must_use]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let target = Self::new(self.row.checked_add(dr)?, self.cell.checked_add(dc)?);
        target.is_in_bounds().then_some(target)
    }

    /// Row and cell deltas from `self` to `other`.
    #[must_use]
    pub const fn delta(self, other: Self) -> (i8, i8) {
        (other.row - self.row, other.cell - self.cell)
    }

    /// The square halfway between `self` and `other`.
    ///
    /// Only meaningful when both deltas are even (a jump).
    #[must_use]
    pub const fn midpoint(self, other: Self) -> Self {
        Self::new((self.row + other.row) / 2, (self.cell + other.cell) / 2)
    }

    /// Dark squares are the only playable ones.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        (self.row + self.cell) % 2 == 1
    }

    /// Row and cell as array indices. Panics when out of bounds.
    #[must_use]
    pub fn indices(self) -> (usize, usize) {
        assert!(self.is_in_bounds(), "Position {self} is off the board");
        (self.row as usize, self.cell as usize)
    }

    /// Iterate over all 64 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_LENGTH).flat_map(|row| (0..BOARD_LENGTH).map(move |cell| Position::new(row, cell)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.cell)
    }
}
