//! The authoritative 8×8 board.
//!
//! ## Layout
//!
//! Rows are stored top to bottom from red's point of view: white starts on
//! rows `0..starting_rows`, red on the last `starting_rows` rows. A row
//! keeps its index even when a projection reorders rows, so lookups by
//! index work on both the authoritative board and a projection.
//!
//! ## Counts
//!
//! `counts` tracks pieces left per color. It changes only when a piece is
//! placed during setup or captured during a commit, which keeps
//! `red + white + empty playable spaces == 32`. On the wire a board is its
//! rows only; counts are recomputed from the pieces when it is read back.

use std::borrow::Cow;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use super::space::{Row, Space};
use super::view::BoardView;
use crate::core::{Color, ColorMap, Piece, Position, BOARD_LENGTH};
use crate::error::GameError;

/// Number of dark squares.
pub const PLAYABLE_SPACES: usize = 32;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardView", into = "BoardView")]
pub struct Board {
    rows: Vec<Row>,
    counts: ColorMap<u8>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard setup: three rows of men per side.
    #[must_use]
    pub fn new() -> Self {
        Self::with_starting_rows(3)
    }

    /// Setup with `rows` populated rows per side.
    #[must_use]
    pub fn with_starting_rows(rows: u8) -> Self {
        assert!((1..=3).contains(&rows), "Starting rows must be 1-3");

        let last = BOARD_LENGTH as u8;
        let rows_vec = (0..last)
            .map(|index| {
                if index < rows {
                    Row::filled(index, Piece::man(Color::White))
                } else if index >= last - rows {
                    Row::filled(index, Piece::man(Color::Red))
                } else {
                    Row::empty(index)
                }
            })
            .collect();

        let per_side = rows * (last / 2);
        Self {
            rows: rows_vec,
            counts: ColorMap::with_value(per_side),
        }
    }

    /// A board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            rows: (0..BOARD_LENGTH as u8).map(Row::empty).collect(),
            counts: ColorMap::with_value(0),
        }
    }

    /// Put a piece on an empty dark square during setup.
    pub fn place(&mut self, pos: Position, piece: Piece) -> &mut Self {
        self.space_mut(pos).put(piece);
        self.counts[piece.color] += 1;
        self
    }

    // === Lookup ===

    /// Find the row with the given index.
    #[must_use]
    pub fn row(&self, index: u8) -> Option<&Row> {
        self.rows.iter().find(|r| r.index() == index)
    }

    /// The space at `pos`, or `None` when off the board.
    #[must_use]
    pub fn space(&self, pos: Position) -> Option<&Space> {
        if !pos.is_in_bounds() {
            return None;
        }
        self.row(pos.row as u8)?.space(pos.cell as u8)
    }

    /// The piece at `pos`, if any.
    #[must_use]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.space(pos).and_then(Space::piece)
    }

    /// Rows in display order.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    /// Every piece of `color` with its position.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.rows.iter().flat_map(move |row| {
            row.iter().filter_map(move |space| {
                space
                    .piece()
                    .filter(|p| p.color == color)
                    .map(|p| (Position::new(row.index() as i8, space.cell_idx() as i8), p))
            })
        })
    }

    // === Counts ===

    /// Pieces left for `color`.
    #[must_use]
    pub fn count(&self, color: Color) -> u8 {
        self.counts[color]
    }

    /// Dark squares with nothing on them.
    #[must_use]
    pub fn empty_playable_spaces(&self) -> usize {
        self.rows
            .iter()
            .flat_map(Row::iter)
            .filter(|s| s.is_playable() && s.is_empty())
            .count()
    }

    /// Record one capture of `color`.
    pub fn decrement_count(&mut self, color: Color) {
        let count = &mut self.counts[color];
        assert!(*count > 0, "{color} piece count would go negative");
        *count -= 1;
    }

    // === Mutation (commit only) ===

    fn space_mut(&mut self, pos: Position) -> &mut Space {
        let (row, cell) = pos.indices();
        self.rows
            .iter_mut()
            .find(|r| r.index() as usize == row)
            .and_then(|r| r.space_mut(cell as u8))
            .unwrap_or_else(|| panic!("Board has no space at {pos}"))
    }

    /// Move the piece at `from` onto the empty square `to`.
    pub(crate) fn relocate(&mut self, from: Position, to: Position) -> Piece {
        let piece = self
            .space_mut(from)
            .take()
            .unwrap_or_else(|| panic!("No piece to move at {from}"));
        self.space_mut(to).put(piece);
        piece
    }

    /// Remove a captured piece and decrement its color's count.
    pub(crate) fn capture(&mut self, pos: Position) -> Piece {
        let piece = self
            .space_mut(pos)
            .take()
            .unwrap_or_else(|| panic!("No piece to capture at {pos}"));
        self.decrement_count(piece.color);
        piece
    }

    /// Crown the piece at `pos`. Returns true if it was a man.
    pub(crate) fn promote(&mut self, pos: Position) -> bool {
        self.space_mut(pos).piece_mut().is_some_and(Piece::promote)
    }

    // === Views ===

    /// The board as seen from `color`'s seat.
    ///
    /// Red sees the authoritative board. White gets a fresh copy with rows
    /// and spaces reversed so its own pieces sit at the bottom.
    #[must_use]
    pub fn project(&self, color: Color) -> Cow<'_, Board> {
        match color {
            Color::Red => Cow::Borrowed(self),
            Color::White => Cow::Owned(Board {
                rows: self.rows.iter().rev().map(Row::reversed).collect(),
                counts: self.counts.clone(),
            }),
        }
    }

    /// Serializable grid in display order.
    #[must_use]
    pub fn view(&self) -> BoardView {
        BoardView::from(self)
    }
}

impl Index<Position> for Board {
    type Output = Space;

    fn index(&self, pos: Position) -> &Self::Output {
        self.space(pos)
            .unwrap_or_else(|| panic!("Position {pos} is off the board"))
    }
}

/// Rebuild an authoritative board from its rows.
///
/// Rows must be in index order `0..8`, cells in order `0..8` with the dark
/// parity, and pieces only on dark cells.
impl TryFrom<BoardView> for Board {
    type Error = GameError;

    fn try_from(view: BoardView) -> Result<Self, Self::Error> {
        let length = BOARD_LENGTH as usize;
        let well_formed = view.rows.len() == length
            && view.rows.iter().enumerate().all(|(r, row)| {
                row.index() as usize == r
                    && row.iter().count() == length
                    && row.iter().enumerate().all(|(c, space)| {
                        space.cell_idx() as usize == c
                            && space.is_playable() == Position::new(r as i8, c as i8).is_dark()
                            && (space.is_playable() || space.is_empty())
                    })
            });
        if !well_formed {
            return Err(GameError::InvalidBoard);
        }

        let mut counts = ColorMap::with_value(0u8);
        for piece in view.rows.iter().flat_map(Row::iter).filter_map(Space::piece) {
            counts[piece.color] += 1;
        }

        Ok(Self {
            rows: view.rows,
            counts,
        })
    }
}

impl From<Board> for BoardView {
    fn from(board: Board) -> Self {
        Self { rows: board.rows }
    }
}
