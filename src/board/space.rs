//! Board cells and rows.

use serde::{Deserialize, Serialize};

use crate::core::{Piece, BOARD_LENGTH};

/// One cell of the board.
///
/// `playable` is fixed at construction (dark squares only); the occupant
/// is the only thing that changes during a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Space {
    cell_idx: u8,
    playable: bool,
    piece: Option<Piece>,
}

impl Space {
    /// Create a space. A piece may only sit on a playable space.
    #[must_use]
    pub fn new(cell_idx: u8, playable: bool, piece: Option<Piece>) -> Self {
        assert!(playable || piece.is_none(), "Pieces only go on playable spaces");
        Self {
            cell_idx,
            playable,
            piece,
        }
    }

    /// Column of this space within its row.
    #[must_use]
    pub fn cell_idx(&self) -> u8 {
        self.cell_idx
    }

    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.playable
    }

    #[must_use]
    pub fn piece(&self) -> Option<Piece> {
        self.piece
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.piece.is_none()
    }

    pub(crate) fn piece_mut(&mut self) -> Option<&mut Piece> {
        self.piece.as_mut()
    }

    pub(crate) fn take(&mut self) -> Option<Piece> {
        self.piece.take()
    }

    pub(crate) fn put(&mut self, piece: Piece) {
        assert!(self.playable, "Cell {} is not playable", self.cell_idx);
        assert!(self.piece.is_none(), "Cell {} is already occupied", self.cell_idx);
        self.piece = Some(piece);
    }
}

/// One row of eight spaces.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    index: u8,
    spaces: Vec<Space>,
}

impl Row {
    /// An empty row with checkerboard parity for `index`.
    #[must_use]
    pub fn empty(index: u8) -> Self {
        let spaces = (0..BOARD_LENGTH as u8)
            .map(|cell| Space::new(cell, (index + cell) % 2 == 1, None))
            .collect();
        Self { index, spaces }
    }

    /// A row whose playable spaces all hold `piece`.
    #[must_use]
    pub fn filled(index: u8, piece: Piece) -> Self {
        let mut row = Self::empty(index);
        for space in row.spaces.iter_mut().filter(|s| s.playable) {
            space.piece = Some(piece);
        }
        row
    }

    /// This row with its spaces in the opposite order. Indices are kept.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            index: self.index,
            spaces: self.spaces.iter().rev().cloned().collect(),
        }
    }

    #[must_use]
    pub fn index(&self) -> u8 {
        self.index
    }

    /// Find the space with the given cell index.
    #[must_use]
    pub fn space(&self, cell_idx: u8) -> Option<&Space> {
        self.spaces.iter().find(|s| s.cell_idx == cell_idx)
    }

    pub(crate) fn space_mut(&mut self, cell_idx: u8) -> Option<&mut Space> {
        self.spaces.iter_mut().find(|s| s.cell_idx == cell_idx)
    }

    /// Spaces in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Space> {
        self.spaces.iter()
    }
}
