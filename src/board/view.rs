//! Serializable board snapshots.
//!
//! A `BoardView` is what gets handed to the rendering layer: rows of
//! `(cellIdx, playable, piece)` in display order, already oriented for
//! the requesting seat.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::grid::Board;
use super::space::Row;
use crate::core::{Color, Rank};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub rows: Vec<Row>,
}

impl From<&Board> for BoardView {
    fn from(board: &Board) -> Self {
        Self {
            rows: board.rows().cloned().collect(),
        }
    }
}

/// One character per square: `r`/`w` for men, `R`/`W` for kings,
/// `.` for an empty dark square and a space for a light one.
impl fmt::Display for BoardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for space in row.iter() {
                let c = match space.piece() {
                    Some(p) => match (p.color, p.rank) {
                        (Color::Red, Rank::Man) => 'r',
                        (Color::Red, Rank::King) => 'R',
                        (Color::White, Rank::Man) => 'w',
                        (Color::White, Rank::King) => 'W',
                    },
                    None if space.is_playable() => '.',
                    None => ' ',
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
