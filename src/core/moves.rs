//! Move representation: start square, end square, and a kind assigned by
//! validation.
//!
//! A `Move` arriving from a collaborator is only a proposal: `kind` is
//! `None` until the rules engine classifies it. Committed turns are kept
//! as `TurnRecord`s for history and replay.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use super::piece::Color;
use super::position::Position;

/// How a validated move relocates its piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MoveKind {
    /// One diagonal step onto an empty square.
    Simple,
    /// Two diagonal steps over an opposing piece, capturing it.
    Jump,
}

/// A proposed or validated move.
///
/// ## Example
///
/// ```
/// use checkers_engine::core::{Move, MoveKind, Position};
///
/// let proposed = Move::new(Position::new(5, 2), Position::new(4, 3));
/// assert_eq!(proposed.kind, None);
///
/// let validated = proposed.with_kind(MoveKind::Simple);
/// assert!(validated.is_simple());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub start: Position,
    pub end: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<MoveKind>,
}

impl Move {
    /// Create an unclassified move.
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self {
            start,
            end,
            kind: None,
        }
    }

    /// Convenience constructor from raw coordinates.
    #[must_use]
    pub const fn from_coords(start: (i8, i8), end: (i8, i8)) -> Self {
        Self::new(Position::new(start.0, start.1), Position::new(end.0, end.1))
    }

    /// This move with its kind set.
    #[must_use]
    pub fn with_kind(mut self, kind: MoveKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Both ends on the board and distinct.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.start.is_in_bounds() && self.end.is_in_bounds() && self.start != self.end
    }

    #[must_use]
    pub fn is_jump(&self) -> bool {
        self.kind == Some(MoveKind::Jump)
    }

    #[must_use]
    pub fn is_simple(&self) -> bool {
        self.kind == Some(MoveKind::Simple)
    }

    /// The square jumped over. Only meaningful for jumps.
    #[must_use]
    pub fn captured(&self) -> Position {
        self.start.midpoint(self.end)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

/// Moves staged or committed within one turn.
///
/// Most turns are a single move; jump chains rarely exceed four.
pub type MoveChain = SmallVec<[Move; 4]>;

/// A committed turn, recorded for history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number (starts at 1).
    pub turn: u32,

    /// Side that played the turn.
    pub color: Color,

    /// Moves applied, in order.
    pub moves: MoveChain,

    /// Opposing pieces removed.
    pub captured: u8,

    /// Whether the moving piece was crowned.
    pub promoted: bool,
}
