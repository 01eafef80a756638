//! Standard checkers on an 8×8 board.
//!
//! - Red opens (configurable) and moves up the board
//! - Captures are forced, and a jump chain must continue while it can
//! - Men are crowned on the far row
//! - A side with no pieces left loses

mod game;

pub use game::{CommitOutcome, Game, GameBuilder};
