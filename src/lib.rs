//! # checkers-engine
//!
//! The rules engine of a two-player checkers game.
//!
//! ## Design
//!
//! 1. **Staged turns**: Moves are validated and queued on a pending chain.
//!    Nothing touches the board until the turn is committed, and the last
//!    staged move can be backed up.
//!
//! 2. **Forced captures**: A simple move is refused while any jump exists,
//!    and a jump chain cannot be committed while it can keep capturing.
//!
//! 3. **Seat projections**: The board is stored from Red's side. White sees
//!    a reversed copy with the original row and cell indices kept.
//!
//! ## Modules
//!
//! - `core`: Positions, pieces, players, moves, ids, RNG, configuration
//! - `board`: Spaces, rows, the authoritative grid and its views
//! - `rules`: `RulesEngine` trait with classification and legal moves
//! - `games`: The checkers `Game` built on the rules
//! - `session`: Lock-guarded command handling for connected players
//! - `error`: Rule violations reported to the caller

pub mod core;
pub mod board;
pub mod rules;
pub mod games;
pub mod session;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Position, BOARD_LENGTH,
    Color, Piece, Rank,
    ColorMap, Player,
    GameId, GameIdAllocator,
    Move, MoveChain, MoveKind, TurnRecord,
    GameRng, GameConfig,
};

pub use crate::board::{Board, BoardView, Row, Space, PLAYABLE_SPACES};

pub use crate::rules::{Candidates, GameResult, RulesEngine};

pub use crate::games::checkers::{CommitOutcome, Game, GameBuilder};

pub use crate::session::{Command, GameHandle, Message, MessageKind, Response};

pub use crate::error::GameError;
