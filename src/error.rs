//! Rule violations reported back to the caller.
//!
//! Every variant is a recoverable, user-facing outcome. Its `Display`
//! text is the message shown to the player. Operations that return one
//! of these have not touched the board or the pending chain.

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Geometry or occupancy fails both simple and jump classification.
    #[error("Invalid move.")]
    InvalidMove,

    /// A simple move while a capture is available somewhere.
    #[error("Jump move available. Must make jump moves.")]
    ForcedJumpViolation,

    /// Commit attempted while the last jump can still continue.
    #[error("Possible jump move detected. You must play all jump moves.")]
    ForcedContinuationViolation,

    #[error("Not your turn!")]
    NotYourTurn,

    #[error("No move to back up.")]
    NothingToUndo,

    /// Commit with an empty pending chain.
    #[error("No move to submit.")]
    NothingToSubmit,

    #[error("Game is already over.")]
    GameAlreadyOver,

    /// Configuration outside the supported range.
    #[error("Starting rows must be 1-3.")]
    InvalidConfig,

    /// Board rows that do not form a valid layout.
    #[error("Board layout is invalid.")]
    InvalidBoard,

    /// Both seats given to the same player.
    #[error("Players must be distinct.")]
    DuplicatePlayer,
}
