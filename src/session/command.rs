//! Requests and replies exchanged with the request-handling layer.

use serde::{Deserialize, Serialize};

use crate::board::BoardView;
use crate::core::{Color, Move};
use crate::error::GameError;

/// What a seated player asks of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", content = "data", rename_all = "camelCase")]
pub enum Command {
    /// Stage a move on the pending chain.
    ProposeMove(Move),
    /// Apply the pending chain and hand over the turn.
    CommitTurn,
    /// Drop the last staged move.
    BackupMove,
    /// Ask for a legal move.
    RequestSuggestion,
    /// Fetch the board oriented for a seat.
    QueryBoard(Color),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageKind {
    Info,
    Error,
}

/// Human-readable outcome shown to the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub text: String,
}

impl Message {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.kind == MessageKind::Error
    }
}

impl From<GameError> for Message {
    fn from(err: GameError) -> Self {
        Self::error(err.to_string())
    }
}

/// Reply to a [`Command`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "response", rename_all = "camelCase")]
pub enum Response {
    Message(Message),
    /// A committed turn, with the game-over message if it ended the game.
    Turn {
        message: Message,
        game_over: Option<String>,
    },
    Board(BoardView),
    Suggestion { suggestion: Option<Move> },
}

impl Response {
    /// The message carried by this reply, if any.
    #[must_use]
    pub fn message(&self) -> Option<&Message> {
        match self {
            Response::Message(message) | Response::Turn { message, .. } => Some(message),
            Response::Board(_) | Response::Suggestion { .. } => None,
        }
    }
}

impl From<GameError> for Response {
    fn from(err: GameError) -> Self {
        Response::Message(err.into())
    }
}
