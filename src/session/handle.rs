//! Shared, lock-guarded access to one game.
//!
//! Both seated players reach the same `Game` concurrently: one stages
//! moves while the other polls the board. Every mutation runs under the
//! write lock, so two callers can never interleave chain edits; board
//! queries share the read lock and always see a whole commit or none of
//! it.

use std::sync::{Arc, Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, instrument};

use super::command::{Command, Message, Response};
use crate::core::{GameId, GameRng, MoveKind, Player};
use crate::error::GameError;
use crate::games::checkers::Game;
use crate::rules::RulesEngine;

/// Cloneable handle to a game shared between request handlers.
#[derive(Clone, Debug)]
pub struct GameHandle {
    id: GameId,
    game: Arc<RwLock<Game>>,
    rng: Arc<Mutex<GameRng>>,
}

impl GameHandle {
    /// Share `game`, seeding suggestions from its configuration.
    pub fn new(game: Game) -> Self {
        let rng = GameRng::new(game.config().seed);
        Self::with_rng(game, rng)
    }

    /// Share `game` with a caller-supplied suggestion source.
    pub fn with_rng(game: Game, rng: GameRng) -> Self {
        Self {
            id: game.id(),
            game: Arc::new(RwLock::new(game)),
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    #[must_use]
    pub fn id(&self) -> GameId {
        self.id
    }

    // Rejected operations never leave a half-applied state behind, so a
    // poisoned lock still guards a consistent game.
    fn read(&self) -> RwLockReadGuard<'_, Game> {
        self.game.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Game> {
        self.game.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// A consistent copy of the game.
    #[must_use]
    pub fn snapshot(&self) -> Game {
        self.read().clone()
    }

    /// Run `f` against the game under the read lock.
    pub fn inspect<R>(&self, f: impl FnOnce(&Game) -> R) -> R {
        f(&self.read())
    }

    /// Execute `command` on behalf of `caller`.
    #[instrument(level = "debug", skip(self), fields(game = %self.id))]
    pub fn handle(&self, caller: &Player, command: Command) -> Response {
        let response = match command {
            Command::QueryBoard(color) => Ok(Response::Board(self.read().view_for(color))),
            Command::RequestSuggestion => self.suggest(caller),
            command => self.mutate(caller, command),
        };

        response.unwrap_or_else(|err| {
            debug!(%caller, %err, "command rejected");
            err.into()
        })
    }

    fn suggest(&self, caller: &Player) -> Result<Response, GameError> {
        let game = self.read();
        if !game.is_turn_of(caller) {
            return Err(GameError::NotYourTurn);
        }
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(Response::Suggestion {
            suggestion: game.suggest_move(&mut rng),
        })
    }

    fn mutate(&self, caller: &Player, command: Command) -> Result<Response, GameError> {
        let mut game = self.write();
        if game.is_game_over() {
            return Err(GameError::GameAlreadyOver);
        }
        if !game.is_turn_of(caller) {
            return Err(GameError::NotYourTurn);
        }

        match command {
            Command::ProposeMove(mv) => {
                let staged = game.validate_move(mv)?;
                let text = match staged.kind {
                    Some(MoveKind::Jump) => "Valid jump move.",
                    _ => "Valid simple move.",
                };
                Ok(Response::Message(Message::info(text)))
            }
            Command::BackupMove => {
                game.backup_move()?;
                Ok(Response::Message(Message::info("Move backed up.")))
            }
            Command::CommitTurn => {
                if game.pending_moves().is_empty() {
                    return Err(GameError::NothingToSubmit);
                }
                let outcome = game.commit_turn()?;
                if outcome.game_over.is_none() {
                    game.pass_turn()?;
                }
                Ok(Response::Turn {
                    message: Message::info("Turn submitted."),
                    game_over: outcome.game_over,
                })
            }
            Command::QueryBoard(_) | Command::RequestSuggestion => {
                unreachable!("read-only commands are handled without the write lock")
            }
        }
    }
}
