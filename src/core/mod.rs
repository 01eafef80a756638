//! Core engine types: positions, pieces, players, moves, ids, RNG, configuration.
//!
//! These are the leaf building blocks shared by the board, the rules
//! trait, and the game implementation.

pub mod position;
pub mod piece;
pub mod player;
pub mod id;
pub mod moves;
pub mod rng;
pub mod config;

pub use position::{Position, BOARD_LENGTH};
pub use piece::{Color, Piece, Rank};
pub use player::{ColorMap, Player};
pub use id::{GameId, GameIdAllocator};
pub use moves::{Move, MoveChain, MoveKind, TurnRecord};
pub use rng::GameRng;
pub use config::GameConfig;
