//! Request boundary between connected players and a shared game.
//!
//! - `Command` / `Response`: serde-tagged requests and replies
//! - `GameHandle`: cloneable, lock-guarded access to one `Game`

pub mod command;
pub mod handle;

pub use command::{Command, Message, MessageKind, Response};
pub use handle::GameHandle;
