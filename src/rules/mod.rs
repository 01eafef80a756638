//! Checkers rules as a trait.
//!
//! `RulesEngine` defines:
//! - Simple and jump classification
//! - Forced-capture and chain-continuation checks
//! - Legal move enumeration
//! - The win condition
//!
//! Implementors only supply the board, the side to move, and the moves
//! staged so far.

pub mod engine;

pub use engine::{Candidates, GameResult, RulesEngine};
