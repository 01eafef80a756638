//! Concrete game implementations of [`RulesEngine`](crate::rules::RulesEngine).

pub mod checkers;
