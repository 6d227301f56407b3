//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - Legal moves for each state
//! - How moves produce the next state
//! - Win/loss conditions
//!
//! Callers such as replay verification and bots drive a match through
//! `RulesEngine` without knowing the concrete ruleset.

pub mod engine;

pub use engine::{GameResult, MoveList, RulesEngine};
