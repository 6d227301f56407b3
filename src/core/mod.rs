//! Core engine types: players, state, moves, RNG, configuration.
//!
//! Everything here is ruleset-agnostic plumbing; the turn economy itself
//! lives in `games::clash`.

pub mod action;
pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Move, PASS_INDEX};
pub use config::RulesConfig;
pub use player::{PlayerId, PlayerPair};
pub use rng::{derive_seed, GameRng, GameRngState};
pub use state::{GameState, MatchStatus, PlayerState};
