//! # clash-core
//!
//! Authoritative rules engine for Chain Clash, a two-player, turn-based,
//! mana-constrained card duel.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: One hex seed fixes both shuffles. Given the decks,
//!    the seed and the move list, anyone can replay a match bit for bit.
//!
//! 2. **Untrusted Input**: Every move is validated before it is applied, and
//!    failures are typed errors, never panics.
//!
//! 3. **Value Semantics**: Transitions take `&GameState` and return a new
//!    state. Zones and the event log are `im` persistent vectors, so this
//!    stays cheap.
//!
//! ## Modules
//!
//! - `core`: Players, state, moves, RNG, configuration
//! - `cards`: Card catalog, instances, deck validation
//! - `events`: Append-only match log
//! - `rules`: RulesEngine trait
//! - `games`: The Chain Clash state machine and replay verification
//! - `view`: Per-player information hiding
//! - `rating`: Elo updates
//! - `error`: Error types

pub mod cards;
pub mod core;
pub mod error;
pub mod events;
pub mod games;
pub mod rating;
pub mod rules;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    derive_seed, GameRng, GameRngState, GameState, MatchStatus, Move, PlayerId, PlayerPair, PlayerState,
    RulesConfig,
};

pub use crate::cards::{
    lookup, validate_deck, CardCategory, CardDefinition, CardId, CardInstance, CardRegistry, InstanceId, Rarity,
};

pub use crate::error::{CatalogError, DeckError, Error, MoveError, ReplayError, Result, SnapshotError};

pub use crate::events::{Effect, EventKind, EventPayload, GameEvent, GameOverReason};

pub use crate::games::clash::{apply_move, forfeit, init_game, is_valid_move, replay, ClashGame};

pub use crate::rating::{calculate_elo, expected_score, EloConfig, EloResult};

pub use crate::rules::{GameResult, RulesEngine};

pub use crate::view::sanitize_for_player;
