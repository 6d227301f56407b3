//! Chain Clash: a two-player, mana-constrained card duel.
//!
//! ## Rules
//!
//! - Each player brings a 15-card deck and starts at 30 hp with 3 cards
//! - Turn N of a player grants min(N, 10) mana and one draw
//! - Play cards to deal damage (shield absorbs first), shield, heal or draw
//! - Reduce the opponent to 0 hp; starting a turn with no cards anywhere loses
//!
//! The free functions here run the standard ruleset. Use `ClashGame` for a
//! custom `RulesConfig` or through the `RulesEngine` trait.

mod game;
mod replay;

use std::time::SystemTime;

pub use game::{ClashGame, DEFAULT_MOVE_TIMEOUT};

use crate::core::{GameState, Move, PlayerId};
use crate::error::{CatalogError, MoveError, ReplayError};

/// Create the opening state of a standard match.
///
/// ```
/// use clash_core::games::clash::init_game;
///
/// let deck: Vec<u32> = (1..=15).collect();
/// let state = init_game(&deck, &deck, "0xdeadbeef").unwrap();
///
/// assert_eq!(state.turn_number, 1);
/// assert_eq!(state.players[state.current_turn].mana, 1);
/// ```
pub fn init_game(deck1: &[u32], deck2: &[u32], seed: &str) -> Result<GameState, CatalogError> {
    ClashGame::standard().init_game(deck1, deck2, seed)
}

/// Check a move against the standard rules.
pub fn is_valid_move(state: &GameState, mv: Move) -> Result<(), MoveError> {
    ClashGame::standard().is_valid_move(state, mv)
}

/// Validate and apply a move under the standard rules.
pub fn apply_move(state: &GameState, mv: Move) -> Result<GameState, MoveError> {
    ClashGame::standard().apply_move(state, mv)
}

/// Concede on behalf of `player`.
pub fn forfeit(state: &GameState, player: PlayerId) -> Result<GameState, MoveError> {
    ClashGame::standard().forfeit(state, player)
}

/// Whether the player to act has stalled past `DEFAULT_MOVE_TIMEOUT`.
#[must_use]
pub fn should_auto_forfeit(state: &GameState, last_move_at: Option<SystemTime>, now: SystemTime) -> bool {
    ClashGame::should_auto_forfeit(state, last_move_at, now, DEFAULT_MOVE_TIMEOUT)
}

/// The seat that loses on timeout, if the match is still running.
#[must_use]
pub fn timeout_loser(state: &GameState) -> Option<PlayerId> {
    ClashGame::timeout_loser(state)
}

/// Rebuild and verify a standard match from its inputs.
pub fn replay(deck1: &[u32], deck2: &[u32], seed: &str, moves: &[Move]) -> Result<GameState, ReplayError> {
    ClashGame::standard().replay(deck1, deck2, seed, moves)
}
