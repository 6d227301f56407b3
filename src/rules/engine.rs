//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define their rules:
//! - What moves are legal
//! - How moves produce the next state
//! - Win/loss conditions

use smallvec::SmallVec;

use crate::core::action::Move;
use crate::core::config::RulesConfig;
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::error::MoveError;

/// Enumerated legal moves: pass plus at most one entry per hand slot.
pub type MoveList = SmallVec<[Move; 9]>;

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameResult {
    pub winner: PlayerId,
}

impl GameResult {
    #[must_use]
    pub fn new(winner: PlayerId) -> Self {
        Self { winner }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }

    #[must_use]
    pub fn loser(&self) -> PlayerId {
        self.winner.opponent()
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_moves`: Return empty if the match is over
/// - `apply`: Must be deterministic and must not touch its input
/// - `is_terminal`: Return None if the match continues
pub trait RulesEngine {
    /// Get the rules configuration.
    fn config(&self) -> &RulesConfig;

    /// Every move the player to act may submit.
    fn legal_moves(&self, state: &GameState) -> MoveList;

    /// Check a move without applying it.
    fn validate(&self, state: &GameState, mv: Move) -> Result<(), MoveError>;

    /// Produce the state after `mv`.
    fn apply(&self, state: &GameState, mv: Move) -> Result<GameState, MoveError>;

    /// Check if the match is over.
    ///
    /// Returns `Some(result)` if it has ended, `None` if it continues.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    fn is_legal(&self, state: &GameState, mv: Move) -> bool {
        self.validate(state, mv).is_ok()
    }
}
