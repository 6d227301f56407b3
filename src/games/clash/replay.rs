//! Match verification by replay.
//!
//! Given the two submitted decks, the seed and the ordered move list, rebuild
//! the match from scratch. Any party holding those inputs can confirm the
//! final state without trusting the server that produced it.

use tracing::warn;

use super::game::ClashGame;
use crate::cards::{validate_deck_with, CardRegistry};
use crate::core::{GameState, Move};
use crate::error::ReplayError;
use crate::rules::RulesEngine;

impl ClashGame {
    /// Replay a full match.
    ///
    /// Decks are validated first, then every move is checked before it is
    /// applied. Returns the first failure with its 0-based move number.
    pub fn replay(&self, deck1: &[u32], deck2: &[u32], seed: &str, moves: &[Move]) -> Result<GameState, ReplayError> {
        let registry = CardRegistry::standard();
        for (player, deck) in [(1, deck1), (2, deck2)] {
            validate_deck_with(deck, self.config().deck_size, registry).map_err(|source| {
                warn!(player, %source, "replay deck rejected");
                ReplayError::Deck { player, source }
            })?;
        }

        let mut state = self.init_game(deck1, deck2, seed)?;
        for (move_number, &mv) in moves.iter().enumerate() {
            state = self.apply_move(&state, mv).map_err(|source| {
                warn!(move_number, card_index = mv.card_index(), %source, "replay move rejected");
                ReplayError::IllegalMove { move_number, source }
            })?;
        }
        Ok(state)
    }
}
