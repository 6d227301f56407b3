//! Per-player views of a match.
//!
//! The authoritative state carries every card in every zone. Before a state
//! leaves the server it is projected for the receiving seat: the opponent's
//! deck order is secret, so each of its entries becomes
//! `CardInstance::HIDDEN`. Deck length stays visible.
//!
//! Hands are not hidden here. Callers that must keep the opponent's hand
//! private have to project it themselves.

use crate::cards::CardInstance;
use crate::core::{GameState, PlayerId};

/// Project `state` for `viewer`.
///
/// Returns an independent value; the input is not modified. The result is
/// for display only and must never be fed back into the rules.
///
/// ```
/// use clash_core::core::PlayerId;
/// use clash_core::games::clash::init_game;
/// use clash_core::view::sanitize_for_player;
///
/// let deck: Vec<u32> = (1..=15).collect();
/// let state = init_game(&deck, &deck, "0xdeadbeef").unwrap();
/// let view = sanitize_for_player(&state, PlayerId::ONE);
///
/// assert!(view.players[PlayerId::TWO].deck.iter().all(|c| c.is_hidden()));
/// assert_eq!(view.players[PlayerId::ONE].deck, state.players[PlayerId::ONE].deck);
/// ```
#[must_use]
pub fn sanitize_for_player(state: &GameState, viewer: PlayerId) -> GameState {
    let mut view = state.clone();
    let opponent = &mut view.players[viewer.opponent()];
    let hidden = opponent.deck.len();
    opponent.deck = std::iter::repeat(CardInstance::HIDDEN).take(hidden).collect();
    view
}
