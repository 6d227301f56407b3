//! Deck validation.
//!
//! A legal deck is exactly `deck_size` catalog ids with no repeats. Size is
//! checked before content, then each id in submission order; the first
//! violation is reported.

use rustc_hash::FxHashSet;

use super::definition::CardId;
use super::registry::CardRegistry;
use crate::core::config::DECK_SIZE;
use crate::error::DeckError;

/// Validate a deck against the standard catalog and deck size.
///
/// ```
/// use clash_core::cards::validate_deck;
/// use clash_core::error::DeckError;
///
/// let deck: Vec<u32> = (1..=15).collect();
/// assert_eq!(validate_deck(&deck), Ok(()));
///
/// assert_eq!(
///     validate_deck(&[1, 2, 3]),
///     Err(DeckError::WrongSize { expected: 15, actual: 3 })
/// );
/// ```
pub fn validate_deck(card_ids: &[u32]) -> Result<(), DeckError> {
    validate_deck_with(card_ids, DECK_SIZE, CardRegistry::standard())
}

/// Validate a deck against an explicit size and registry.
pub fn validate_deck_with(
    card_ids: &[u32],
    deck_size: usize,
    registry: &CardRegistry,
) -> Result<(), DeckError> {
    if card_ids.len() != deck_size {
        return Err(DeckError::WrongSize {
            expected: deck_size,
            actual: card_ids.len(),
        });
    }

    let mut seen = FxHashSet::default();
    for &id in card_ids {
        if !registry.contains(CardId::new(id)) {
            return Err(DeckError::InvalidCardId(id));
        }
        if !seen.insert(id) {
            return Err(DeckError::DuplicateCardId(id));
        }
    }

    Ok(())
}
