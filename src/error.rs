//! Error types.
//!
//! Every legality or validation failure is a recoverable, machine-matchable
//! variant. `CatalogError::NotFound` signals a data error (an id that deck
//! validation should have rejected) rather than bad user input.

use thiserror::Error;

use crate::cards::CardId;

/// Card catalog lookup failure.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("card not found: {0}")]
    NotFound(CardId),
}

/// Deck construction failure.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("deck must have exactly {expected} cards, got {actual}")]
    WrongSize { expected: usize, actual: usize },
    #[error("invalid card id: {0}")]
    InvalidCardId(u32),
    #[error("duplicate card id: {0}")]
    DuplicateCardId(u32),
}

/// Move rejection.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("game is not active")]
    GameOver,
    #[error("invalid card index {index}")]
    InvalidIndex { index: i64 },
    #[error("not enough mana (have {have}, need {need})")]
    InsufficientMana { have: u32, need: u32 },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Failure while rebuilding a match from its seed and move list.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ReplayError {
    #[error("player {player} deck rejected: {source}")]
    Deck { player: u8, source: DeckError },
    #[error("move {move_number} rejected: {source}")]
    IllegalMove { move_number: usize, source: MoveError },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Snapshot encoding or decoding failure.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("json snapshot: {0}")]
    Json(#[from] serde_json::Error),
    #[error("binary snapshot: {0}")]
    Binary(#[from] bincode::Error),
}

/// Crate-level error.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Move(#[from] MoveError),
    #[error(transparent)]
    Replay(#[from] ReplayError),
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            CatalogError::NotFound(CardId::new(999)).to_string(),
            "card not found: 999"
        );
        assert_eq!(
            DeckError::WrongSize { expected: 15, actual: 3 }.to_string(),
            "deck must have exactly 15 cards, got 3"
        );
        assert_eq!(
            MoveError::InsufficientMana { have: 1, need: 3 }.to_string(),
            "not enough mana (have 1, need 3)"
        );
    }

    #[test]
    fn test_conversions() {
        let err: Error = MoveError::GameOver.into();
        assert!(matches!(err, Error::Move(MoveError::GameOver)));

        let err: MoveError = CatalogError::NotFound(CardId::new(0)).into();
        assert!(matches!(err, MoveError::Catalog(_)));
    }
}
