//! Move representation.
//!
//! A move is either "pass" or "play the card at hand position N". On the wire
//! it is the raw `cardIndex` integer, with -1 meaning pass.

use serde::{Deserialize, Serialize};

use crate::error::MoveError;

/// Wire value for a pass.
pub const PASS_INDEX: i64 = -1;

/// A player's move on their turn.
///
/// ## Example
///
/// ```
/// use clash_core::core::Move;
///
/// assert_eq!(Move::try_from(-1i64), Ok(Move::Pass));
/// assert_eq!(Move::try_from(2i64), Ok(Move::Play(2)));
/// assert!(Move::try_from(-5i64).is_err());
///
/// assert_eq!(i64::from(Move::Pass), -1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Move {
    /// End the turn without playing a card.
    Pass,
    /// Play the card at this hand position.
    Play(usize),
}

impl Move {
    /// The wire index (-1 for pass).
    #[must_use]
    pub fn card_index(self) -> i64 {
        self.into()
    }

    #[must_use]
    pub fn is_pass(self) -> bool {
        matches!(self, Move::Pass)
    }
}

impl TryFrom<i64> for Move {
    type Error = MoveError;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        match index {
            PASS_INDEX => Ok(Move::Pass),
            i if i >= 0 => usize::try_from(i)
                .map(Move::Play)
                .map_err(|_| MoveError::InvalidIndex { index }),
            _ => Err(MoveError::InvalidIndex { index }),
        }
    }
}

impl From<Move> for i64 {
    fn from(mv: Move) -> Self {
        match mv {
            Move::Pass => PASS_INDEX,
            Move::Play(index) => index as i64,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Pass => write!(f, "Pass"),
            Move::Play(index) => write!(f, "Play({index})"),
        }
    }
}
