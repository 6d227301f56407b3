//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Seat index in a two-player match: `PlayerId(0)` is player 1 (who always
//! moves first), `PlayerId(1)` is player 2.
//!
//! ## PlayerPair
//!
//! Fixed two-slot storage indexed by `PlayerId`. Serializes as a plain
//! two-element array.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat index of a player in a match (0 or 1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// Player 1, who takes the first turn.
    pub const ONE: PlayerId = PlayerId(0);
    /// Player 2.
    pub const TWO: PlayerId = PlayerId(1);

    /// Create a player ID from a seat index.
    ///
    /// Returns `None` for anything other than 0 or 1.
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if index < 2 {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Get the seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    ///
    /// ```
    /// use clash_core::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::ONE.opponent(), PlayerId::TWO);
    /// assert_eq!(PlayerId::TWO.opponent(), PlayerId::ONE);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// The 1-based label used in instance ids and status tags.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0 + 1
    }

    /// Both seats in turn order.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [Self::ONE, Self::TWO].into_iter()
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("player index out of range: {value}"))
    }
}

impl From<PlayerId> for u8 {
    fn from(id: PlayerId) -> Self {
        id.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Per-player data storage for the two seats of a match.
///
/// ## Example
///
/// ```
/// use clash_core::core::{PlayerId, PlayerPair};
///
/// let mut hp = PlayerPair::with_value(30);
/// hp[PlayerId::TWO] -= 4;
///
/// assert_eq!(hp[PlayerId::ONE], 30);
/// assert_eq!(hp[PlayerId::TWO], 26);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create a pair with values from a factory function.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::ONE), factory(PlayerId::TWO)],
        }
    }

    /// Create a pair from explicit values (player 1 first).
    pub fn from_values(first: T, second: T) -> Self {
        Self {
            data: [first, second],
        }
    }

    /// Create a pair with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_values(value.clone(), value)
    }

    /// Transform both entries.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> PlayerPair<U> {
        let [first, second] = self.data;
        PlayerPair::from_values(f(first), f(second))
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Mutable access to a player and their opponent at the same time.
    pub fn split_mut(&mut self, player: PlayerId) -> (&mut T, &mut T) {
        let [first, second] = &mut self.data;
        if player == PlayerId::ONE {
            (first, second)
        } else {
            (second, first)
        }
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::both().zip(self.data.iter())
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::both().zip(self.data.iter_mut())
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
