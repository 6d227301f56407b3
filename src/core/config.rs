//! Rules configuration.
//!
//! `RulesConfig` carries the tunable constants of the turn economy and deck
//! construction. `RulesConfig::default()` is the standard ruleset used by the
//! free-function API; custom configs are passed to `ClashGame::with_config`.

use serde::{Deserialize, Serialize};

/// Starting and maximum hit points.
pub const MAX_HP: i32 = 30;
/// Maximum cards held in hand.
pub const MAX_HAND_SIZE: usize = 8;
/// Mana cap reached on a player's tenth turn.
pub const MAX_MANA: u32 = 10;
/// Cards dealt to each hand before the first turn.
pub const INITIAL_HAND_SIZE: usize = 3;
/// Cards in a legal deck.
pub const DECK_SIZE: usize = 15;

/// Turn-economy and deck-construction constants.
///
/// ## Example
///
/// ```
/// use clash_core::core::RulesConfig;
///
/// let quick = RulesConfig::new().with_max_hp(10).with_initial_hand_size(4);
///
/// assert_eq!(quick.max_hp, 10);
/// assert_eq!(quick.max_mana, 10); // untouched fields keep standard values
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulesConfig {
    /// Hit points at match start; heals never exceed this.
    pub max_hp: i32,

    /// Draws are skipped while the hand holds this many cards.
    pub max_hand_size: usize,

    /// Upper bound on max mana.
    pub max_mana: u32,

    /// Cards dealt before turn 1 (no draw events are logged for these).
    pub initial_hand_size: usize,

    /// Exact deck size accepted by the validator.
    pub deck_size: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_hp: MAX_HP,
            max_hand_size: MAX_HAND_SIZE,
            max_mana: MAX_MANA,
            initial_hand_size: INITIAL_HAND_SIZE,
            deck_size: DECK_SIZE,
        }
    }
}

impl RulesConfig {
    /// Standard ruleset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set starting / maximum hit points.
    #[must_use]
    pub fn with_max_hp(mut self, hp: i32) -> Self {
        assert!(hp > 0, "max_hp must be positive");
        self.max_hp = hp;
        self
    }

    /// Set the hand limit.
    #[must_use]
    pub fn with_max_hand_size(mut self, size: usize) -> Self {
        assert!(size > 0, "max_hand_size must be positive");
        self.max_hand_size = size;
        self
    }

    /// Set the mana cap.
    #[must_use]
    pub fn with_max_mana(mut self, mana: u32) -> Self {
        self.max_mana = mana;
        self
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn with_initial_hand_size(mut self, size: usize) -> Self {
        self.initial_hand_size = size;
        self
    }

    /// Set the required deck size.
    #[must_use]
    pub fn with_deck_size(mut self, size: usize) -> Self {
        self.deck_size = size;
        self
    }
}
