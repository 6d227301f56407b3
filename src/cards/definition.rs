//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card: cost, effect
//! amounts, rarity and category. Zone membership and identity within a match
//! live on `CardInstance`.

use serde::{Deserialize, Serialize};

/// Identifier of a card definition (1..=40 in the catalog).
///
/// Id 0 is reserved for the hidden sentinel shown in place of an opponent's
/// deck contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u32);

impl CardId {
    /// Card id carried by hidden sentinel instances.
    pub const HIDDEN: CardId = CardId(0);

    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn is_hidden(self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rarity tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
}

/// Category tag describing a card's primary effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardCategory {
    Attack,
    Shield,
    Heal,
    Draw,
    Multi,
}

/// Static card definition.
///
/// Built with `const` builder methods so the catalog can be a `static` table.
///
/// ## Example
///
/// ```
/// use clash_core::cards::{CardCategory, CardDefinition, CardId, Rarity};
///
/// let strike = CardDefinition::new(CardId::new(33), "Chain Strike", 2, CardCategory::Multi)
///     .with_damage(3)
///     .with_draw(1)
///     .with_rarity(Rarity::Uncommon);
///
/// assert!(strike.has_effect());
/// assert_eq!(strike.damage, 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDefinition {
    pub id: CardId,
    pub name: &'static str,
    pub mana_cost: u32,
    /// Damage dealt to the opponent (shield absorbs first).
    pub damage: u32,
    /// Shield added to the caster.
    pub shield: u32,
    /// Hit points restored to the caster, capped at max hp.
    pub heal: u32,
    /// Cards drawn by the caster.
    pub draw: u32,
    pub rarity: Rarity,
    #[serde(rename = "type")]
    pub category: CardCategory,
    pub description: &'static str,
}

impl CardDefinition {
    /// Create a common card with no effects and no description.
    #[must_use]
    pub const fn new(id: CardId, name: &'static str, mana_cost: u32, category: CardCategory) -> Self {
        Self {
            id,
            name,
            mana_cost,
            damage: 0,
            shield: 0,
            heal: 0,
            draw: 0,
            rarity: Rarity::Common,
            category,
            description: "",
        }
    }

    #[must_use]
    pub const fn with_damage(mut self, damage: u32) -> Self {
        self.damage = damage;
        self
    }

    #[must_use]
    pub const fn with_shield(mut self, shield: u32) -> Self {
        self.shield = shield;
        self
    }

    #[must_use]
    pub const fn with_heal(mut self, heal: u32) -> Self {
        self.heal = heal;
        self
    }

    #[must_use]
    pub const fn with_draw(mut self, draw: u32) -> Self {
        self.draw = draw;
        self
    }

    #[must_use]
    pub const fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    #[must_use]
    pub const fn with_description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    /// At least one of damage/shield/heal/draw is positive.
    #[must_use]
    pub const fn has_effect(&self) -> bool {
        self.damage + self.shield + self.heal + self.draw > 0
    }
}
