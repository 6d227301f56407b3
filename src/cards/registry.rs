//! The card catalog.
//!
//! A fixed pool of 40 definitions with contiguous ids 1..=40, built once per
//! process and never mutated. `lookup` is the entry point used by the rules;
//! `CardRegistry` adds iteration and filtering for deck builders.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use super::definition::{CardCategory, CardDefinition, CardId, Rarity};
use crate::error::CatalogError;

/// Number of cards in the pool.
pub const CARD_POOL_SIZE: usize = 40;

const fn attack(id: u32, name: &'static str, cost: u32, damage: u32) -> CardDefinition {
    CardDefinition::new(CardId::new(id), name, cost, CardCategory::Attack).with_damage(damage)
}

const fn ward(id: u32, name: &'static str, cost: u32, shield: u32) -> CardDefinition {
    CardDefinition::new(CardId::new(id), name, cost, CardCategory::Shield).with_shield(shield)
}

const fn mend(id: u32, name: &'static str, cost: u32, heal: u32) -> CardDefinition {
    CardDefinition::new(CardId::new(id), name, cost, CardCategory::Heal).with_heal(heal)
}

const fn multi(id: u32, name: &'static str, cost: u32) -> CardDefinition {
    CardDefinition::new(CardId::new(id), name, cost, CardCategory::Multi).with_rarity(Rarity::Uncommon)
}

use Rarity::{Rare, Uncommon};

/// The full card pool, ordered by id.
pub static CARD_POOL: [CardDefinition; CARD_POOL_SIZE] = [
    // Attack
    attack(1, "Spark", 1, 2).with_description("A small burst of energy. Deals 2 damage."),
    attack(2, "Slash", 2, 4).with_description("A swift blade strike. Deals 4 damage."),
    attack(3, "Fireball", 3, 6).with_description("A blazing orb of fire. Deals 6 damage."),
    attack(4, "Lightning Bolt", 4, 8)
        .with_rarity(Uncommon)
        .with_description("A crackling bolt from the sky. Deals 8 damage."),
    attack(5, "Heavy Blow", 5, 11)
        .with_rarity(Uncommon)
        .with_description("A devastating strike. Deals 11 damage."),
    attack(6, "Meteor Strike", 7, 15)
        .with_rarity(Rare)
        .with_description("A meteor crashes down. Deals 15 damage."),
    attack(7, "Quick Jab", 1, 2).with_description("A fast punch. Deals 2 damage."),
    attack(8, "Arcane Blast", 3, 5).with_description("Raw arcane energy. Deals 5 damage."),
    attack(9, "Shadow Strike", 4, 9)
        .with_rarity(Uncommon)
        .with_description("A strike from the shadows. Deals 9 damage."),
    attack(10, "Flame Wave", 6, 13)
        .with_rarity(Rare)
        .with_description("A sweeping wall of fire. Deals 13 damage."),
    attack(11, "Ice Shard", 2, 3).with_description("A shard of frozen ice. Deals 3 damage."),
    attack(12, "Void Bolt", 5, 10)
        .with_rarity(Uncommon)
        .with_description("Energy from the void. Deals 10 damage."),
    attack(13, "Thunder Clap", 3, 5).with_description("A thunderous shockwave. Deals 5 damage."),
    attack(14, "Dragon Breath", 8, 18)
        .with_rarity(Rare)
        .with_description("Ancient dragon flame. Deals 18 damage."),
    // Shield
    ward(15, "Block", 1, 3).with_description("Raise your guard. Gain 3 shield."),
    ward(16, "Iron Wall", 2, 5).with_description("An iron barrier. Gain 5 shield."),
    ward(17, "Barrier", 3, 7).with_description("A magical barrier. Gain 7 shield."),
    ward(18, "Fortify", 4, 10)
        .with_rarity(Uncommon)
        .with_description("Harden defenses. Gain 10 shield."),
    ward(19, "Stone Skin", 5, 12)
        .with_rarity(Uncommon)
        .with_description("Skin turns to stone. Gain 12 shield."),
    ward(20, "Divine Shield", 6, 15)
        .with_rarity(Rare)
        .with_description("A divine ward. Gain 15 shield."),
    ward(21, "Aegis", 1, 2).with_description("A minor ward. Gain 2 shield."),
    ward(22, "Ward", 2, 4).with_description("A protective ward. Gain 4 shield."),
    ward(23, "Magic Armor", 3, 6).with_description("Enchanted armor. Gain 6 shield."),
    // Heal
    mend(24, "First Aid", 1, 2).with_description("Quick patch-up. Restore 2 HP."),
    mend(25, "Heal", 2, 4).with_description("Healing magic. Restore 4 HP."),
    mend(26, "Regenerate", 3, 6).with_description("Accelerated healing. Restore 6 HP."),
    mend(27, "Greater Heal", 4, 8)
        .with_rarity(Uncommon)
        .with_description("Powerful restoration. Restore 8 HP."),
    mend(28, "Holy Light", 5, 10)
        .with_rarity(Uncommon)
        .with_description("Blessed light. Restore 10 HP."),
    mend(29, "Divine Blessing", 6, 12)
        .with_rarity(Rare)
        .with_description("A divine gift. Restore 12 HP."),
    mend(30, "Bandage", 1, 3).with_description("Simple bandage. Restore 3 HP."),
    mend(31, "Restoration", 3, 5).with_description("Nature's touch. Restore 5 HP."),
    mend(32, "Life Surge", 7, 14)
        .with_rarity(Rare)
        .with_description("A surge of life force. Restore 14 HP."),
    // Multi-effect and draw
    multi(33, "Chain Strike", 2)
        .with_damage(3)
        .with_draw(1)
        .with_description("Strike and pull. Deal 3 damage, draw 1 card."),
    multi(34, "Reflect", 3)
        .with_damage(2)
        .with_shield(4)
        .with_description("Deflect and counter. Gain 4 shield, deal 2 damage."),
    multi(35, "Life Tap", 2)
        .with_heal(2)
        .with_draw(1)
        .with_description("Drain life essence. Restore 2 HP, draw 1 card."),
    multi(36, "War Cry", 3)
        .with_damage(3)
        .with_shield(2)
        .with_description("A rallying cry. Deal 3 damage, gain 2 shield."),
    multi(37, "Tactical Retreat", 2)
        .with_shield(3)
        .with_draw(1)
        .with_description("Fall back wisely. Gain 3 shield, draw 1 card."),
    multi(38, "Meditate", 3)
        .with_heal(3)
        .with_draw(1)
        .with_description("Focus the mind. Restore 3 HP, draw 1 card."),
    CardDefinition::new(CardId::new(39), "Scout", 1, CardCategory::Draw)
        .with_draw(2)
        .with_description("Send scouts ahead. Draw 2 cards."),
    CardDefinition::new(CardId::new(40), "Knowledge", 3, CardCategory::Draw)
        .with_draw(3)
        .with_rarity(Rare)
        .with_description("Ancient knowledge. Draw 3 cards."),
];

static CATALOG: Lazy<CardRegistry> = Lazy::new(|| CardRegistry::from_pool(&CARD_POOL));

/// Look up a card definition in the catalog.
///
/// ```
/// use clash_core::cards::{lookup, CardId};
///
/// assert_eq!(lookup(CardId::new(1)).unwrap().name, "Spark");
/// assert!(lookup(CardId::new(999)).is_err());
/// ```
pub fn lookup(id: CardId) -> Result<&'static CardDefinition, CatalogError> {
    CATALOG.get(id).ok_or(CatalogError::NotFound(id))
}

/// Read-only index over a static card pool.
#[derive(Clone, Debug)]
pub struct CardRegistry {
    pool: &'static [CardDefinition],
    by_id: FxHashMap<CardId, usize>,
}

impl CardRegistry {
    /// The process-wide catalog.
    #[must_use]
    pub fn standard() -> &'static CardRegistry {
        &CATALOG
    }

    /// Index a pool of definitions.
    ///
    /// Panics if two definitions share an id; the pool is static data.
    #[must_use]
    pub fn from_pool(pool: &'static [CardDefinition]) -> Self {
        let mut by_id = FxHashMap::default();
        for (position, card) in pool.iter().enumerate() {
            if by_id.insert(card.id, position).is_some() {
                panic!("Card with ID {} already registered", card.id);
            }
        }
        Self { pool, by_id }
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&'static CardDefinition> {
        let pool = self.pool;
        self.by_id.get(&id).map(|&position| &pool[position])
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    /// Iterate over all card definitions in id order.
    pub fn iter(&self) -> impl Iterator<Item = &'static CardDefinition> {
        self.pool.iter()
    }

    /// Find cards by category.
    pub fn find_by_category(
        &self,
        category: CardCategory,
    ) -> impl Iterator<Item = &'static CardDefinition> {
        self.iter().filter(move |c| c.category == category)
    }

    /// Find cards by rarity.
    pub fn find_by_rarity(&self, rarity: Rarity) -> impl Iterator<Item = &'static CardDefinition> {
        self.iter().filter(move |c| c.rarity == rarity)
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &'static CardDefinition>
    where
        F: Fn(&CardDefinition) -> bool,
    {
        self.iter().filter(move |c| predicate(c))
    }
}
