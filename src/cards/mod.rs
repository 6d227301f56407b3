//! Card system: definitions, instances, the catalog and deck validation.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions (1..=40, 0 = hidden)
//! - `CardDefinition`: Static card data (cost, damage/shield/heal/draw)
//! - `CardInstance`: A specific copy of a card inside a match
//! - `CardRegistry`: Read-only catalog index
//!
//! ## Hidden Cards
//!
//! `CardInstance::HIDDEN` stands in for cards a viewer is not allowed to see.
//! It never appears in authoritative state.

pub mod deck;
pub mod definition;
pub mod instance;
pub mod registry;

pub use deck::{validate_deck, validate_deck_with};
pub use definition::{CardCategory, CardDefinition, CardId, Rarity};
pub use instance::{CardInstance, InstanceId};
pub use registry::{lookup, CardRegistry, CARD_POOL, CARD_POOL_SIZE};
