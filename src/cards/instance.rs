//! Card instances - a specific copy of a card inside a match.
//!
//! An instance is created when a deck is instantiated and keeps its identity
//! as it moves deck → hand → graveyard. Instance ids are scoped per player:
//! `p1_<i>` / `p2_<i>` where `<i>` is the card's position in the submitted
//! deck list. The sanitized view replaces hidden cards with `hidden`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::definition::CardId;
use crate::core::PlayerId;

/// Identity of a card instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum InstanceId {
    /// A real card: owner seat plus position in the submitted deck list.
    Owned { owner: PlayerId, index: u16 },
    /// Placeholder for a card the viewer may not see.
    Hidden,
}

impl InstanceId {
    const HIDDEN_TAG: &'static str = "hidden";

    #[must_use]
    pub const fn owned(owner: PlayerId, index: u16) -> Self {
        InstanceId::Owned { owner, index }
    }

    #[must_use]
    pub const fn is_hidden(self) -> bool {
        matches!(self, InstanceId::Hidden)
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InstanceId::Owned { owner, index } => write!(f, "p{}_{}", owner.number(), index),
            InstanceId::Hidden => f.write_str(Self::HIDDEN_TAG),
        }
    }
}

impl FromStr for InstanceId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::HIDDEN_TAG {
            return Ok(InstanceId::Hidden);
        }

        let malformed = || format!("malformed instance id: {s:?}");
        let rest = s.strip_prefix('p').ok_or_else(malformed)?;
        let (seat, index) = rest.split_once('_').ok_or_else(malformed)?;
        let owner = match seat {
            "1" => PlayerId::ONE,
            "2" => PlayerId::TWO,
            _ => return Err(malformed()),
        };
        let index = index.parse().map_err(|_| malformed())?;

        Ok(InstanceId::Owned { owner, index })
    }
}

impl TryFrom<String> for InstanceId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<InstanceId> for String {
    fn from(id: InstanceId) -> Self {
        id.to_string()
    }
}

/// A card in a zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardInstance {
    /// Reference to the card definition.
    pub card_id: CardId,

    /// Unique identity within the match.
    pub instance_id: InstanceId,
}

impl CardInstance {
    /// Sentinel shown in place of a card the viewer may not see.
    pub const HIDDEN: CardInstance = CardInstance {
        card_id: CardId::HIDDEN,
        instance_id: InstanceId::Hidden,
    };

    /// Create an owned card instance.
    #[must_use]
    pub const fn new(card_id: CardId, owner: PlayerId, index: u16) -> Self {
        Self {
            card_id,
            instance_id: InstanceId::owned(owner, index),
        }
    }

    /// Instantiate a submitted deck list in order.
    #[must_use]
    pub fn instantiate_deck(owner: PlayerId, card_ids: &[u32]) -> Vec<CardInstance> {
        card_ids
            .iter()
            .enumerate()
            .map(|(i, &id)| CardInstance::new(CardId::new(id), owner, i as u16))
            .collect()
    }

    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.instance_id.is_hidden()
    }
}
