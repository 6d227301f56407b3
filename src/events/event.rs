//! Game event types.
//!
//! Events are the append-only transcript of a match. The rules never read
//! them back for control flow; they exist so a third party can audit or
//! replay what happened.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardId;
use crate::core::PlayerId;

/// Discriminant of a `GameEvent`, for filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    TurnStart,
    DrawCard,
    PlayCard,
    Pass,
    Fatigue,
    GameOver,
}

/// One resolved effect of a played card. Only non-zero effects are recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Effect {
    /// Damage soaked by the opponent's shield.
    ShieldAbsorbed(u32),
    /// Damage that reached the opponent's hit points.
    Damage(u32),
    /// Shield gained.
    Shield(u32),
    /// Hit points actually restored (after the cap).
    Heal(u32),
    /// Cards actually drawn (may be fewer than the card asks for).
    CardsDrawn(u32),
}

/// Resolved effects of a single play, in resolution order.
pub type EffectSummary = SmallVec<[Effect; 4]>;

/// Why a match ended with a `game_over` event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOverReason {
    /// Opponent's hit points reached zero.
    Knockout,
    /// A player conceded or timed out.
    Forfeit,
}

/// Event-specific data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum EventPayload {
    TurnStart {
        mana: u32,
        max_mana: u32,
    },
    DrawCard {
        card_id: CardId,
    },
    PlayCard {
        card_id: CardId,
        card_name: String,
        effects: EffectSummary,
    },
    Pass,
    Fatigue,
    GameOver {
        winner: PlayerId,
        reason: GameOverReason,
    },
}

/// A logged event: what happened, on which turn, to whom.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    /// Turn number the event happened on.
    pub turn: u32,

    /// The acting player.
    pub player: PlayerId,

    pub payload: EventPayload,
}

impl GameEvent {
    /// Create a new event.
    #[must_use]
    pub fn new(turn: u32, player: PlayerId, payload: EventPayload) -> Self {
        Self {
            turn,
            player,
            payload,
        }
    }

    /// The event's kind tag.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self.payload {
            EventPayload::TurnStart { .. } => EventKind::TurnStart,
            EventPayload::DrawCard { .. } => EventKind::DrawCard,
            EventPayload::PlayCard { .. } => EventKind::PlayCard,
            EventPayload::Pass => EventKind::Pass,
            EventPayload::Fatigue => EventKind::Fatigue,
            EventPayload::GameOver { .. } => EventKind::GameOver,
        }
    }

    /// Effects of a `play_card` event; empty for every other kind.
    #[must_use]
    pub fn effects(&self) -> &[Effect] {
        match &self.payload {
            EventPayload::PlayCard { effects, .. } => effects,
            _ => &[],
        }
    }
}
