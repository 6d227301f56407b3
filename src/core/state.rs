//! Match state.
//!
//! ## PlayerState
//!
//! One seat's resources and card zones:
//! - Hit points, mana, max mana, shield
//! - Hand, deck (front = next draw), graveyard
//! - Turns played
//!
//! ## GameState
//!
//! Both seats plus turn bookkeeping, status and the event log.
//!
//! Zones and the log use `im` persistent vectors, so cloning a state is O(1)
//! and every transition can produce a fresh value without copying the whole
//! match.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PlayerPair};
use crate::cards::CardInstance;
use crate::error::SnapshotError;
use crate::events::GameEvent;

/// Lifecycle of a match. The two win states are terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Active,
    Player1Wins,
    Player2Wins,
}

impl MatchStatus {
    /// The status in which `player` has won.
    #[must_use]
    pub const fn win_for(player: PlayerId) -> Self {
        match player.index() {
            0 => MatchStatus::Player1Wins,
            _ => MatchStatus::Player2Wins,
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, MatchStatus::Active)
    }

    /// The winning seat, if the match is over.
    #[must_use]
    pub const fn winner(self) -> Option<PlayerId> {
        match self {
            MatchStatus::Active => None,
            MatchStatus::Player1Wins => Some(PlayerId::ONE),
            MatchStatus::Player2Wins => Some(PlayerId::TWO),
        }
    }
}

/// Per-seat state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    /// Hit points. Not clamped below; a lethal hit may leave it negative.
    pub hp: i32,
    pub mana: u32,
    pub max_mana: u32,
    /// Persists across turns until absorbed.
    pub shield: u32,
    pub hand: Vector<CardInstance>,
    /// Front is the next card drawn.
    pub deck: Vector<CardInstance>,
    pub graveyard: Vector<CardInstance>,
    pub turns_played: u32,
}

impl PlayerState {
    /// A fresh seat with full hit points and the given (already shuffled) deck.
    #[must_use]
    pub fn new(hp: i32, deck: Vector<CardInstance>) -> Self {
        Self {
            hp,
            mana: 0,
            max_mana: 0,
            shield: 0,
            hand: Vector::new(),
            deck,
            graveyard: Vector::new(),
            turns_played: 0,
        }
    }

    /// Cards across hand, deck and graveyard.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.hand.len() + self.deck.len() + self.graveyard.len()
    }

    /// Move the front deck card into the hand, if there is one.
    pub fn draw(&mut self) -> Option<CardInstance> {
        let card = self.deck.pop_front()?;
        self.hand.push_back(card);
        Some(card)
    }
}

/// Full match state.
///
/// A value type: transitions take `&GameState` and return a new one, so any
/// state a caller holds stays valid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Both seats; index 0 is player 1.
    pub players: PlayerPair<PlayerState>,

    /// Whose turn it is.
    pub current_turn: PlayerId,

    /// Turn number (starts at 1).
    pub turn_number: u32,

    pub status: MatchStatus,

    /// Append-only event log.
    pub log: Vector<GameEvent>,
}

impl GameState {
    /// Assemble a state at turn 1 with player 1 to act and an empty log.
    #[must_use]
    pub fn new(players: PlayerPair<PlayerState>) -> Self {
        Self {
            players,
            current_turn: PlayerId::ONE,
            turn_number: 1,
            status: MatchStatus::Active,
            log: Vector::new(),
        }
    }

    /// A seat's state.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerState {
        &self.players[player]
    }

    /// The seat whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &PlayerState {
        &self.players[self.current_turn]
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == MatchStatus::Active
    }

    /// The winner, once the match is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.status.winner()
    }

    /// Number of logged events.
    ///
    /// Strictly increases with every transition, so callers can use it as an
    /// optimistic concurrency token when persisting.
    #[must_use]
    pub fn version(&self) -> usize {
        self.log.len()
    }

    /// Cards a seat holds across all zones.
    #[must_use]
    pub fn total_cards(&self, player: PlayerId) -> usize {
        self.players[player].total_cards()
    }

    /// Append an event.
    pub fn record(&mut self, event: GameEvent) {
        self.log.push_back(event);
    }

    // === Snapshots ===

    /// Serialize to the JSON wire format.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restore from the JSON wire format.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to a compact binary snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Restore from a binary snapshot.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;
    use crate::events::EventPayload;

    fn deck(owner: PlayerId, ids: &[u32]) -> Vector<CardInstance> {
        CardInstance::instantiate_deck(owner, ids).into_iter().collect()
    }

    fn sample_state() -> GameState {
        GameState::new(PlayerPair::new(|p| PlayerState::new(30, deck(p, &[1, 2, 3]))))
    }

    #[test]
    fn test_new_state() {
        let state = sample_state();
        assert_eq!(state.current_turn, PlayerId::ONE);
        assert_eq!(state.turn_number, 1);
        assert!(state.is_active());
        assert_eq!(state.winner(), None);
        assert_eq!(state.version(), 0);
        assert_eq!(state.total_cards(PlayerId::TWO), 3);
    }

    #[test]
    fn test_draw_moves_front_card() {
        let mut player = PlayerState::new(30, deck(PlayerId::ONE, &[7, 8]));

        let drawn = player.draw().unwrap();
        assert_eq!(drawn.card_id, CardId::new(7));
        assert_eq!(player.hand.len(), 1);
        assert_eq!(player.deck.len(), 1);

        player.draw();
        assert!(player.draw().is_none());
        assert_eq!(player.total_cards(), 2);
    }

    #[test]
    fn test_status() {
        assert_eq!(MatchStatus::win_for(PlayerId::ONE), MatchStatus::Player1Wins);
        assert_eq!(MatchStatus::win_for(PlayerId::TWO), MatchStatus::Player2Wins);
        assert!(!MatchStatus::Active.is_terminal());
        assert!(MatchStatus::Player2Wins.is_terminal());
        assert_eq!(MatchStatus::Player2Wins.winner(), Some(PlayerId::TWO));

        assert_eq!(
            serde_json::to_string(&MatchStatus::Player1Wins).unwrap(),
            "\"player1_wins\""
        );
    }

    #[test]
    fn test_clone_is_independent() {
        let original = sample_state();
        let mut copy = original.clone();
        copy.players[PlayerId::ONE].draw();
        copy.record(GameEvent::new(1, PlayerId::ONE, EventPayload::Pass));

        assert_eq!(original.player(PlayerId::ONE).hand.len(), 0);
        assert_eq!(original.version(), 0);
        assert_eq!(copy.version(), 1);
    }

    #[test]
    fn test_json_field_names() {
        let json: serde_json::Value = serde_json::from_str(&sample_state().to_json().unwrap()).unwrap();

        assert_eq!(json["currentTurn"], 0);
        assert_eq!(json["turnNumber"], 1);
        assert_eq!(json["status"], "active");
        assert_eq!(json["players"][0]["maxMana"], 0);
        assert_eq!(json["players"][1]["deck"][0]["instanceId"], "p2_0");
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let mut state = sample_state();
        state.players[PlayerId::TWO].draw();
        state.record(GameEvent::new(1, PlayerId::ONE, EventPayload::Pass));

        let from_json = GameState::from_json(&state.to_json().unwrap()).unwrap();
        assert_eq!(from_json, state);

        let from_bytes = GameState::from_bytes(&state.to_bytes().unwrap()).unwrap();
        assert_eq!(from_bytes, state);
    }

    #[test]
    fn test_bad_snapshot() {
        assert!(matches!(GameState::from_json("{"), Err(SnapshotError::Json(_))));
        assert!(matches!(GameState::from_bytes(&[1, 2]), Err(SnapshotError::Binary(_))));
    }
}
