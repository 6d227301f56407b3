//! The Chain Clash state machine.

use std::time::{Duration, SystemTime};

use im::Vector;
use tracing::{debug, info, trace};

use crate::cards::{lookup, CardId, CardInstance};
use crate::core::{GameRng, GameState, MatchStatus, Move, PlayerId, PlayerPair, PlayerState, RulesConfig};
use crate::error::{CatalogError, MoveError};
use crate::events::{Effect, EffectSummary, EventPayload, GameEvent, GameOverReason};
use crate::rules::{GameResult, MoveList, RulesEngine};

/// How long the player to act may stall before the match can be forfeited.
pub const DEFAULT_MOVE_TIMEOUT: Duration = Duration::from_secs(24 * 60 * 60);

/// Chain Clash rules under a given configuration.
///
/// ## Example
///
/// ```
/// use clash_core::core::{Move, RulesConfig};
/// use clash_core::games::clash::ClashGame;
///
/// let game = ClashGame::with_config(RulesConfig::new().with_max_hp(10));
/// let deck: Vec<u32> = (1..=15).collect();
///
/// let state = game.init_game(&deck, &deck, "0xdeadbeef").unwrap();
/// assert_eq!(state.players[state.current_turn].hp, 10);
///
/// let next = game.apply_move(&state, Move::Pass).unwrap();
/// assert_eq!(next.turn_number, 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClashGame {
    config: RulesConfig,
}

impl ClashGame {
    /// The standard ruleset.
    #[must_use]
    pub fn standard() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: RulesConfig) -> Self {
        Self { config }
    }

    // === Setup ===

    /// Create the opening state from two deck lists and a hex seed.
    ///
    /// Decks are expected to have passed validation; an id missing from the
    /// catalog is still reported rather than carried into the match.
    pub fn init_game(&self, deck1: &[u32], deck2: &[u32], seed: &str) -> Result<GameState, CatalogError> {
        for &id in deck1.iter().chain(deck2) {
            lookup(CardId::new(id))?;
        }

        let mut rng = GameRng::from_hex(seed);
        let mut decks = [
            CardInstance::instantiate_deck(PlayerId::ONE, deck1),
            CardInstance::instantiate_deck(PlayerId::TWO, deck2),
        ];
        for deck in &mut decks {
            rng.shuffle(deck);
        }
        let [first, second] = decks;

        let players = PlayerPair::from_values(first, second).map(|deck| {
            let mut seat = PlayerState::new(self.config.max_hp, deck.into_iter().collect::<Vector<_>>());
            for _ in 0..self.config.initial_hand_size {
                if seat.draw().is_none() {
                    break;
                }
            }
            seat
        });

        let mut state = GameState::new(players);
        debug!(seed, rng_seed = rng.seed(), "match initialized");
        self.start_turn(&mut state);
        Ok(state)
    }

    // === Legality ===

    /// Check whether the player to act may submit `mv`.
    pub fn is_valid_move(&self, state: &GameState, mv: Move) -> Result<(), MoveError> {
        if !state.is_active() {
            return Err(MoveError::GameOver);
        }

        let index = match mv {
            Move::Pass => return Ok(()),
            Move::Play(index) => index,
        };

        let seat = state.current_player();
        let card = seat.hand.get(index).ok_or(MoveError::InvalidIndex {
            index: mv.card_index(),
        })?;
        let definition = lookup(card.card_id)?;

        if definition.mana_cost > seat.mana {
            return Err(MoveError::InsufficientMana {
                have: seat.mana,
                need: definition.mana_cost,
            });
        }
        Ok(())
    }

    // === Transitions ===

    /// Validate and apply a move, returning the next state.
    ///
    /// The input state is left untouched. A lethal play ends the match on the
    /// spot; otherwise the turn passes and the opponent's turn starts.
    pub fn apply_move(&self, state: &GameState, mv: Move) -> Result<GameState, MoveError> {
        self.is_valid_move(state, mv)?;

        let mut next = state.clone();
        let actor = next.current_turn;
        debug!(turn = next.turn_number, player = actor.number(), card_index = mv.card_index(), "applying move");

        match mv {
            Move::Pass => {
                next.record(GameEvent::new(next.turn_number, actor, EventPayload::Pass));
            }
            Move::Play(index) => {
                self.play_card(&mut next, actor, index)?;

                if next.players[actor.opponent()].hp <= 0 {
                    next.status = MatchStatus::win_for(actor);
                    next.record(GameEvent::new(
                        next.turn_number,
                        actor,
                        EventPayload::GameOver {
                            winner: actor,
                            reason: GameOverReason::Knockout,
                        },
                    ));
                    info!(turn = next.turn_number, winner = actor.number(), "match won by knockout");
                    return Ok(next);
                }
            }
        }

        next.current_turn = actor.opponent();
        next.turn_number += 1;
        self.start_turn(&mut next);
        Ok(next)
    }

    /// Concede an active match on behalf of `player`.
    pub fn forfeit(&self, state: &GameState, player: PlayerId) -> Result<GameState, MoveError> {
        if !state.is_active() {
            return Err(MoveError::GameOver);
        }

        let winner = player.opponent();
        let mut next = state.clone();
        next.status = MatchStatus::win_for(winner);
        next.record(GameEvent::new(
            next.turn_number,
            player,
            EventPayload::GameOver {
                winner,
                reason: GameOverReason::Forfeit,
            },
        ));
        info!(turn = next.turn_number, winner = winner.number(), "match forfeited");
        Ok(next)
    }

    /// Mana refill, log entry and draw for the player whose turn begins.
    fn start_turn(&self, state: &mut GameState) {
        let player = state.current_turn;
        let turn = state.turn_number;

        let seat = &mut state.players[player];
        seat.turns_played += 1;
        seat.max_mana = seat.turns_played.min(self.config.max_mana);
        seat.mana = seat.max_mana;
        let (mana, max_mana) = (seat.mana, seat.max_mana);

        state.record(GameEvent::new(turn, player, EventPayload::TurnStart { mana, max_mana }));
        trace!(turn, player = player.number(), mana, "turn start");

        let seat = &mut state.players[player];
        if !seat.deck.is_empty() && seat.hand.len() < self.config.max_hand_size {
            if let Some(card) = seat.draw() {
                state.record(GameEvent::new(turn, player, EventPayload::DrawCard { card_id: card.card_id }));
                trace!(turn, player = player.number(), card = card.card_id.raw(), "draw");
            }
        } else if seat.deck.is_empty() && seat.hand.is_empty() {
            state.record(GameEvent::new(turn, player, EventPayload::Fatigue));
            state.status = MatchStatus::win_for(player.opponent());
            info!(turn, loser = player.number(), "match lost to fatigue");
        }
    }

    /// Resolve a validated play: pay, discard, then damage, shield, heal, draw.
    fn play_card(&self, state: &mut GameState, actor: PlayerId, index: usize) -> Result<(), MoveError> {
        let turn = state.turn_number;
        let (me, opponent) = state.players.split_mut(actor);

        let card = me.hand.remove(index);
        let definition = lookup(card.card_id)?;
        me.mana = me.mana.saturating_sub(definition.mana_cost);
        me.graveyard.push_back(card);

        let mut effects = EffectSummary::new();

        if definition.damage > 0 {
            let absorbed = definition.damage.min(opponent.shield);
            let dealt = definition.damage - absorbed;
            opponent.shield -= absorbed;
            opponent.hp = opponent.hp.saturating_sub_unsigned(dealt);

            if absorbed > 0 {
                effects.push(Effect::ShieldAbsorbed(absorbed));
            }
            if dealt > 0 {
                effects.push(Effect::Damage(dealt));
            }
        }

        if definition.shield > 0 {
            me.shield += definition.shield;
            effects.push(Effect::Shield(definition.shield));
        }

        if definition.heal > 0 {
            let before = me.hp;
            me.hp = me.hp.saturating_add_unsigned(definition.heal).min(self.config.max_hp);
            let healed = u32::try_from(me.hp - before).unwrap_or(0);
            if healed > 0 {
                effects.push(Effect::Heal(healed));
            }
        }

        if definition.draw > 0 {
            let mut drawn = 0;
            for _ in 0..definition.draw {
                if me.hand.len() >= self.config.max_hand_size || me.draw().is_none() {
                    break;
                }
                drawn += 1;
            }
            if drawn > 0 {
                effects.push(Effect::CardsDrawn(drawn));
            }
        }

        trace!(turn, player = actor.number(), card = definition.id.raw(), ?effects, "card resolved");
        state.record(GameEvent::new(
            turn,
            actor,
            EventPayload::PlayCard {
                card_id: definition.id,
                card_name: definition.name.to_string(),
                effects,
            },
        ));
        Ok(())
    }

    // === Timeouts ===

    /// Whether the player to act has exceeded `timeout` since the last move.
    ///
    /// Never true for a finished match or one with no recorded move time.
    #[must_use]
    pub fn should_auto_forfeit(
        state: &GameState,
        last_move_at: Option<SystemTime>,
        now: SystemTime,
        timeout: Duration,
    ) -> bool {
        if !state.is_active() {
            return false;
        }
        last_move_at
            .and_then(|at| now.duration_since(at).ok())
            .is_some_and(|elapsed| elapsed > timeout)
    }

    /// The seat to forfeit on timeout: whoever is on the clock.
    #[must_use]
    pub fn timeout_loser(state: &GameState) -> Option<PlayerId> {
        state.is_active().then_some(state.current_turn)
    }
}

impl RulesEngine for ClashGame {
    fn config(&self) -> &RulesConfig {
        &self.config
    }

    fn legal_moves(&self, state: &GameState) -> MoveList {
        let mut moves = MoveList::new();
        if !state.is_active() {
            return moves;
        }

        moves.push(Move::Pass);
        let seat = state.current_player();
        for (index, card) in seat.hand.iter().enumerate() {
            if lookup(card.card_id).is_ok_and(|def| def.mana_cost <= seat.mana) {
                moves.push(Move::Play(index));
            }
        }
        moves
    }

    fn validate(&self, state: &GameState, mv: Move) -> Result<(), MoveError> {
        self.is_valid_move(state, mv)
    }

    fn apply(&self, state: &GameState, mv: Move) -> Result<GameState, MoveError> {
        self.apply_move(state, mv)
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.winner().map(GameResult::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::InstanceId;
    use crate::events::EventKind;

    const SEED: &str = "abcdef1234567890";
    const DECK1: [u32; 15] = [1, 2, 3, 4, 5, 15, 16, 17, 24, 25, 33, 34, 35, 39, 40];
    const DECK2: [u32; 15] = [7, 8, 9, 10, 11, 18, 19, 20, 26, 27, 36, 37, 38, 39, 40];

    fn game() -> ClashGame {
        ClashGame::standard()
    }

    fn opening() -> GameState {
        game().init_game(&DECK1, &DECK2, SEED).unwrap()
    }

    fn hand_ids(state: &GameState, player: PlayerId) -> Vec<u32> {
        state.players[player].hand.iter().map(|c| c.card_id.raw()).collect()
    }

    fn deck_ids(state: &GameState, player: PlayerId) -> Vec<u32> {
        state.players[player].deck.iter().map(|c| c.card_id.raw()).collect()
    }

    /// A state where player 1 holds exactly `hand` with plenty of mana.
    fn rigged(hand: &[u32]) -> GameState {
        let mut state = opening();
        let seat = &mut state.players[PlayerId::ONE];
        seat.hand = hand
            .iter()
            .enumerate()
            .map(|(i, &id)| CardInstance::new(CardId::new(id), PlayerId::ONE, 100 + i as u16))
            .collect();
        seat.mana = 10;
        seat.max_mana = 10;
        state
    }

    #[test]
    fn test_opening_shuffle_matches_reference() {
        let state = opening();

        assert_eq!(hand_ids(&state, PlayerId::ONE), vec![25, 2, 1, 34]);
        assert_eq!(deck_ids(&state, PlayerId::ONE), vec![5, 33, 3, 35, 24, 40, 15, 17, 16, 4, 39]);
        assert_eq!(hand_ids(&state, PlayerId::TWO), vec![40, 10, 11]);
        assert_eq!(
            deck_ids(&state, PlayerId::TWO),
            vec![27, 19, 8, 20, 39, 37, 9, 38, 18, 36, 26, 7]
        );
        assert_eq!(
            state.players[PlayerId::ONE].hand[0].instance_id,
            InstanceId::owned(PlayerId::ONE, 9)
        );
    }

    #[test]
    fn test_opening_turn_economy() {
        let state = opening();
        let p1 = &state.players[PlayerId::ONE];
        let p2 = &state.players[PlayerId::TWO];

        assert_eq!((p1.mana, p1.max_mana, p1.turns_played), (1, 1, 1));
        assert_eq!((p2.mana, p2.max_mana, p2.turns_played), (0, 0, 0));
        assert_eq!(p1.hp, 30);
        assert_eq!(state.turn_number, 1);
        assert_eq!(state.current_turn, PlayerId::ONE);

        let kinds: Vec<_> = state.log.iter().map(GameEvent::kind).collect();
        assert_eq!(kinds, vec![EventKind::TurnStart, EventKind::DrawCard]);
    }

    #[test]
    fn test_init_rejects_unknown_card() {
        let mut bad = DECK1;
        bad[3] = 41;
        assert_eq!(
            game().init_game(&bad, &DECK2, SEED),
            Err(CatalogError::NotFound(CardId::new(41)))
        );
    }

    #[test]
    fn test_validity() {
        let state = opening();

        assert_eq!(game().is_valid_move(&state, Move::Pass), Ok(()));
        // Hand is [Heal(2), Slash(2), Spark(1), Reflect(3)] with 1 mana.
        assert_eq!(game().is_valid_move(&state, Move::Play(2)), Ok(()));
        assert_eq!(
            game().is_valid_move(&state, Move::Play(0)),
            Err(MoveError::InsufficientMana { have: 1, need: 2 })
        );
        assert_eq!(
            game().is_valid_move(&state, Move::Play(4)),
            Err(MoveError::InvalidIndex { index: 4 })
        );

        let over = game().forfeit(&state, PlayerId::TWO).unwrap();
        assert_eq!(game().is_valid_move(&over, Move::Pass), Err(MoveError::GameOver));
    }

    #[test]
    fn test_pass_advances_turn() {
        let state = opening();
        let next = game().apply_move(&state, Move::Pass).unwrap();

        assert_eq!(next.current_turn, PlayerId::TWO);
        assert_eq!(next.turn_number, 2);
        assert_eq!(next.players[PlayerId::TWO].mana, 1);
        assert_eq!(hand_ids(&next, PlayerId::TWO), vec![40, 10, 11, 27]);

        let kinds: Vec<_> = next.log.iter().skip(state.log.len()).map(GameEvent::kind).collect();
        assert_eq!(kinds, vec![EventKind::Pass, EventKind::TurnStart, EventKind::DrawCard]);

        // Input untouched.
        assert_eq!(state.current_turn, PlayerId::ONE);
        assert_eq!(state.log.len(), 2);
    }

    #[test]
    fn test_play_spark() {
        let state = opening();
        let next = game().apply_move(&state, Move::Play(2)).unwrap();

        assert_eq!(next.players[PlayerId::TWO].hp, 28);
        let p1 = &next.players[PlayerId::ONE];
        assert_eq!(p1.mana, 0);
        assert_eq!(hand_ids(&next, PlayerId::ONE), vec![25, 2, 34]);
        assert_eq!(p1.graveyard[0].card_id, CardId::new(1));

        let play = next.log.iter().find(|e| e.kind() == EventKind::PlayCard).unwrap();
        assert_eq!(play.effects(), &[Effect::Damage(2)]);
        assert_eq!(play.turn, 1);
    }

    #[test]
    fn test_shield_absorbs_before_hp() {
        let mut state = rigged(&[2]);
        state.players[PlayerId::TWO].shield = 3;

        let next = game().apply_move(&state, Move::Play(0)).unwrap();
        let p2 = &next.players[PlayerId::TWO];
        assert_eq!(p2.shield, 0);
        assert_eq!(p2.hp, 29);

        let play = next.log.iter().find(|e| e.kind() == EventKind::PlayCard).unwrap();
        assert_eq!(play.effects(), &[Effect::ShieldAbsorbed(3), Effect::Damage(1)]);
    }

    #[test]
    fn test_fully_absorbed_hit_records_no_damage() {
        let mut state = rigged(&[1]);
        state.players[PlayerId::TWO].shield = 5;

        let next = game().apply_move(&state, Move::Play(0)).unwrap();
        assert_eq!(next.players[PlayerId::TWO].shield, 3);
        assert_eq!(next.players[PlayerId::TWO].hp, 30);

        let play = next.log.iter().find(|e| e.kind() == EventKind::PlayCard).unwrap();
        assert_eq!(play.effects(), &[Effect::ShieldAbsorbed(2)]);
    }

    #[test]
    fn test_heal_is_capped() {
        let mut state = rigged(&[27]);
        state.players[PlayerId::ONE].hp = 25;

        let next = game().apply_move(&state, Move::Play(0)).unwrap();
        assert_eq!(next.players[PlayerId::ONE].hp, 30);

        let play = next.log.iter().find(|e| e.kind() == EventKind::PlayCard).unwrap();
        assert_eq!(play.effects(), &[Effect::Heal(5)]);

        let full = rigged(&[24]);
        let next = game().apply_move(&full, Move::Play(0)).unwrap();
        let play = next.log.iter().find(|e| e.kind() == EventKind::PlayCard).unwrap();
        assert!(play.effects().is_empty());
    }

    #[test]
    fn test_multi_effect_order() {
        let mut state = rigged(&[34]);
        state.players[PlayerId::TWO].shield = 1;

        let next = game().apply_move(&state, Move::Play(0)).unwrap();
        assert_eq!(next.players[PlayerId::ONE].shield, 4);
        assert_eq!(next.players[PlayerId::TWO].hp, 29);

        let play = next.log.iter().find(|e| e.kind() == EventKind::PlayCard).unwrap();
        assert_eq!(
            play.effects(),
            &[Effect::ShieldAbsorbed(1), Effect::Damage(1), Effect::Shield(4)]
        );
    }

    #[test]
    fn test_draw_stops_at_hand_limit() {
        // Knowledge draws 3, but the hand holds 6 others after it leaves.
        let state = rigged(&[40, 1, 2, 3, 4, 5, 15]);
        let deck_before = state.players[PlayerId::ONE].deck.len();

        let next = game().apply_move(&state, Move::Play(0)).unwrap();
        let p1 = &next.players[PlayerId::ONE];
        assert_eq!(p1.hand.len(), 8);
        assert_eq!(p1.deck.len(), deck_before - 2);

        let play = next.log.iter().find(|e| e.kind() == EventKind::PlayCard).unwrap();
        assert_eq!(play.effects(), &[Effect::CardsDrawn(2)]);
    }

    #[test]
    fn test_draw_stops_on_empty_deck() {
        let mut state = rigged(&[39]);
        let seat = &mut state.players[PlayerId::ONE];
        let last = seat.deck.pop_back().unwrap();
        seat.deck = Vector::unit(last);

        let next = game().apply_move(&state, Move::Play(0)).unwrap();
        let play = next.log.iter().find(|e| e.kind() == EventKind::PlayCard).unwrap();
        assert_eq!(play.effects(), &[Effect::CardsDrawn(1)]);
        assert!(next.players[PlayerId::ONE].deck.is_empty());
    }

    #[test]
    fn test_lethal_play_ends_match() {
        let mut state = rigged(&[6]);
        state.players[PlayerId::TWO].hp = 10;

        let next = game().apply_move(&state, Move::Play(0)).unwrap();
        assert_eq!(next.status, MatchStatus::Player1Wins);
        assert_eq!(next.players[PlayerId::TWO].hp, -5);
        assert_eq!(next.current_turn, PlayerId::ONE);
        assert_eq!(next.turn_number, state.turn_number);

        let last = next.log.last().unwrap();
        assert_eq!(
            last.payload,
            EventPayload::GameOver {
                winner: PlayerId::ONE,
                reason: GameOverReason::Knockout,
            }
        );
        assert_eq!(game().is_terminal(&next), Some(GameResult::new(PlayerId::ONE)));
        assert!(game().legal_moves(&next).is_empty());
    }

    #[test]
    fn test_fatigue() {
        let mut state = opening();
        let p2 = &mut state.players[PlayerId::TWO];
        p2.hand.clear();
        p2.deck.clear();

        let next = game().apply_move(&state, Move::Pass).unwrap();
        assert_eq!(next.status, MatchStatus::Player1Wins);
        assert_eq!(next.log.last().map(GameEvent::kind), Some(EventKind::Fatigue));
        assert_eq!(next.turn_number, 2);
    }

    #[test]
    fn test_empty_deck_with_cards_in_hand_is_not_fatigue() {
        let mut state = opening();
        state.players[PlayerId::TWO].deck.clear();

        let next = game().apply_move(&state, Move::Pass).unwrap();
        assert!(next.is_active());
        assert_eq!(next.log.last().map(GameEvent::kind), Some(EventKind::TurnStart));
    }

    #[test]
    fn test_mana_caps() {
        let game = ClashGame::with_config(RulesConfig::new().with_max_mana(3));
        let deck: Vec<u32> = (1..=15).collect();
        let mut state = game.init_game(&deck, &deck, "1").unwrap();

        for _ in 0..12 {
            state = game.apply_move(&state, Move::Pass).unwrap();
        }
        for (_, seat) in state.players.iter() {
            assert!(seat.max_mana <= 3);
            assert!(seat.mana <= seat.max_mana);
        }
        assert_eq!(state.current_player().max_mana, 3);
    }

    #[test]
    fn test_legal_moves() {
        let state = opening();
        let moves = game().legal_moves(&state);
        assert_eq!(moves.as_slice(), &[Move::Pass, Move::Play(2)]);
        assert!(game().is_legal(&state, Move::Play(2)));
        assert!(!game().is_legal(&state, Move::Play(1)));
    }

    #[test]
    fn test_forfeit() {
        let state = opening();
        let over = game().forfeit(&state, PlayerId::ONE).unwrap();

        assert_eq!(over.winner(), Some(PlayerId::TWO));
        assert_eq!(
            over.log.last().map(|e| (e.player, e.payload.clone())),
            Some((
                PlayerId::ONE,
                EventPayload::GameOver {
                    winner: PlayerId::TWO,
                    reason: GameOverReason::Forfeit,
                }
            ))
        );
        assert_eq!(game().forfeit(&over, PlayerId::TWO), Err(MoveError::GameOver));
        assert!(state.is_active());
    }

    #[test]
    fn test_auto_forfeit() {
        let state = opening();
        let start = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000);
        let hour = Duration::from_secs(3600);

        assert!(!ClashGame::should_auto_forfeit(&state, None, start, DEFAULT_MOVE_TIMEOUT));
        assert!(!ClashGame::should_auto_forfeit(
            &state,
            Some(start),
            start + 23 * hour,
            DEFAULT_MOVE_TIMEOUT
        ));
        assert!(!ClashGame::should_auto_forfeit(
            &state,
            Some(start),
            start + DEFAULT_MOVE_TIMEOUT,
            DEFAULT_MOVE_TIMEOUT
        ));
        assert!(ClashGame::should_auto_forfeit(
            &state,
            Some(start),
            start + 25 * hour,
            DEFAULT_MOVE_TIMEOUT
        ));
        // Clock skew: a last move in the future never times out.
        assert!(!ClashGame::should_auto_forfeit(&state, Some(start + hour), start, hour));

        assert_eq!(ClashGame::timeout_loser(&state), Some(PlayerId::ONE));

        let over = game().forfeit(&state, PlayerId::ONE).unwrap();
        assert!(!ClashGame::should_auto_forfeit(&over, Some(start), start + 25 * hour, hour));
        assert_eq!(ClashGame::timeout_loser(&over), None);
    }
}
