//! The rules engine: every state transition of a match.
//!
//! External input drives a match exclusively through `apply_action`.
//! Each call either resolves completely - mutating the state and
//! returning the events a renderer needs - or rejects the action with
//! an `ActionError` and the state bit-for-bit unchanged. There is no
//! partial application.
//!
//! ## Modules
//!
//! - `setup`: deck validation, shuffle, opening deal
//! - `draw`: the once-per-turn draw (burn and fatigue rules)
//! - `turn`: the turn handoff pipeline
//! - `combat`: attack resolution, deaths, the win condition
//! - `effects`: the closed set of effect hooks

pub mod combat;
pub mod draw;
pub mod effects;
pub mod setup;
pub mod turn;

pub use draw::DrawOutcome;
pub use setup::{new_game, GameBuilder};

use log::debug;

use crate::cards::{CardId, Minion};
use crate::core::{
    Action, ActionError, ActionRecord, GameEvent, GameState, PlayerId, TurnPhase,
};

/// Apply one action for `player`.
///
/// Preconditions common to every action: the match has no winner yet,
/// it is `player`'s turn, and the match is in the main phase. Each
/// action then validates its own preconditions before any mutation;
/// a rejected action is a strict no-op.
pub fn apply_action(
    state: &mut GameState,
    player: PlayerId,
    action: &Action,
) -> Result<Vec<GameEvent>, ActionError> {
    if state.is_over() {
        return Err(ActionError::GameOver);
    }
    if state.current_turn != player {
        return Err(ActionError::NotYourTurn(player));
    }
    if state.phase != TurnPhase::Main {
        return Err(ActionError::WrongPhase);
    }

    let events = match action {
        Action::PlayCard { card } => play_card(state, player, *card)?,
        Action::Attack { attacker, target } => {
            combat::resolve_attack(state, player, *attacker, *target)?
        }
        Action::EndTurn => turn::end_turn(state),
        Action::Concede => concede(state, player),
    };

    state.record_action(ActionRecord::new(player, action.clone(), state.turn_number));
    Ok(events)
}

/// Summon a card from `player`'s hand.
fn play_card(
    state: &mut GameState,
    player: PlayerId,
    card_id: CardId,
) -> Result<Vec<GameEvent>, ActionError> {
    let seat = &state.players[player];
    let instance = seat
        .hand_card(card_id)
        .ok_or(ActionError::CardNotInHand(card_id))?;
    let cost = instance.card.cost;
    if cost > seat.mana {
        return Err(ActionError::InsufficientMana {
            need: cost,
            have: seat.mana,
        });
    }
    if seat.board.len() >= state.config.board_limit {
        return Err(ActionError::BoardFull);
    }

    let seat = &mut state.players[player];
    let Some(instance) = seat.take_hand_card(card_id) else {
        return Err(ActionError::CardNotInHand(card_id));
    };
    seat.mana -= cost;

    let ready = effects::enters_play_ready(&instance.card);
    let name = instance.card.name.clone();
    let effect = instance.card.effect;
    debug!("{player} plays {name} ({card_id})");
    seat.board.push(Minion::summon(instance, ready));

    let mut events = vec![GameEvent::MinionPlayed {
        player,
        minion: card_id,
        name,
    }];
    effects::play_hook(state, &mut events, player, effect);
    combat::sweep_deaths(state, &mut events);

    Ok(events)
}

/// Forfeit: the opponent wins immediately.
fn concede(state: &mut GameState, player: PlayerId) -> Vec<GameEvent> {
    let winner = player.opponent();
    state.winner = Some(winner);
    log::info!("{player} concedes; {winner} wins");
    vec![GameEvent::GameWon { winner }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardEffect};
    use crate::core::AttackTarget;

    fn deck(size: usize) -> Vec<Card> {
        (0..size)
            .map(|i| Card::new(format!("Card {i}"), 1, 2, 2))
            .collect()
    }

    fn fresh_game() -> GameState {
        new_game(deck(10), deck(10), 42).unwrap()
    }

    #[test]
    fn test_play_card_summons_and_spends_mana() {
        let mut state = fresh_game();
        let card_id = state.players[PlayerId::One].hand[0].id;

        let events =
            apply_action(&mut state, PlayerId::One, &Action::PlayCard { card: card_id }).unwrap();

        let seat = &state.players[PlayerId::One];
        assert_eq!(seat.hand.len(), 2);
        assert_eq!(seat.board.len(), 1);
        assert_eq!(seat.mana, 0);
        assert_eq!(seat.board[0].id, card_id);
        assert!(!seat.board[0].can_attack);
        assert!(matches!(events[0], GameEvent::MinionPlayed { .. }));
    }

    #[test]
    fn test_play_card_rejects_insufficient_mana() {
        let mut state = fresh_game();
        state.players[PlayerId::One].hand[0].card.cost = 5;
        let card_id = state.players[PlayerId::One].hand[0].id;

        let before = state.clone();
        let err = apply_action(&mut state, PlayerId::One, &Action::PlayCard { card: card_id })
            .unwrap_err();

        assert_eq!(err, ActionError::InsufficientMana { need: 5, have: 1 });
        assert_eq!(state, before);
    }

    #[test]
    fn test_play_card_rejects_full_board() {
        let mut state = fresh_game();
        state.players[PlayerId::One].mana = 10;
        for i in 0..7 {
            let id = state.alloc_card_id();
            let minion = Minion::summon(
                crate::cards::CardInstance::new(id, Card::new(format!("M{i}"), 1, 1, 1)),
                false,
            );
            state.players[PlayerId::One].board.push(minion);
        }
        let card_id = state.players[PlayerId::One].hand[0].id;

        let before = state.clone();
        let err = apply_action(&mut state, PlayerId::One, &Action::PlayCard { card: card_id })
            .unwrap_err();

        assert_eq!(err, ActionError::BoardFull);
        assert_eq!(state, before);
    }

    #[test]
    fn test_play_card_rejects_unknown_card() {
        let mut state = fresh_game();
        let ghost = CardId::new(999);

        let before = state.clone();
        let err =
            apply_action(&mut state, PlayerId::One, &Action::PlayCard { card: ghost }).unwrap_err();

        assert_eq!(err, ActionError::CardNotInHand(ghost));
        assert_eq!(state, before);
    }

    #[test]
    fn test_wrong_seat_is_rejected() {
        let mut state = fresh_game();

        let before = state.clone();
        let err = apply_action(&mut state, PlayerId::Two, &Action::EndTurn).unwrap_err();

        assert_eq!(err, ActionError::NotYourTurn(PlayerId::Two));
        assert_eq!(state, before);
    }

    #[test]
    fn test_no_actions_after_winner() {
        let mut state = fresh_game();
        apply_action(&mut state, PlayerId::One, &Action::Concede).unwrap();

        let before = state.clone();
        let err = apply_action(&mut state, PlayerId::Two, &Action::EndTurn).unwrap_err();

        assert_eq!(err, ActionError::GameOver);
        assert_eq!(state, before);
    }

    #[test]
    fn test_concede_sets_opponent_as_winner() {
        let mut state = fresh_game();

        let events = apply_action(&mut state, PlayerId::One, &Action::Concede).unwrap();

        assert_eq!(state.winner, Some(PlayerId::Two));
        assert_eq!(
            events,
            vec![GameEvent::GameWon {
                winner: PlayerId::Two
            }]
        );
    }

    #[test]
    fn test_charge_minion_attacks_same_turn() {
        let mut state = fresh_game();
        state.players[PlayerId::One].hand[0].card =
            Card::new("Chad", 1, 6, 6).with_effect(CardEffect::Charge);
        let card_id = state.players[PlayerId::One].hand[0].id;

        apply_action(&mut state, PlayerId::One, &Action::PlayCard { card: card_id }).unwrap();
        let events = apply_action(
            &mut state,
            PlayerId::One,
            &Action::Attack {
                attacker: card_id,
                target: AttackTarget::Hero,
            },
        )
        .unwrap();

        assert_eq!(state.players[PlayerId::Two].health, 24);
        assert!(events.contains(&GameEvent::HeroDamaged {
            player: PlayerId::Two,
            damage: 6
        }));
    }

    #[test]
    fn test_fresh_minion_cannot_attack() {
        let mut state = fresh_game();
        let card_id = state.players[PlayerId::One].hand[0].id;
        apply_action(&mut state, PlayerId::One, &Action::PlayCard { card: card_id }).unwrap();

        let before = state.clone();
        let err = apply_action(
            &mut state,
            PlayerId::One,
            &Action::Attack {
                attacker: card_id,
                target: AttackTarget::Hero,
            },
        )
        .unwrap_err();

        assert_eq!(err, ActionError::CannotAttack(card_id));
        assert_eq!(state, before);
    }

    #[test]
    fn test_actions_are_recorded() {
        let mut state = fresh_game();
        let card_id = state.players[PlayerId::One].hand[0].id;

        apply_action(&mut state, PlayerId::One, &Action::PlayCard { card: card_id }).unwrap();
        apply_action(&mut state, PlayerId::One, &Action::EndTurn).unwrap();

        assert_eq!(state.history.len(), 2);
        assert_eq!(
            state.history[0].action,
            Action::PlayCard { card: card_id }
        );
        assert_eq!(state.history[1].action, Action::EndTurn);
    }

    #[test]
    fn test_rejected_actions_are_not_recorded() {
        let mut state = fresh_game();
        let _ = apply_action(&mut state, PlayerId::Two, &Action::EndTurn);

        assert!(state.history.is_empty());
    }
}
