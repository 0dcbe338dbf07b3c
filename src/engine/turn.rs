//! Turn controller: the handoff pipeline between seats.
//!
//! One turn is `Start -> Mana -> Draw -> Main -> End` (see `TurnPhase`).
//! `Main` is where the engine sits between actions; the other phases
//! run back-to-back inside `end_turn`, atomically:
//!
//! 1. ready every minion of the incoming seat (summoning sickness
//!    clears for the player about to act),
//! 2. switch control, bumping the turn number when control returns to
//!    the first player,
//! 3. refresh mana: `max_mana` grows by one up to the cap, then refills,
//! 4. draw exactly once (burn and fatigue rules apply), with the win
//!    check after any fatigue damage,
//! 5. land in `Main`.
//!
//! The first turn of the match never runs this pipeline: the first
//! player starts mid-turn with the opening hand and starting mana.

use log::debug;

use crate::core::{GameEvent, GameState, TurnPhase};

use super::combat;
use super::draw::{self, DrawOutcome};

/// Hand the turn to the opponent and run their start-of-turn sequence.
pub(crate) fn end_turn(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let outgoing = state.current_turn;
    let incoming = outgoing.opponent();

    state.phase = TurnPhase::End;
    for minion in state.players[incoming].board.iter_mut() {
        minion.can_attack = true;
    }
    state.current_turn = incoming;
    if incoming == state.config.first_player {
        state.turn_number += 1;
    }

    state.phase = TurnPhase::Start;
    debug!("turn {} begins for {incoming}", state.turn_number);
    events.push(GameEvent::TurnStarted {
        player: incoming,
        turn_number: state.turn_number,
    });

    state.phase = TurnPhase::Mana;
    let mana_cap = state.config.mana_cap;
    let player = &mut state.players[incoming];
    player.max_mana = (player.max_mana + 1).min(mana_cap);
    player.mana = player.max_mana;

    state.phase = TurnPhase::Draw;
    let hand_limit = state.config.hand_limit;
    match draw::draw(&mut state.players[incoming], hand_limit) {
        DrawOutcome::Drawn(card) => {
            events.push(GameEvent::CardDrawn {
                player: incoming,
                card,
            });
        }
        DrawOutcome::Burned(card) => {
            debug!("{incoming} burns {} (hand full)", card.name);
            events.push(GameEvent::CardBurned {
                player: incoming,
                card_name: card.name,
            });
        }
        DrawOutcome::Fatigue(damage) => {
            debug!("{incoming} takes {damage} fatigue damage");
            events.push(GameEvent::FatigueDamage {
                player: incoming,
                damage,
            });
            combat::check_hero_death(state, incoming, &mut events);
        }
    }

    state.phase = TurnPhase::Main;
    events
}
