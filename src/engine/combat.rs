//! Combat resolution: attacks, deaths, and the win condition.
//!
//! ## Resolution order
//!
//! For an attack, in this order:
//! 1. validate every precondition (no mutation on failure),
//! 2. capture both damage values BEFORE mutating either side
//!    (simultaneous-resolution semantics: neither side's post-damage
//!    state may influence the other's damage amount),
//! 3. apply damage,
//! 4. invoke the attacker's combat hook (the defender does not
//!    lifesteal from the exchange),
//! 5. clear the attacker's readiness,
//! 6. run death checks on both sides independently.
//!
//! ## Death and cleanup
//!
//! Any minion at or below zero health leaves its board; the template
//! card moves to the owner's graveyard and the instance is destroyed.
//! Death hooks (deathrattle) run as part of the sweep.
//!
//! ## Win condition
//!
//! Every hero-health mutation is followed by `check_hero_death`; the
//! first hero to fall decides the match and the winner slot is never
//! overwritten.

use log::{debug, info};

use crate::cards::CardId;
use crate::core::{ActionError, AttackTarget, GameEvent, GameState, PlayerId};

use super::effects;

/// Resolve an attack by `player`'s minion `attacker_id` on `target`.
///
/// Any precondition violation rejects the action with the state
/// untouched.
pub(crate) fn resolve_attack(
    state: &mut GameState,
    player: PlayerId,
    attacker_id: CardId,
    target: AttackTarget,
) -> Result<Vec<GameEvent>, ActionError> {
    let defender_seat = player.opponent();

    let attacker = state.players[player]
        .minion(attacker_id)
        .ok_or(ActionError::MinionNotOnBoard(attacker_id))?;
    if !attacker.can_attack {
        return Err(ActionError::CannotAttack(attacker_id));
    }
    let attacker_damage = attacker.current_attack;
    let attacker_effect = attacker.effect();

    let mut events = Vec::new();
    match target {
        AttackTarget::Minion(target_id) => {
            // Both damage values are fixed before either side mutates.
            let defender_damage = state.players[defender_seat]
                .minion(target_id)
                .map(|m| m.current_attack)
                .ok_or(ActionError::TargetNotFound(target_id))?;
            if !effects::attack_target_legal(&state.players[defender_seat], target) {
                return Err(ActionError::TauntInTheWay);
            }
            debug!("{attacker_id} attacks {target_id}");

            if let Some(attacker) = state.players[player].minion_mut(attacker_id) {
                attacker.current_health -= defender_damage;
            }
            events.push(GameEvent::MinionDamaged {
                minion: attacker_id,
                damage: defender_damage,
            });
            if let Some(defender) = state.players[defender_seat].minion_mut(target_id) {
                defender.current_health -= attacker_damage;
            }
            events.push(GameEvent::MinionDamaged {
                minion: target_id,
                damage: attacker_damage,
            });

            effects::combat_hook(state, &mut events, player, attacker_effect, attacker_damage);

            if let Some(attacker) = state.players[player].minion_mut(attacker_id) {
                attacker.can_attack = false;
            }

            sweep_deaths(state, &mut events);
        }
        AttackTarget::Hero => {
            if !effects::attack_target_legal(&state.players[defender_seat], target) {
                return Err(ActionError::TauntInTheWay);
            }
            debug!("{attacker_id} attacks {defender_seat}'s hero");

            state.players[defender_seat].health -= attacker_damage;
            events.push(GameEvent::HeroDamaged {
                player: defender_seat,
                damage: attacker_damage,
            });

            effects::combat_hook(state, &mut events, player, attacker_effect, attacker_damage);

            if let Some(attacker) = state.players[player].minion_mut(attacker_id) {
                attacker.can_attack = false;
            }

            check_hero_death(state, defender_seat, &mut events);
        }
    }

    Ok(events)
}

/// Remove every dead minion from both boards.
///
/// Each removal appends the template card to the owner's graveyard and
/// fires the death hook; hook damage may create further deaths, which
/// the loop picks up until both boards are clean.
pub(crate) fn sweep_deaths(state: &mut GameState, events: &mut Vec<GameEvent>) {
    for seat in PlayerId::both() {
        loop {
            let dead = state.players[seat]
                .board
                .iter()
                .find(|m| m.is_dead())
                .map(|m| m.id);
            let Some(id) = dead else { break };
            let Some(minion) = state.players[seat].remove_minion(id) else {
                break;
            };
            let name = minion.card.name.clone();
            let effect = minion.effect();
            debug!("{id} ({name}) dies on {seat}'s board");
            state.players[seat].graveyard.push_back(minion.card);
            events.push(GameEvent::MinionDied {
                player: seat,
                minion: id,
                name,
            });
            effects::death_hook(state, events, seat, id, effect);
        }
    }
}

/// Win check after a hero-health mutation.
///
/// Sets the winner to the other seat exactly once; a later hero death
/// in the same resolution cannot overwrite it.
pub(crate) fn check_hero_death(
    state: &mut GameState,
    damaged: PlayerId,
    events: &mut Vec<GameEvent>,
) {
    if state.winner.is_none() && state.players[damaged].is_dead() {
        let winner = damaged.opponent();
        state.winner = Some(winner);
        info!("{winner} wins the match");
        events.push(GameEvent::GameWon { winner });
    }
}
