//! Effect hooks: the closed set of combat modifiers.
//!
//! Each `CardEffect` variant hooks into exactly one resolution point:
//!
//! | effect      | hook point                     |
//! |-------------|--------------------------------|
//! | Charge      | summoning (enters ready)       |
//! | Taunt       | attack target validation       |
//! | Lifesteal   | after combat damage (attacker) |
//! | Battlecry   | after a card is played         |
//! | Deathrattle | after a minion dies            |
//!
//! This is not a scripting surface; the semantics of every variant are
//! fixed here and matched exhaustively, so a new effect is a new enum
//! variant plus a new arm.

use log::debug;

use crate::cards::{Card, CardEffect, CardId};
use crate::core::{AttackTarget, GameEvent, GameState, PlayerId, PlayerState};

use super::combat;

/// Damage a battlecry deals to a random enemy minion.
pub const BATTLECRY_DAMAGE: i32 = 2;

/// Damage a deathrattle deals to the opposing hero.
pub const DEATHRATTLE_DAMAGE: i32 = 1;

/// Whether a card enters play able to attack immediately.
#[must_use]
pub fn enters_play_ready(card: &Card) -> bool {
    matches!(card.effect, CardEffect::Charge)
}

/// Whether `target` is a legal attack target against `defender`.
///
/// While the defending board holds any taunt minion, both the hero and
/// non-taunt minions are off limits.
#[must_use]
pub fn attack_target_legal(defender: &PlayerState, target: AttackTarget) -> bool {
    let has_taunt = defender
        .board
        .iter()
        .any(|m| m.effect() == CardEffect::Taunt);
    if !has_taunt {
        return true;
    }
    match target {
        AttackTarget::Hero => false,
        AttackTarget::Minion(id) => defender
            .minion(id)
            .is_some_and(|m| m.effect() == CardEffect::Taunt),
    }
}

/// Hook invoked after combat damage, for the attacker only.
///
/// `damage` is the attacker's own pre-mutation attack value, not the
/// total damage on the battlefield. Runs whether or not the attacker
/// survived the exchange.
pub fn combat_hook(
    state: &mut GameState,
    events: &mut Vec<GameEvent>,
    owner: PlayerId,
    effect: CardEffect,
    damage: i32,
) {
    if effect != CardEffect::Lifesteal || damage <= 0 {
        return;
    }
    let healed = state.players[owner].heal(damage);
    debug!("lifesteal heals {owner} for {healed}");
    if healed > 0 {
        events.push(GameEvent::HeroHealed {
            player: owner,
            amount: healed,
        });
    }
}

/// Hook invoked after a card is played.
///
/// Battlecry damages a random enemy minion; a no-op on an empty enemy
/// board. The caller runs the death sweep afterwards.
pub fn play_hook(
    state: &mut GameState,
    events: &mut Vec<GameEvent>,
    owner: PlayerId,
    effect: CardEffect,
) {
    if effect != CardEffect::Battlecry {
        return;
    }
    let enemy = owner.opponent();
    let board_len = state.players[enemy].board.len();
    if board_len == 0 {
        return;
    }
    let index = state.rng.gen_range_usize(0..board_len);
    let minion = &mut state.players[enemy].board[index];
    minion.current_health -= BATTLECRY_DAMAGE;
    debug!("battlecry hits {} for {BATTLECRY_DAMAGE}", minion.id);
    events.push(GameEvent::MinionDamaged {
        minion: minion.id,
        damage: BATTLECRY_DAMAGE,
    });
}

/// Hook invoked after a minion dies.
///
/// Deathrattle damages the opposing hero; the win check follows
/// immediately, as after any hero-health mutation.
pub fn death_hook(
    state: &mut GameState,
    events: &mut Vec<GameEvent>,
    owner: PlayerId,
    minion: CardId,
    effect: CardEffect,
) {
    if effect != CardEffect::Deathrattle {
        return;
    }
    let enemy = owner.opponent();
    state.players[enemy].health -= DEATHRATTLE_DAMAGE;
    debug!("deathrattle of {minion} hits {enemy} for {DEATHRATTLE_DAMAGE}");
    events.push(GameEvent::HeroDamaged {
        player: enemy,
        damage: DEATHRATTLE_DAMAGE,
    });
    combat::check_hero_death(state, enemy, events);
}
