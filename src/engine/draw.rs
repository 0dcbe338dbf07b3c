//! Draw engine: the once-per-turn draw and its two failure modes.
//!
//! A draw resolves to exactly one of three outcomes:
//! - the front card of the deck goes to hand,
//! - the hand is full and the card burns (discarded outright - it does
//!   NOT reach the graveyard), or
//! - the deck is empty and the player takes escalating fatigue damage.
//!
//! The outcome is returned as data; the turn controller translates it
//! into events and runs the death check after fatigue.

use crate::cards::{Card, CardId};
use crate::core::PlayerState;

/// What a single draw did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    /// The card was added to the hand.
    Drawn(CardId),
    /// The hand was full; the card was discarded unused.
    Burned(Card),
    /// The deck was empty; the player took this much fatigue damage.
    Fatigue(i32),
}

/// Resolve one draw for `player`.
///
/// Fatigue damage equals the fatigue counter AFTER incrementing, so
/// successive empty draws inflict 1, 2, 3, 4... damage. The caller owns
/// the death check that must follow.
pub fn draw(player: &mut PlayerState, hand_limit: usize) -> DrawOutcome {
    match player.deck.pop_front() {
        Some(instance) => {
            if player.hand.len() >= hand_limit {
                DrawOutcome::Burned(instance.card)
            } else {
                let id = instance.id;
                player.hand.push(instance);
                DrawOutcome::Drawn(id)
            }
        }
        None => {
            player.fatigue_counter += 1;
            let damage = player.fatigue_counter as i32;
            player.health -= damage;
            DrawOutcome::Fatigue(damage)
        }
    }
}
