//! Action representation.
//!
//! External input (a human player or an AI collaborator) drives the
//! engine exclusively through `Action` values handed to
//! `apply_action`. The engine validates every action against the
//! current state before mutating anything.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::CardId;

/// What an attack is aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackTarget {
    /// A minion on the defending board.
    Minion(CardId),
    /// The defending hero directly.
    Hero,
}

/// A complete game action.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Summon a card from the acting player's hand.
    PlayCard { card: CardId },

    /// Attack with a board minion.
    Attack {
        attacker: CardId,
        target: AttackTarget,
    },

    /// Hand the turn to the opponent.
    EndTurn,

    /// Forfeit the match.
    Concede,
}

/// A recorded action with metadata for history tracking.
///
/// Used for replay, debugging, and post-game analysis.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The seat that took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when the action resolved.
    pub turn: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32) -> Self {
        Self {
            player,
            action,
            turn,
        }
    }
}
