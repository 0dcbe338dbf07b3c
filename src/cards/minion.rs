//! Card instances - runtime card state.
//!
//! Every card dealt into a match gets a `CardId` distinct from its
//! template name, because duplicate templates coexist. The id follows
//! the card from deck to hand; when the card is played, the board
//! `Minion` keeps the same id.
//!
//! A `Minion` is owned exclusively by the board it sits on. When it
//! dies, the instance is destroyed and its template `Card` moves to the
//! owner's graveyard.

use serde::{Deserialize, Serialize};

use super::card::{Card, CardEffect};

/// Unique identifier for a card instance within one match.
///
/// Allocated at game creation; never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card instance id.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "card#{}", self.0)
    }
}

/// A dealt card in a deck or hand: instance id plus template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInstance {
    /// Instance identity.
    pub id: CardId,

    /// The template this instance was dealt from.
    pub card: Card,
}

impl CardInstance {
    /// Create a card instance.
    #[must_use]
    pub fn new(id: CardId, card: Card) -> Self {
        Self { id, card }
    }
}

/// A minion in play.
///
/// Combat mutates `current_attack`/`current_health`; the embedded
/// template stays untouched and is what reaches the graveyard on death.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Minion {
    /// Instance identity, carried over from the hand card.
    pub id: CardId,

    /// The template this minion was summoned from (read-only during
    /// resolution).
    pub card: Card,

    /// Attack value, may diverge from the template.
    pub current_attack: i32,

    /// Health value, may go negative transiently during resolution.
    pub current_health: i32,

    /// Whether this minion may attack right now. Cleared when it
    /// attacks; restored at its owner's turn start.
    pub can_attack: bool,
}

impl Minion {
    /// Summon a minion from a hand card.
    ///
    /// `ready` decides whether it can attack this turn (true only for
    /// charge minions).
    #[must_use]
    pub fn summon(instance: CardInstance, ready: bool) -> Self {
        Self {
            id: instance.id,
            current_attack: instance.card.attack,
            current_health: instance.card.health,
            can_attack: ready,
            card: instance.card,
        }
    }

    /// Whether this minion has died and must leave the board.
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.current_health <= 0
    }

    /// The effect tag this minion carries.
    #[must_use]
    pub fn effect(&self) -> CardEffect {
        self.card.effect
    }
}
