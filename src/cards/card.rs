//! Card templates - static card data.
//!
//! A `Card` holds the immutable properties of a card as supplied by the
//! external catalog: what it costs, the stats it enters play with, and
//! which (if any) of the closed set of effects it carries.
//!
//! Instance-specific data (current stats, readiness, zone) is stored
//! separately: see `CardInstance` and `Minion`.

use serde::{Deserialize, Serialize};

/// The closed set of card effects.
///
/// Modeled as a tagged variant rather than a string so every resolution
/// site matches exhaustively; adding an effect is a compile-visible
/// change, not a new magic string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardEffect {
    /// No effect.
    #[default]
    None,
    /// Can attack the turn it is played.
    Charge,
    /// While on the board, enemy attacks must target a taunt minion.
    Taunt,
    /// Attacking heals the owner by the damage the minion dealt.
    Lifesteal,
    /// On play: deal damage to a random enemy minion.
    Battlecry,
    /// On death: deal damage to the opposing hero.
    Deathrattle,
}

/// Static card template.
///
/// Immutable for the whole match; board minions copy their starting
/// stats from here and mutate their own copies.
///
/// ## Example
///
/// ```
/// use duelcore::cards::{Card, CardEffect};
///
/// let vamp = Card::new("Vamp", 4, 3, 3).with_effect(CardEffect::Lifesteal);
///
/// assert_eq!(vamp.cost, 4);
/// assert_eq!(vamp.effect, CardEffect::Lifesteal);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Card name (for display/debugging; not an identity).
    pub name: String,

    /// Mana cost to play.
    pub cost: u32,

    /// Attack the minion enters play with.
    pub attack: i32,

    /// Health the minion enters play with.
    pub health: i32,

    /// Effect tag from the closed enumeration.
    #[serde(default)]
    pub effect: CardEffect,
}

impl Card {
    /// Create a new card with no effect.
    #[must_use]
    pub fn new(name: impl Into<String>, cost: u32, attack: i32, health: i32) -> Self {
        Self {
            name: name.into(),
            cost,
            attack,
            health,
            effect: CardEffect::None,
        }
    }

    /// Set the effect tag (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: CardEffect) -> Self {
        self.effect = effect;
        self
    }
}
